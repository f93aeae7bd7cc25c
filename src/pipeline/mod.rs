//! Reactive Pipeline
//!
//! Connects the filter store to the terminal.
//!
//! ```text
//! FilterStore signals → visible derived ─┐
//! focus signal ──────────────────────────┼→ render effect → compose → DiffRenderer
//! terminal size signal ──────────────────┘                 └→ hit grid
//! ```
//!
//! Only the render effect has side effects (terminal I/O, hit grid).

pub mod mount;
pub mod snapshot;
pub mod terminal;

pub use mount::{mount, run, tick, unmount, MountHandle};
pub use snapshot::{snapshot, ScreenSource};
pub use terminal::{set_terminal_size, terminal_height, terminal_size, terminal_width};
