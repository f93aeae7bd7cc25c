//! Renderer - frame buffer, output batching, diff rendering.

pub mod buffer;
pub mod diff;
pub mod output;

pub use buffer::{char_width, string_width, truncate_to_width, FrameBuffer};
pub use diff::DiffRenderer;
pub use output::{to_crossterm_color, OutputBuffer, StatefulCellRenderer};
