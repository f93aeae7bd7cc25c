use std::process::ExitCode;

use tracing::{error, info};

use product_catalog::config::{Config, Mode};
use product_catalog::pipeline::{self, ScreenSource};
use product_catalog::{logging, resolve_preset, CatalogError, FilterStore, Fixtures, Result};

fn main() -> ExitCode {
    let config = Config::from_args();

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "exiting");
            eprintln!("product-catalog: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: Config) -> Result<()> {
    logging::init(&config)?;

    let fixtures = match &config.data_dir {
        Some(dir) => Fixtures::load_dir(dir)?,
        None => Fixtures::embedded()?,
    };
    let theme = resolve_preset(&config.theme)?;

    info!(
        users = fixtures.users().len(),
        categories = fixtures.categories().len(),
        products = fixtures.products().len(),
        theme = %theme.name,
        "catalog loaded"
    );

    let store = FilterStore::new(fixtures.product_views());
    let initial = config.initial_filter();
    if initial.has_user_filter() {
        store.select_user(&initial.user_for_filter);
    }
    if initial.has_query() {
        store.set_query(&initial.query);
    }

    let source = ScreenSource::new(&fixtures, store, theme);

    match config.mode {
        Mode::Snapshot => {
            let frame = pipeline::snapshot(&source, config.width, config.height);
            println!("{}", frame.to_text());
        }
        Mode::Hooks => {
            let frame = pipeline::snapshot(&source, config.width, config.height);
            let json = frame.regions_json().map_err(CatalogError::Encode)?;
            println!("{json}");
        }
        Mode::Interactive => {
            let handle = pipeline::mount(source)?;
            let result = pipeline::run(&handle);
            handle.unmount();
            result?;
        }
    }

    Ok(())
}
