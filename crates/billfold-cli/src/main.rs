//! Interactive terminal front end for the bill tracker.

mod app;
mod forms;
mod output;
mod session;

use std::sync::Once;

use billfold_core::{BillStore, Clock, SystemClock};
use billfold_storage_json::{default_data_dir, JsonBillStorage};
use dialoguer::theme::ColorfulTheme;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("billfold=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

fn main() {
    init_tracing();
    tracing::info!("billfold starting");

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), app::CliError> {
    let theme = ColorfulTheme::default();
    session::login(&theme)?;

    let storage = JsonBillStorage::new(default_data_dir())?;
    let clock = SystemClock;
    let today = clock.today();
    let store = BillStore::open(Box::new(storage), Box::new(clock))?;
    app::App::new(store, today, theme).run()
}
