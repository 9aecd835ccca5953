//! fretcoach - guitar lessons in the terminal
//!
//! Run with: cargo run
//!
//! Set `RUST_LOG` (e.g. `RUST_LOG=fretcoach=debug`) to write a log to
//! `fretcoach.log`; the terminal itself belongs to the UI.

mod app;
mod output;
mod ui;

use std::{fs::File, sync::Mutex};

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use tracing_subscriber::EnvFilter;

use app::App;

const LOG_FILE: &str = "fretcoach.log";

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    init_logging()?;

    let terminal = ratatui::init();
    let res = App::new().run(terminal);
    ratatui::restore();
    res
}

fn init_logging() -> EyreResult<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }
    let file = File::create(LOG_FILE).wrap_err_with(|| format!("failed to create {LOG_FILE}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
