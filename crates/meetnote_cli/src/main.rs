//! Terminal front end for the meeting-notes store.
//!
//! # Responsibility
//! - Wire environment config, file logging and the prompt loop together.
//! - Keep all note state in memory for the lifetime of the process.

mod command;
mod repl;

use log::info;
use meetnote_core::{init_logging, LogSettings, NoteStore, StoreConfig};
use repl::Repl;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let log_settings = LogSettings::from_env();
    let log_dir = log_settings.log_dir.to_string_lossy();
    // Logging is optional for the CLI; a bad setup only costs diagnostics.
    if let Err(err) = init_logging(&log_settings.level, &log_dir) {
        eprintln!("logging disabled: {err}");
    }

    let config = match StoreConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };
    info!(
        "event=cli_start module=cli status=ok version={} seed_examples={} require_title={}",
        meetnote_core::core_version(),
        config.seed_examples,
        config.require_title
    );

    let stdin = io::stdin();
    let mut repl = Repl::new(NoteStore::new(config), stdin.lock(), io::stdout());
    match repl.run() {
        Ok(()) => {
            info!(
                "event=cli_exit module=cli status=ok notes={}",
                repl.store().len()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("terminal error: {err}");
            ExitCode::FAILURE
        }
    }
}
