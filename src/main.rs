//! Credlock - Entry Point
//!
//! A local, single-tenant credential manager with a failed-attempt lockout
//! policy, backed by a flat-file account store.

use log::{error, info};
use std::process::ExitCode;

use credlock::auth::AuthEngine;
use credlock::config::AppConfig;
use credlock::shell::{Shell, TerminalPrompt};
use credlock::store::FileStore;

fn main() -> ExitCode {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Account store: {}", config.store_path);

    let engine = AuthEngine::new(FileStore::new(&config.store_path), config.policy());
    let mut shell = Shell::new(engine, TerminalPrompt::new());

    if let Err(e) = shell.run() {
        error!("Session ended with error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
