//! Main application entry point.

use noughts_app::{App, AppConfig, run_demo};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting Noughts");

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => match AppConfig::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => AppConfig::default(),
    };

    let mut app = App::new(config);
    if let Err(e) = run_demo(&mut app) {
        log::error!("{}", e);
        return ExitCode::FAILURE;
    }

    for command in app.surface().commands() {
        log::info!("{:?}", command);
    }
    log::info!("Drew {} frames", app.frames());
    ExitCode::SUCCESS
}
