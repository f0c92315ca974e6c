//! Command-line entry point: `snapboard <scenario.json>`.

use snapboard_app::{AppError, AppResult};
use std::path::PathBuf;
use std::process::ExitCode;

fn parse_args(mut args: impl Iterator<Item = String>) -> AppResult<PathBuf> {
    match (args.next(), args.next()) {
        (Some(path), None) => Ok(PathBuf::from(path)),
        _ => Err(AppError::Usage("usage: snapboard <scenario.json>".to_string())),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let result = parse_args(std::env::args().skip(1)).and_then(|path| {
        log::info!("Replaying {}", path.display());
        snapboard_app::run_file(&path)
    });

    match result {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
