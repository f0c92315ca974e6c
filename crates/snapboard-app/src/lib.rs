//! Snapboard replay host.
//!
//! Loads a scenario (surface config, shapes and scripted pointer paths), feeds
//! each path through the drag coordinator and reports where the shape landed
//! and which guides were live after every tick.

mod error;
mod replay;
mod scenario;

pub use error::{AppError, AppResult};
pub use replay::{DragReport, Report, TickReport, replay};
pub use scenario::{DragScript, Scenario};

use std::path::Path;

/// Load the scenario at `path`, replay it and render the report as JSON.
pub fn run_file(path: &Path) -> AppResult<String> {
    let scenario = Scenario::load(path)?;
    let report = replay(&scenario)?;
    serde_json::to_string_pretty(&report).map_err(|e| AppError::Parse(format!("Failed to encode report: {}", e)))
}
