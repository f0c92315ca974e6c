//! Scenario files: what to put on the surface and how to drag it.

use crate::error::{AppError, AppResult};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use snapboard_core::{ObjectId, Shape, SnapboardConfig, Surface};
use std::fs;
use std::path::Path;

/// One scripted drag. The first point presses, every later point is a
/// movement tick, and the drag is released after the last one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DragScript {
    pub shape: ObjectId,
    pub path: Vec<[f64; 2]>,
}

impl DragScript {
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.path.iter().map(|&[x, y]| Point::new(x, y))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub config: SnapboardConfig,
    /// Shapes in draw order, back to front.
    pub shapes: Vec<Shape>,
    pub drags: Vec<DragScript>,
}

impl Scenario {
    /// Parse and validate a scenario.
    pub fn from_json(json: &str) -> AppResult<Self> {
        let scenario: Self = serde_json::from_str(json).map_err(|e| AppError::Parse(e.to_string()))?;
        scenario.config.validate()?;
        for drag in &scenario.drags {
            if drag.path.is_empty() {
                return Err(AppError::Parse(format!("drag of {} has an empty path", drag.shape)));
            }
        }
        Ok(scenario)
    }

    /// Read a scenario file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let json = fs::read_to_string(path)
            .map_err(|e| AppError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_json(&json).map_err(|e| match e {
            AppError::Parse(msg) => AppError::Parse(format!("Failed to parse {}: {}", path.display(), msg)),
            other => other,
        })
    }

    /// Build the surface the drags run on.
    pub fn surface(&self) -> AppResult<Surface> {
        let mut surface = Surface::new(&self.config.surface);
        for shape in &self.shapes {
            surface.insert_shape(shape.clone())?;
        }
        log::debug!("surface ready with {} object(s)", surface.len());
        Ok(surface)
    }
}
