//! Configuration for the surface and the snap engines.
//!
//! Every field has a default, so a partial JSON document only overrides what
//! it names.

use crate::error::{SnapboardError, SnapboardResult};
use crate::geometry::ShapeGeometry;
use crate::snap::{BOUNDARY_SNAP_THRESHOLD, PEER_SNAP_THRESHOLD};
use serde::{Deserialize, Serialize};

/// How a peer's center is derived for center alignment checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeerCenterScale {
    /// Vertical center uses the peer's `scale_x` and horizontal center its
    /// `scale_y`, matching the shipped editor.
    #[default]
    CrossAxis,
    /// Each center uses the scale factor of its own axis.
    PerAxis,
}

/// Snap engine settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapConfig {
    pub boundary_threshold: f64,
    pub peer_threshold: f64,
    pub boundary_enabled: bool,
    pub peers_enabled: bool,
    pub peer_center_scale: PeerCenterScale,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            boundary_threshold: BOUNDARY_SNAP_THRESHOLD,
            peer_threshold: PEER_SNAP_THRESHOLD,
            boundary_enabled: true,
            peers_enabled: true,
            peer_center_scale: PeerCenterScale::default(),
        }
    }
}

/// Placement of the artboard within the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtboardConfig {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for ArtboardConfig {
    fn default() -> Self {
        Self {
            left: 100.0,
            top: 100.0,
            width: 800.0,
            height: 800.0,
        }
    }
}

impl ArtboardConfig {
    pub fn geometry(&self) -> ShapeGeometry {
        ShapeGeometry::new(self.left, self.top, self.width, self.height)
    }
}

/// Drawing surface settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub width: f64,
    pub height: f64,
    pub artboard: ArtboardConfig,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 1000.0,
            artboard: ArtboardConfig::default(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapboardConfig {
    pub surface: SurfaceConfig,
    pub snap: SnapConfig,
}

impl SnapboardConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> SnapboardResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject thresholds and sizes the engines cannot work with.
    pub fn validate(&self) -> SnapboardResult<()> {
        let thresholds = [
            ("snap.boundary_threshold", self.snap.boundary_threshold),
            ("snap.peer_threshold", self.snap.peer_threshold),
        ];
        for (name, value) in thresholds {
            if !value.is_finite() || value <= 0.0 {
                return Err(SnapboardError::InvalidConfig(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        let sizes = [
            ("surface.width", self.surface.width),
            ("surface.height", self.surface.height),
            ("surface.artboard.width", self.surface.artboard.width),
            ("surface.artboard.height", self.surface.artboard.height),
        ];
        for (name, value) in sizes {
            if !value.is_finite() || value < 0.0 {
                return Err(SnapboardError::InvalidConfig(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        let origin = [
            ("surface.artboard.left", self.surface.artboard.left),
            ("surface.artboard.top", self.surface.artboard.top),
        ];
        for (name, value) in origin {
            if !value.is_finite() {
                return Err(SnapboardError::InvalidConfig(format!("{name} must be finite")));
            }
        }
        Ok(())
    }
}
