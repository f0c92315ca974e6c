//! The artboard: the exportable sub-region of the surface.

use super::{ObjectId, SerializableColor};
use crate::geometry::ShapeGeometry;
use serde::{Deserialize, Serialize};

/// Identifier of the artboard rectangle that acts as the snap boundary.
pub const ARTBOARD_BOUNDARY_ID: &str = "artboard-lower";

/// Identifier of the visible artboard rectangle kept above everything else.
pub const ARTBOARD_OVERLAY_ID: &str = "artboard-upper";

/// Prefix shared by every artboard identifier.
pub const ARTBOARD_ID_PREFIX: &str = "artboard-";

/// Which of the two artboard rectangles this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtboardRole {
    /// Source of truth for surface bounds; boundary snapping targets it.
    Boundary,
    /// Visible frame drawn on top of the scene.
    Overlay,
}

/// A non-interactive artboard rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artboard {
    pub(crate) id: ObjectId,
    pub role: ArtboardRole,
    #[serde(flatten)]
    pub geometry: ShapeGeometry,
    pub fill: SerializableColor,
}

impl Artboard {
    /// Create the boundary rectangle.
    pub fn boundary(geometry: ShapeGeometry) -> Self {
        Self {
            id: ARTBOARD_BOUNDARY_ID.to_string(),
            role: ArtboardRole::Boundary,
            geometry,
            fill: SerializableColor::white(),
        }
    }

    /// Create the always-on-top overlay rectangle.
    pub fn overlay(geometry: ShapeGeometry) -> Self {
        Self {
            id: ARTBOARD_OVERLAY_ID.to_string(),
            role: ArtboardRole::Overlay,
            geometry,
            fill: SerializableColor::white(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_boundary(&self) -> bool {
        self.role == ArtboardRole::Boundary
    }
}
