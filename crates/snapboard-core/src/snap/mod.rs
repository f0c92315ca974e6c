//! Alignment snapping for dragged shapes.
//!
//! Two engines run on every movement tick: [`BoundaryEngine`] aligns the
//! dragged shape with the artboard, then [`PeerEngine`] aligns it with the
//! other shapes. Each engine is a pure function producing a [`SnapPass`]
//! (new position plus marker set) and a thin wrapper that applies the pass to
//! a [`SnapHost`].

mod boundary;
mod peer;

pub use boundary::{BoundaryEngine, snap_to_boundary};
pub use peer::{PeerEngine, peer_centers, snap_to_peers};

use crate::guides::{GuideCategory, GuideMarker, GuideRegistry};
use crate::host::SnapHost;
use kurbo::Point;

/// Distance under which an edge snaps to the artboard (in world units).
pub const BOUNDARY_SNAP_THRESHOLD: f64 = 10.0;

/// Distance under which an edge snaps to another shape (in world units).
pub const PEER_SNAP_THRESHOLD: f64 = 5.0;

/// Result of one engine pass over the dragged shape.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapPass {
    /// Which marker category this pass owns.
    pub category: GuideCategory,
    /// Top-left position after snapping.
    pub position: Point,
    /// Markers to show, at most one per identifier.
    pub markers: Vec<GuideMarker>,
    /// Whether the X coordinate was snapped.
    pub snapped_x: bool,
    /// Whether the Y coordinate was snapped.
    pub snapped_y: bool,
}

impl SnapPass {
    /// A pass that leaves the shape where it is.
    pub fn none(category: GuideCategory, position: Point) -> Self {
        Self {
            category,
            position,
            markers: Vec::new(),
            snapped_x: false,
            snapped_y: false,
        }
    }

    /// Check if any snapping occurred.
    pub fn is_snapped(&self) -> bool {
        self.snapped_x || self.snapped_y
    }

    /// Snap the left coordinate and record the marker.
    fn snap_x(&mut self, left: f64, marker: GuideMarker) {
        self.position.x = left;
        self.snapped_x = true;
        self.push_marker(marker);
    }

    /// Snap the top coordinate and record the marker.
    fn snap_y(&mut self, top: f64, marker: GuideMarker) {
        self.position.y = top;
        self.snapped_y = true;
        self.push_marker(marker);
    }

    // First marker for an identifier wins; later matches only move the shape.
    fn push_marker(&mut self, marker: GuideMarker) {
        if !self.markers.iter().any(|m| m.id == marker.id) {
            self.markers.push(marker);
        }
    }

    /// Write the pass back to the host: reposition the shape, add any marker
    /// not already live, then request a single redraw.
    pub fn apply<H: SnapHost + ?Sized>(&self, host: &mut H, shape_id: &str) {
        if self.is_snapped() && !host.set_shape_position(shape_id, self.position) {
            log::warn!("snapped shape {shape_id} vanished before its position was written");
        }
        let mut registry = GuideRegistry::new(&mut *host);
        for marker in &self.markers {
            registry.add(marker.clone());
        }
        host.request_redraw();
    }
}
