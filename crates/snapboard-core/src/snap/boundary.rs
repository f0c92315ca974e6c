//! Snapping to the artboard boundary.

use super::{SnapPass, BOUNDARY_SNAP_THRESHOLD};
use crate::geometry::{is_aligned, ShapeGeometry};
use crate::guides::{GuideCategory, GuideEdge, GuideMarker, GuideRegistry};
use crate::host::SnapHost;

const CATEGORY: GuideCategory = GuideCategory::Boundary;

/// Align `shape` with the edges and center of `boundary`.
///
/// Both boxes are read once, before any adjustment. The six checks run in a
/// fixed order (left, right, center-x, top, bottom, center-y) and do not
/// exclude each other: when two checks on the same axis match, the later one
/// decides the final coordinate.
pub fn snap_to_boundary(shape: &ShapeGeometry, boundary: &ShapeGeometry, threshold: f64) -> SnapPass {
    let target = shape.bounding_box();
    let frame = boundary.bounding_box();
    let mut pass = SnapPass::none(CATEGORY, shape.position());

    let vertical = [
        (GuideEdge::Left, target.left, frame.left, frame.left),
        (GuideEdge::Right, target.right, frame.right, frame.right - target.width),
        (
            GuideEdge::Center,
            target.center_x,
            frame.center_x,
            frame.center_x - target.width / 2.0,
        ),
    ];
    for (edge, ours, theirs, left) in vertical {
        if is_aligned(ours, theirs, threshold) {
            log::trace!("boundary {}: {ours} ~ {theirs}", edge.as_str());
            pass.snap_x(left, GuideMarker::vertical(CATEGORY, edge, theirs, frame.top, frame.bottom));
        }
    }

    let horizontal = [
        (GuideEdge::Top, target.top, frame.top, frame.top),
        (GuideEdge::Bottom, target.bottom, frame.bottom, frame.bottom - target.height),
        (
            GuideEdge::Center,
            target.center_y,
            frame.center_y,
            frame.center_y - target.height / 2.0,
        ),
    ];
    for (edge, ours, theirs, top) in horizontal {
        if is_aligned(ours, theirs, threshold) {
            log::trace!("boundary {}: {ours} ~ {theirs}", edge.as_str());
            pass.snap_y(top, GuideMarker::horizontal(CATEGORY, edge, theirs, frame.left, frame.right));
        }
    }

    pass
}

/// Boundary snap engine bound to a threshold.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryEngine {
    pub threshold: f64,
}

impl Default for BoundaryEngine {
    fn default() -> Self {
        Self {
            threshold: BOUNDARY_SNAP_THRESHOLD,
        }
    }
}

impl BoundaryEngine {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Run one tick for `shape_id`: clear boundary markers, recompute, apply.
    ///
    /// Returns `None` without computing anything when the host has no
    /// artboard or the shape is unknown.
    pub fn check<H: SnapHost + ?Sized>(&self, host: &mut H, shape_id: &str) -> Option<SnapPass> {
        GuideRegistry::new(&mut *host).clear(CATEGORY);

        let Some(boundary) = host.artboard_boundary() else {
            log::debug!("no artboard boundary; skipping boundary snap");
            return None;
        };
        let shape = host.shape_geometry(shape_id)?;

        let pass = snap_to_boundary(&shape, &boundary, self.threshold);
        if pass.is_snapped() {
            log::debug!(
                "shape {shape_id} snapped to artboard at ({}, {}) with {} guide(s)",
                pass.position.x,
                pass.position.y,
                pass.markers.len()
            );
        }
        pass.apply(host, shape_id);
        Some(pass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    fn artboard() -> ShapeGeometry {
        ShapeGeometry::new(0.0, 0.0, 500.0, 500.0)
    }

    fn ids(pass: &SnapPass) -> Vec<String> {
        pass.markers.iter().map(|m| m.object_id()).collect()
    }

    #[test]
    fn test_left_edge_snaps() {
        let shape = ShapeGeometry::new(4.0, 300.0, 100.0, 60.0);
        let pass = snap_to_boundary(&shape, &artboard(), 10.0);
        assert_eq!(pass.position, Point::new(0.0, 300.0));
        assert_eq!(ids(&pass), vec!["vertical-canvas-left"]);
        let line = pass.markers[0].line;
        assert_eq!(line.p0, Point::new(0.0, 0.0));
        assert_eq!(line.p1, Point::new(0.0, 500.0));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let shape = ShapeGeometry::new(10.0, 300.0, 100.0, 60.0);
        let pass = snap_to_boundary(&shape, &artboard(), 10.0);
        assert!(!pass.is_snapped());
        assert_eq!(pass.position, Point::new(10.0, 300.0));

        let shape = ShapeGeometry::new(10.0 - 1e-9, 300.0, 100.0, 60.0);
        let pass = snap_to_boundary(&shape, &artboard(), 10.0);
        assert!(pass.snapped_x);
        assert!(pass.position.x.abs() < f64::EPSILON);
    }

    #[test]
    fn test_right_edge_preserves_size() {
        let shape = ShapeGeometry::new(395.0, 300.0, 50.0, 60.0).with_scale(2.0, 1.0);
        let pass = snap_to_boundary(&shape, &artboard(), 10.0);
        assert!((pass.position.x - 400.0).abs() < f64::EPSILON);
        assert_eq!(ids(&pass), vec!["vertical-canvas-right"]);
    }

    #[test]
    fn test_centers_snap() {
        let shape = ShapeGeometry::new(203.0, 218.0, 100.0, 60.0);
        let pass = snap_to_boundary(&shape, &artboard(), 10.0);
        assert_eq!(pass.position, Point::new(200.0, 220.0));
        assert_eq!(ids(&pass), vec!["vertical-canvas-center", "horizontal-canvas-center"]);
        let horizontal = pass.markers[1].line;
        assert_eq!(horizontal.p0, Point::new(0.0, 250.0));
        assert_eq!(horizontal.p1, Point::new(500.0, 250.0));
    }

    #[test]
    fn test_later_condition_on_axis_wins() {
        // Nearly as wide as the artboard: left, right and center all qualify.
        let shape = ShapeGeometry::new(4.0, 300.0, 496.0, 60.0);
        let pass = snap_to_boundary(&shape, &artboard(), 10.0);
        assert!((pass.position.x - 2.0).abs() < f64::EPSILON);
        assert_eq!(
            ids(&pass),
            vec!["vertical-canvas-left", "vertical-canvas-right", "vertical-canvas-center"]
        );
    }

    #[test]
    fn test_scaled_artboard() {
        let board = ShapeGeometry::new(100.0, 100.0, 400.0, 400.0).with_scale(0.5, 0.5);
        let shape = ShapeGeometry::new(250.0, 242.0, 50.0, 50.0);
        let pass = snap_to_boundary(&shape, &board, 10.0);
        assert_eq!(pass.position, Point::new(250.0, 250.0));
        assert_eq!(ids(&pass), vec!["vertical-canvas-right", "horizontal-canvas-bottom"]);
        assert_eq!(pass.markers[0].line.p1, Point::new(300.0, 300.0));
    }

    #[test]
    fn test_snapping_is_idempotent() {
        let shape = ShapeGeometry::new(4.0, 7.0, 100.0, 60.0);
        let first = snap_to_boundary(&shape, &artboard(), 10.0);
        let mut moved = shape;
        moved.set_position(first.position);
        let second = snap_to_boundary(&moved, &artboard(), 10.0);
        assert_eq!(first.position, second.position);
        assert_eq!(first.markers, second.markers);
    }
}
