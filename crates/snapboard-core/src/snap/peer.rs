//! Snapping to other shapes on the surface.

use super::{SnapPass, PEER_SNAP_THRESHOLD};
use crate::config::PeerCenterScale;
use crate::geometry::{is_aligned, ShapeGeometry};
use crate::guides::{GuideCategory, GuideEdge, GuideMarker, GuideRegistry};
use crate::host::SnapHost;
use crate::object::SceneObject;

const CATEGORY: GuideCategory = GuideCategory::Peer;

/// Center of a peer as used by the center alignment checks.
///
/// With [`PeerCenterScale::CrossAxis`] the x center is scaled by `scale_y`
/// and the y center by `scale_x`; the snapped position itself always uses
/// the matching axis.
pub fn peer_centers(peer: &ShapeGeometry, mode: PeerCenterScale) -> (f64, f64) {
    match mode {
        PeerCenterScale::CrossAxis => (
            peer.left + peer.width * peer.scale_y / 2.0,
            peer.top + peer.height * peer.scale_x / 2.0,
        ),
        PeerCenterScale::PerAxis => {
            let bbox = peer.bounding_box();
            (bbox.center_x, bbox.center_y)
        }
    }
}

/// Align `shape` with every peer in iteration order.
///
/// For each peer the checks run as: center-y, center-x, top, bottom, left,
/// right. The dragged box is read once up front. Every match moves the shape,
/// so the last matching peer decides the coordinate, while the marker for an
/// identifier keeps the span of the first peer that produced it.
pub fn snap_to_peers(
    shape: &ShapeGeometry,
    peers: &[ShapeGeometry],
    threshold: f64,
    mode: PeerCenterScale,
) -> SnapPass {
    let target = shape.bounding_box();
    let mut pass = SnapPass::none(CATEGORY, shape.position());

    for peer in peers {
        let other = peer.bounding_box();
        let (peer_cx, peer_cy) = peer_centers(peer, mode);

        if is_aligned(target.center_y, peer_cy, threshold) {
            pass.snap_y(
                other.center_y - target.height / 2.0,
                GuideMarker::horizontal(CATEGORY, GuideEdge::Center, peer_cy, target.center_x, peer_cx),
            );
        }

        if is_aligned(target.center_x, peer_cx, threshold) {
            pass.snap_x(
                other.center_x - target.width / 2.0,
                GuideMarker::vertical(CATEGORY, GuideEdge::Center, peer_cx, target.center_y, peer_cy),
            );
        }

        if is_aligned(target.top, other.top, threshold) {
            pass.snap_y(
                other.top,
                GuideMarker::horizontal(CATEGORY, GuideEdge::Top, other.top, target.center_x, other.center_x),
            );
        }

        if is_aligned(target.bottom, other.bottom, threshold) {
            pass.snap_y(
                other.bottom - target.height,
                GuideMarker::horizontal(
                    CATEGORY,
                    GuideEdge::Bottom,
                    other.bottom,
                    target.center_x,
                    other.center_x,
                ),
            );
        }

        if is_aligned(target.left, other.left, threshold) {
            pass.snap_x(
                other.left,
                GuideMarker::vertical(CATEGORY, GuideEdge::Left, other.left, target.center_y, peer_cy),
            );
        }

        if is_aligned(target.right, other.right, threshold) {
            pass.snap_x(
                other.right - target.width,
                GuideMarker::vertical(CATEGORY, GuideEdge::Right, other.right, target.center_y, peer_cy),
            );
        }
    }

    pass
}

/// Peer snap engine bound to a threshold and center formula.
#[derive(Debug, Clone, Copy)]
pub struct PeerEngine {
    pub threshold: f64,
    pub center_scale: PeerCenterScale,
}

impl Default for PeerEngine {
    fn default() -> Self {
        Self {
            threshold: PEER_SNAP_THRESHOLD,
            center_scale: PeerCenterScale::default(),
        }
    }
}

impl PeerEngine {
    pub fn new(threshold: f64, center_scale: PeerCenterScale) -> Self {
        Self {
            threshold,
            center_scale,
        }
    }

    /// Geometry of every snap target except `shape_id`, in draw order.
    ///
    /// Artboards and guide markers carry no `SNAP_TARGET` flag and are never
    /// returned.
    pub fn candidates<H: SnapHost + ?Sized>(host: &H, shape_id: &str) -> Vec<ShapeGeometry> {
        host.list_objects()
            .into_iter()
            .filter(|object| object.is_snap_target())
            .filter_map(|object| match object {
                SceneObject::Shape(shape) if shape.id() != shape_id => Some(shape.geometry),
                _ => None,
            })
            .collect()
    }

    /// Run one tick for `shape_id`: clear peer markers, recompute, apply.
    ///
    /// Returns `None` without computing anything when the shape is unknown or
    /// there is no other shape to align with.
    pub fn check<H: SnapHost + ?Sized>(&self, host: &mut H, shape_id: &str) -> Option<SnapPass> {
        GuideRegistry::new(&mut *host).clear(CATEGORY);

        let shape = host.shape_geometry(shape_id)?;
        let peers = Self::candidates(host, shape_id);
        if peers.is_empty() {
            log::debug!("no peers for shape {shape_id}; skipping peer snap");
            return None;
        }

        let pass = snap_to_peers(&shape, &peers, self.threshold, self.center_scale);
        if pass.is_snapped() {
            log::debug!(
                "shape {shape_id} snapped to peers at ({}, {}) with {} guide(s)",
                pass.position.x,
                pass.position.y,
                pass.markers.len()
            );
        }
        pass.apply(host, shape_id);
        Some(pass)
    }
}
