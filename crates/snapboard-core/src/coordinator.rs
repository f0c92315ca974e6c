//! Wiring between host drag events and the snap engines.

use crate::config::SnapConfig;
use crate::error::{SnapboardError, SnapboardResult};
use crate::guides::{GuideCategory, GuideMarker, GuideRegistry};
use crate::host::SnapHost;
use crate::object::{ObjectFlags, SceneObject};
use crate::shapes::ObjectId;
use crate::snap::{BoundaryEngine, PeerEngine, SnapPass};
use kurbo::Point;

/// What one movement tick did to the dragged shape.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveOutcome {
    /// Top-left position after both engines ran.
    pub position: Point,
    /// Boundary pass, if the engine ran.
    pub boundary: Option<SnapPass>,
    /// Peer pass, if the engine ran.
    pub peers: Option<SnapPass>,
}

impl MoveOutcome {
    /// Check if either engine moved the shape.
    pub fn is_snapped(&self) -> bool {
        [&self.boundary, &self.peers]
            .into_iter()
            .flatten()
            .any(SnapPass::is_snapped)
    }
}

/// State of a pointer-driven drag.
#[derive(Debug, Clone)]
struct DragState {
    shape_id: ObjectId,
    /// Pointer position when the drag started.
    start_pointer: Point,
    /// Shape top-left when the drag started.
    start_position: Point,
}

/// Runs the boundary and peer engines on host drag events.
#[derive(Debug, Clone)]
pub struct DragCoordinator {
    boundary: BoundaryEngine,
    peers: PeerEngine,
    boundary_enabled: bool,
    peers_enabled: bool,
    drag: Option<DragState>,
}

impl Default for DragCoordinator {
    fn default() -> Self {
        Self::new(&SnapConfig::default())
    }
}

impl DragCoordinator {
    pub fn new(config: &SnapConfig) -> Self {
        Self {
            boundary: BoundaryEngine::new(config.boundary_threshold),
            peers: PeerEngine::new(config.peer_threshold, config.peer_center_scale),
            boundary_enabled: config.boundary_enabled,
            peers_enabled: config.peers_enabled,
            drag: None,
        }
    }

    /// The "shape moving" hook.
    ///
    /// Runs the boundary engine to completion, then the peer engine on the
    /// result, then raises the dragged shape and every always-on-top object.
    pub fn on_shape_moving<H: SnapHost + ?Sized>(&self, host: &mut H, shape_id: &str) -> Option<MoveOutcome> {
        host.shape_geometry(shape_id)?;

        let boundary = if self.boundary_enabled {
            self.boundary.check(host, shape_id)
        } else {
            None
        };
        let peers = if self.peers_enabled {
            self.peers.check(host, shape_id)
        } else {
            None
        };

        host.bring_to_front(shape_id);
        for id in host.always_on_top() {
            host.bring_to_front(&id);
        }

        let position = host.shape_geometry(shape_id)?.position();
        Some(MoveOutcome {
            position,
            boundary,
            peers,
        })
    }

    /// The "shape modified" hook: drop every marker of both categories.
    pub fn on_shape_modified<H: SnapHost + ?Sized>(&self, host: &mut H) {
        let mut registry = GuideRegistry::new(host);
        let removed = registry.clear(GuideCategory::Boundary) + registry.clear(GuideCategory::Peer);
        log::debug!("drag ended; removed {removed} guide(s)");
    }

    /// Start dragging `shape_id` with the pointer at `pointer`.
    ///
    /// A drag still in progress is ended first, markers included.
    pub fn begin_drag<H: SnapHost + ?Sized>(
        &mut self,
        host: &mut H,
        shape_id: &str,
        pointer: Point,
    ) -> SnapboardResult<()> {
        let object = host
            .list_objects()
            .into_iter()
            .find(|object| object.id() == shape_id)
            .ok_or_else(|| SnapboardError::ObjectNotFound(shape_id.to_string()))?;

        let start_position = match object {
            SceneObject::Shape(shape) if object.flags().contains(ObjectFlags::SELECTABLE) => {
                shape.geometry.position()
            }
            _ => return Err(SnapboardError::NotDraggable(shape_id.to_string())),
        };

        if let Some(previous) = self.drag.take() {
            log::warn!("drag of {} replaced before it ended", previous.shape_id);
            self.on_shape_modified(host);
        }
        self.drag = Some(DragState {
            shape_id: shape_id.to_string(),
            start_pointer: pointer,
            start_position,
        });
        Ok(())
    }

    /// Move the dragged shape with the pointer, then run the moving hook.
    ///
    /// Returns `None` when no drag is active or the shape has disappeared.
    pub fn drag_to<H: SnapHost + ?Sized>(&mut self, host: &mut H, pointer: Point) -> Option<MoveOutcome> {
        let drag = self.drag.as_ref()?;
        let position = drag.start_position + (pointer - drag.start_pointer);
        if !host.set_shape_position(&drag.shape_id, position) {
            log::warn!("dragged shape {} is gone; ending drag", drag.shape_id);
            self.drag = None;
            return None;
        }
        let shape_id = drag.shape_id.clone();
        self.on_shape_moving(host, &shape_id)
    }

    /// Release the pointer. Returns the shape that was being dragged.
    pub fn end_drag<H: SnapHost + ?Sized>(&mut self, host: &mut H) -> Option<ObjectId> {
        self.on_shape_modified(host);
        self.drag.take().map(|drag| drag.shape_id)
    }

    /// Check if a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The shape currently being dragged.
    pub fn dragged(&self) -> Option<&str> {
        self.drag.as_ref().map(|drag| drag.shape_id.as_str())
    }
}

/// Every live marker on `host`, boundary markers first.
pub fn live_guides<H: SnapHost + ?Sized>(host: &mut H) -> Vec<GuideMarker> {
    let registry = GuideRegistry::new(host);
    let mut markers = registry.live(GuideCategory::Boundary);
    markers.extend(registry.live(GuideCategory::Peer));
    markers
}
