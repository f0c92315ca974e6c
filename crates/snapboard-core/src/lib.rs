//! Snapboard Core Library
//!
//! Alignment and snapping for shapes dragged across an artboard. While a shape
//! moves, the boundary engine aligns it with the artboard and the peer engine
//! aligns it with every other shape; both leave guide markers on the surface
//! until the next tick or the end of the drag.

pub mod config;
pub mod coordinator;
pub mod error;
pub mod geometry;
pub mod guides;
pub mod host;
pub mod object;
pub mod shapes;
pub mod snap;
pub mod surface;

pub use config::{ArtboardConfig, PeerCenterScale, SnapConfig, SnapboardConfig, SurfaceConfig};
pub use coordinator::{DragCoordinator, MoveOutcome, live_guides};
pub use error::{SnapboardError, SnapboardResult};
pub use geometry::{BoundingBox, ShapeGeometry, is_aligned};
pub use guides::{GuideCategory, GuideEdge, GuideId, GuideMarker, GuideRegistry, GuideStyle, Orientation};
pub use host::SnapHost;
pub use object::{ObjectFlags, SceneObject};
pub use shapes::{
    ARTBOARD_BOUNDARY_ID, ARTBOARD_OVERLAY_ID, Artboard, ArtboardRole, ObjectId, PASTE_OFFSET, SerializableColor, Shape,
    ShapeKind, ShapeStyle,
};
pub use snap::{
    BOUNDARY_SNAP_THRESHOLD, BoundaryEngine, PEER_SNAP_THRESHOLD, PeerEngine, SnapPass, snap_to_boundary,
    snap_to_peers,
};
pub use surface::Surface;
