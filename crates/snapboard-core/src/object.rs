//! Tagged scene objects and their capability flags.

use crate::geometry::ShapeGeometry;
use crate::guides::GuideMarker;
use crate::shapes::{Artboard, Shape};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    /// What the host and the engines may do with an object.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ObjectFlags: u8 {
        /// Can become the active selection.
        const SELECTABLE  = 0b0000_0001;
        /// Receives pointer events (participates in hit testing).
        const EVENTED     = 0b0000_0010;
        /// Other shapes may snap to it.
        const SNAP_TARGET = 0b0000_0100;
        /// Transient annotation drawn over the scene.
        const OVERLAY     = 0b0000_1000;
    }
}

/// Anything stored on the surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "object", rename_all = "snake_case")]
pub enum SceneObject {
    Shape(Shape),
    Artboard(Artboard),
    Guide(GuideMarker),
}

impl SceneObject {
    /// Identifier under which the surface stores this object.
    pub fn id(&self) -> String {
        match self {
            SceneObject::Shape(s) => s.id().to_string(),
            SceneObject::Artboard(a) => a.id().to_string(),
            SceneObject::Guide(g) => g.object_id(),
        }
    }

    pub fn flags(&self) -> ObjectFlags {
        match self {
            SceneObject::Shape(_) => ObjectFlags::SELECTABLE | ObjectFlags::EVENTED | ObjectFlags::SNAP_TARGET,
            SceneObject::Artboard(_) => ObjectFlags::empty(),
            SceneObject::Guide(_) => ObjectFlags::OVERLAY,
        }
    }

    /// Eligible as a peer alignment target.
    pub fn is_snap_target(&self) -> bool {
        self.flags().contains(ObjectFlags::SNAP_TARGET)
    }

    pub fn is_overlay(&self) -> bool {
        self.flags().contains(ObjectFlags::OVERLAY)
    }

    /// Box geometry, for objects that have one.
    pub fn geometry(&self) -> Option<ShapeGeometry> {
        match self {
            SceneObject::Shape(s) => Some(s.geometry),
            SceneObject::Artboard(a) => Some(a.geometry),
            SceneObject::Guide(_) => None,
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            SceneObject::Shape(s) => s.bounds(),
            SceneObject::Artboard(a) => a.geometry.bounding_box().to_rect(),
            SceneObject::Guide(g) => Rect::from_points(g.line.p0, g.line.p1),
        }
    }

    /// Pointer hit test; objects without `EVENTED` never hit.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        if !self.flags().contains(ObjectFlags::EVENTED) {
            return false;
        }
        self.as_shape().is_some_and(|s| s.hit_test(point, tolerance))
    }

    pub fn as_shape(&self) -> Option<&Shape> {
        match self {
            SceneObject::Shape(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_shape_mut(&mut self) -> Option<&mut Shape> {
        match self {
            SceneObject::Shape(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_guide(&self) -> Option<&GuideMarker> {
        match self {
            SceneObject::Guide(g) => Some(g),
            _ => None,
        }
    }
}

impl From<Shape> for SceneObject {
    fn from(shape: Shape) -> Self {
        SceneObject::Shape(shape)
    }
}

impl From<Artboard> for SceneObject {
    fn from(artboard: Artboard) -> Self {
        SceneObject::Artboard(artboard)
    }
}
