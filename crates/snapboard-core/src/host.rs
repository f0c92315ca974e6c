//! The interface the snap engines consume from the scene host.

use crate::geometry::ShapeGeometry;
use crate::object::SceneObject;
use crate::shapes::ObjectId;
use kurbo::Point;

/// A scene graph the snap engines can read and mutate.
///
/// All calls happen synchronously on the thread that owns the scene, inside
/// the host's pointer-move callback; implementations need no locking.
pub trait SnapHost {
    /// All objects in draw order (back to front), markers included.
    fn list_objects(&self) -> Vec<&SceneObject>;

    /// Insert an object on top of the draw order. Returns false if the
    /// identifier is already taken and nothing was inserted.
    fn add_object(&mut self, object: SceneObject) -> bool;

    /// Remove an object by identifier.
    fn remove_object(&mut self, id: &str) -> Option<SceneObject>;

    /// Geometry of the artboard boundary, if one exists.
    fn artboard_boundary(&self) -> Option<ShapeGeometry>;

    /// Geometry of a draggable shape.
    fn shape_geometry(&self, id: &str) -> Option<ShapeGeometry>;

    /// Reposition a shape. Returns false if no such shape exists.
    fn set_shape_position(&mut self, id: &str, position: Point) -> bool;

    /// Move an object to the top of the draw order.
    fn bring_to_front(&mut self, id: &str);

    /// Objects that must stay above everything else, in stacking order.
    fn always_on_top(&self) -> Vec<ObjectId>;

    /// Ask the host to repaint at its next opportunity.
    fn request_redraw(&mut self);
}
