//! In-memory drawing surface: objects, draw order and the artboard.

use crate::config::SurfaceConfig;
use crate::error::{SnapboardError, SnapboardResult};
use crate::geometry::ShapeGeometry;
use crate::guides::GuideId;
use crate::host::SnapHost;
use crate::object::SceneObject;
use crate::shapes::{ARTBOARD_ID_PREFIX, Artboard, ObjectId, Shape};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Persisted form of a surface. Guide markers are never written.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SurfaceFile {
    width: f64,
    height: f64,
    /// Objects back to front.
    objects: Vec<SceneObject>,
    #[serde(default)]
    artboard: Option<ObjectId>,
    #[serde(default)]
    always_on_top: Vec<ObjectId>,
}

/// The scene a drag happens on.
#[derive(Debug, Clone)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
    /// All objects, keyed by ID.
    objects: HashMap<ObjectId, SceneObject>,
    /// Draw order (back to front).
    z_order: Vec<ObjectId>,
    /// The artboard acting as the snap boundary.
    artboard: Option<ObjectId>,
    /// Objects re-raised after every drag tick, bottom to top.
    always_on_top: Vec<ObjectId>,
    redraw_requested: bool,
}

impl Default for Surface {
    fn default() -> Self {
        Self::new(&SurfaceConfig::default())
    }
}

impl Surface {
    /// Create a surface with the two artboard rectangles from `config`.
    pub fn new(config: &SurfaceConfig) -> Self {
        let mut surface = Self::without_artboard(config.width, config.height);
        let geometry = config.artboard.geometry();

        let boundary = Artboard::boundary(geometry);
        surface.artboard = Some(boundary.id().to_string());
        surface.push(boundary.into());

        let overlay = Artboard::overlay(geometry);
        surface.always_on_top.push(overlay.id().to_string());
        surface.push(overlay.into());

        surface
    }

    /// Create an empty surface with no artboard.
    pub fn without_artboard(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            objects: HashMap::new(),
            z_order: Vec::new(),
            artboard: None,
            always_on_top: Vec::new(),
            redraw_requested: false,
        }
    }

    fn push(&mut self, object: SceneObject) {
        let id = object.id();
        self.z_order.push(id.clone());
        self.objects.insert(id, object);
    }

    /// Add a user shape on top of the draw order.
    ///
    /// Artboard and guide identifiers are reserved and rejected.
    pub fn insert_shape(&mut self, shape: Shape) -> SnapboardResult<()> {
        check_shape_id(shape.id())?;
        if self.objects.contains_key(shape.id()) {
            return Err(SnapboardError::DuplicateId(shape.id().to_string()));
        }
        self.push(shape.into());
        self.redraw_requested = true;
        Ok(())
    }

    /// Clone a shape under a fresh ID, offset by `offset`. Returns the new ID.
    pub fn duplicate_shape(&mut self, id: &str, offset: Vec2) -> SnapboardResult<ObjectId> {
        let mut copy = self
            .shape(id)
            .cloned()
            .ok_or_else(|| SnapboardError::ObjectNotFound(id.to_string()))?;
        copy.regenerate_id();
        copy.translate(offset);
        let new_id = copy.id().to_string();
        self.insert_shape(copy)?;
        Ok(new_id)
    }

    /// Get any object by ID.
    pub fn object(&self, id: &str) -> Option<&SceneObject> {
        self.objects.get(id)
    }

    /// Get a shape by ID.
    pub fn shape(&self, id: &str) -> Option<&Shape> {
        self.objects.get(id).and_then(SceneObject::as_shape)
    }

    /// Get a mutable reference to a shape by ID.
    pub fn shape_mut(&mut self, id: &str) -> Option<&mut Shape> {
        self.objects.get_mut(id).and_then(SceneObject::as_shape_mut)
    }

    /// The boundary artboard, if any.
    pub fn artboard(&self) -> Option<&Artboard> {
        let id = self.artboard.as_deref()?;
        match self.objects.get(id) {
            Some(SceneObject::Artboard(artboard)) => Some(artboard),
            _ => None,
        }
    }

    /// Get objects in draw order (back to front).
    pub fn objects_ordered(&self) -> impl Iterator<Item = &SceneObject> {
        self.z_order.iter().filter_map(|id| self.objects.get(id))
    }

    /// Get user shapes in draw order (back to front).
    pub fn shapes_ordered(&self) -> impl Iterator<Item = &Shape> {
        self.objects_ordered().filter_map(SceneObject::as_shape)
    }

    /// Draw order as IDs (back to front).
    pub fn z_order(&self) -> &[ObjectId] {
        &self.z_order
    }

    /// Send an object to the back (bottommost).
    pub fn send_to_back(&mut self, id: &str) {
        if let Some(pos) = self.z_order.iter().position(|o| o == id) {
            let id = self.z_order.remove(pos);
            self.z_order.insert(0, id);
        }
    }

    /// Selectable objects under `point`, front to back.
    pub fn selectable_at(&self, point: Point, tolerance: f64) -> Vec<ObjectId> {
        self.z_order
            .iter()
            .rev()
            .filter_map(|id| {
                self.objects
                    .get(id)
                    .filter(|o| o.hit_test(point, tolerance))
                    .map(|_| id.clone())
            })
            .collect()
    }

    /// Number of objects, markers and artboards included.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the surface holds no objects at all.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Report whether a redraw was requested since the last call, and reset.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Serialize the surface to JSON, leaving out guide markers.
    pub fn to_json(&self) -> SnapboardResult<String> {
        let file = SurfaceFile {
            width: self.width,
            height: self.height,
            objects: self.objects_ordered().filter(|o| !o.is_overlay()).cloned().collect(),
            artboard: self.artboard.clone(),
            always_on_top: self.always_on_top.clone(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// Deserialize a surface from JSON.
    pub fn from_json(json: &str) -> SnapboardResult<Self> {
        let file: SurfaceFile = serde_json::from_str(json)?;
        let mut surface = Self::without_artboard(file.width, file.height);
        for object in file.objects {
            if object.is_overlay() {
                continue;
            }
            let id = object.id();
            if matches!(object, SceneObject::Shape(_)) {
                check_shape_id(&id)?;
            }
            if surface.objects.contains_key(&id) {
                return Err(SnapboardError::DuplicateId(id));
            }
            surface.push(object);
        }
        if let Some(id) = &file.artboard {
            if !matches!(surface.objects.get(id), Some(SceneObject::Artboard(_))) {
                return Err(SnapboardError::ObjectNotFound(id.clone()));
            }
        }
        surface.artboard = file.artboard;
        surface.always_on_top = file
            .always_on_top
            .into_iter()
            .filter(|id| surface.objects.contains_key(id))
            .collect();
        Ok(surface)
    }
}

// Shape ids share one namespace with artboards and guide markers.
fn check_shape_id(id: &str) -> SnapboardResult<()> {
    if id.starts_with(ARTBOARD_ID_PREFIX) || id.parse::<GuideId>().is_ok() {
        return Err(SnapboardError::ReservedId(id.to_string()));
    }
    Ok(())
}

impl SnapHost for Surface {
    fn list_objects(&self) -> Vec<&SceneObject> {
        self.objects_ordered().collect()
    }

    fn add_object(&mut self, object: SceneObject) -> bool {
        let id = object.id();
        if self.objects.contains_key(&id) {
            log::warn!("ignoring duplicate object {id}");
            return false;
        }
        self.push(object);
        true
    }

    fn remove_object(&mut self, id: &str) -> Option<SceneObject> {
        self.z_order.retain(|o| o != id);
        self.always_on_top.retain(|o| o != id);
        if self.artboard.as_deref() == Some(id) {
            self.artboard = None;
        }
        self.objects.remove(id)
    }

    fn artboard_boundary(&self) -> Option<ShapeGeometry> {
        self.artboard().map(|a| a.geometry)
    }

    fn shape_geometry(&self, id: &str) -> Option<ShapeGeometry> {
        self.shape(id).map(|s| s.geometry)
    }

    fn set_shape_position(&mut self, id: &str, position: Point) -> bool {
        match self.shape_mut(id) {
            Some(shape) => {
                shape.geometry.set_position(position);
                true
            }
            None => false,
        }
    }

    fn bring_to_front(&mut self, id: &str) {
        if let Some(pos) = self.z_order.iter().position(|o| o == id) {
            let id = self.z_order.remove(pos);
            self.z_order.push(id);
        }
    }

    fn always_on_top(&self) -> Vec<ObjectId> {
        self.always_on_top.clone()
    }

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }
}
