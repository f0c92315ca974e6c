//! Bounding-box math for scaled, axis-aligned shapes.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Raw geometry of a shape as stored by the host.
///
/// `width` and `height` are the unscaled size; the visible extent is
/// `width * scale_x` by `height * scale_y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeGeometry {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default = "unit_scale")]
    pub scale_x: f64,
    #[serde(default = "unit_scale")]
    pub scale_y: f64,
}

fn unit_scale() -> f64 {
    1.0
}

impl ShapeGeometry {
    /// Create an unscaled geometry.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }

    /// Builder-style scale override.
    pub fn with_scale(mut self, scale_x: f64, scale_y: f64) -> Self {
        self.scale_x = scale_x;
        self.scale_y = scale_y;
        self
    }

    /// Top-left corner.
    pub fn position(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Move the top-left corner, keeping size and scale.
    pub fn set_position(&mut self, position: Point) {
        self.left = position.x;
        self.top = position.y;
    }

    /// Width after applying `scale_x`.
    pub fn scaled_width(&self) -> f64 {
        self.width * self.scale_x
    }

    /// Height after applying `scale_y`.
    pub fn scaled_height(&self) -> f64 {
        self.height * self.scale_y
    }

    /// Derive the bounding box. Never cached: call once per check.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_geometry(self)
    }
}

/// The eight derived fields of a scaled shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub right: f64,
    pub bottom: f64,
    pub center_x: f64,
    pub center_y: f64,
}

impl BoundingBox {
    /// Compute the box from raw geometry.
    pub fn from_geometry(geometry: &ShapeGeometry) -> Self {
        let width = geometry.scaled_width();
        let height = geometry.scaled_height();
        Self {
            left: geometry.left,
            top: geometry.top,
            width,
            height,
            right: geometry.left + width,
            bottom: geometry.top + height,
            center_x: geometry.left + width / 2.0,
            center_y: geometry.top + height / 2.0,
        }
    }

    /// Center point.
    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }

    /// The box as a kurbo rectangle.
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.right, self.bottom)
    }
}

/// Two coordinates count as aligned when strictly closer than `threshold`.
pub fn is_aligned(a: f64, b: f64, threshold: f64) -> bool {
    (a - b).abs() < threshold
}
