//! Shape definitions for the artboard editor.

mod artboard;

pub use artboard::{Artboard, ArtboardRole, ARTBOARD_BOUNDARY_ID, ARTBOARD_ID_PREFIX, ARTBOARD_OVERLAY_ID};

use crate::geometry::ShapeGeometry;
use kurbo::{Point, Rect, Vec2};
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of any object on the surface.
///
/// Plain strings rather than UUIDs: artboards and guide markers carry
/// well-known identifiers that other tooling matches on.
pub type ObjectId = String;

/// Offset applied to pasted or duplicated shapes.
pub const PASTE_OFFSET: f64 = 20.0;

/// Line height multiplier used to size text boxes.
pub const TEXT_LINE_HEIGHT: f64 = 1.16;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub const fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    pub const fn red() -> Self {
        Self::new(255, 0, 0, 255)
    }

    pub const fn green() -> Self {
        Self::new(0, 128, 0, 255)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Style properties for shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeStyle {
    /// Fill color (None = no fill).
    pub fill: Option<SerializableColor>,
    /// Stroke color (None = no outline).
    pub stroke: Option<SerializableColor>,
    pub stroke_width: f64,
    /// Overall opacity (0.0 = fully transparent, 1.0 = fully opaque).
    pub opacity: f64,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            fill: Some(SerializableColor::black()),
            stroke: None,
            stroke_width: 1.0,
            opacity: 1.0,
        }
    }
}

impl ShapeStyle {
    /// A filled style without outline.
    pub fn filled(color: SerializableColor) -> Self {
        Self {
            fill: Some(color),
            ..Self::default()
        }
    }

    /// Get the fill color with opacity applied.
    pub fn fill_with_opacity(&self) -> Option<Color> {
        self.fill.map(|c| {
            let alpha = (f64::from(c.a) * self.opacity.clamp(0.0, 1.0)) as u8;
            Color::from_rgba8(c.r, c.g, c.b, alpha)
        })
    }
}

/// What a shape draws. Snapping only ever looks at the bounding box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
    Text { content: String, font_size: f64 },
    Image { source: String },
    /// Grouped vector artwork (e.g. an imported SVG).
    Vector { source: String },
}

/// A user-placed shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub(crate) id: ObjectId,
    pub kind: ShapeKind,
    #[serde(flatten)]
    pub geometry: ShapeGeometry,
    #[serde(default)]
    pub style: ShapeStyle,
}

impl Shape {
    /// Create a shape with a fresh identifier.
    pub fn new(kind: ShapeKind, geometry: ShapeGeometry) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), kind, geometry)
    }

    /// Create a shape with a caller-chosen identifier.
    pub fn with_id(id: impl Into<ObjectId>, kind: ShapeKind, geometry: ShapeGeometry) -> Self {
        Self {
            id: id.into(),
            kind,
            geometry,
            style: ShapeStyle::default(),
        }
    }

    /// Builder-style style override.
    pub fn styled(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self
    }

    /// Default rectangle dropped relative to the artboard origin.
    pub fn rectangle_preset(origin: Point) -> Self {
        Self::new(
            ShapeKind::Rectangle,
            ShapeGeometry::new(origin.x + 50.0, origin.y + 100.0, 100.0, 60.0),
        )
        .styled(ShapeStyle::filled(SerializableColor::new(0xae, 0x34, 0x21, 255)))
    }

    /// Default circle (radius 60) dropped relative to the artboard origin.
    pub fn circle_preset(origin: Point) -> Self {
        Self::new(
            ShapeKind::Ellipse,
            ShapeGeometry::new(origin.x + 50.0, origin.y + 100.0, 120.0, 120.0),
        )
        .styled(ShapeStyle::filled(SerializableColor::new(0x20, 0xa3, 0x9e, 255)))
    }

    /// Default text box dropped relative to the artboard origin.
    pub fn text_preset(origin: Point, content: impl Into<String>) -> Self {
        let font_size = 24.0;
        Self::new(
            ShapeKind::Text {
                content: content.into(),
                font_size,
            },
            ShapeGeometry::new(origin.x + 50.0, origin.y + 100.0, 200.0, font_size * TEXT_LINE_HEIGHT),
        )
        .styled(ShapeStyle::filled(SerializableColor::new(0x20, 0xa3, 0x9e, 255)))
    }

    /// Image of the given natural size, shown at 30%.
    pub fn image_preset(origin: Point, source: impl Into<String>, width: f64, height: f64) -> Self {
        Self::new(
            ShapeKind::Image {
                source: source.into(),
            },
            ShapeGeometry::new(origin.x + 100.0, origin.y + 200.0, width, height).with_scale(0.3, 0.3),
        )
    }

    /// Vector artwork scaled uniformly to 100 units wide.
    pub fn vector_preset(origin: Point, source: impl Into<String>, width: f64, height: f64) -> Self {
        let scale = if width > 0.0 { 100.0 / width } else { 1.0 };
        Self::new(
            ShapeKind::Vector {
                source: source.into(),
            },
            ShapeGeometry::new(origin.x + 200.0, origin.y + 100.0, width, height).with_scale(scale, scale),
        )
    }

    /// Get the unique identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the bounding box in world coordinates.
    pub fn bounds(&self) -> Rect {
        self.geometry.bounding_box().to_rect()
    }

    /// Move the shape by a delta.
    pub fn translate(&mut self, delta: Vec2) {
        self.geometry.left += delta.x;
        self.geometry.top += delta.y;
    }

    /// Check if a point (in world coordinates) hits this shape.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let rect = self.bounds();
        match self.kind {
            ShapeKind::Ellipse => {
                let rx = rect.width() / 2.0 + tolerance;
                let ry = rect.height() / 2.0 + tolerance;
                if rx <= 0.0 || ry <= 0.0 {
                    return false;
                }
                let c = rect.center();
                let dx = (point.x - c.x) / rx;
                let dy = (point.y - c.y) / ry;
                dx * dx + dy * dy <= 1.0
            }
            _ => rect.inflate(tolerance, tolerance).contains(point),
        }
    }

    /// Replace the identifier with a fresh one (used when duplicating).
    pub fn regenerate_id(&mut self) {
        self.id = Uuid::new_v4().to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_preset_position() {
        let rect = Shape::rectangle_preset(Point::new(100.0, 100.0));
        assert!((rect.geometry.left - 150.0).abs() < f64::EPSILON);
        assert!((rect.geometry.top - 200.0).abs() < f64::EPSILON);
        assert!((rect.geometry.width - 100.0).abs() < f64::EPSILON);
        assert!((rect.geometry.height - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_image_preset_is_scaled() {
        let image = Shape::image_preset(Point::ZERO, "placeholder.png", 600.0, 400.0);
        let bounds = image.bounds();
        assert!((bounds.width() - 180.0).abs() < 1e-9);
        assert!((bounds.height() - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_vector_preset_is_100_wide() {
        let vector = Shape::vector_preset(Point::ZERO, "trophy.svg", 400.0, 200.0);
        assert!((vector.bounds().width() - 100.0).abs() < 1e-9);
        assert!((vector.bounds().height() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_fresh_ids_are_unique() {
        let a = Shape::rectangle_preset(Point::ZERO);
        let mut b = a.clone();
        assert_eq!(a.id(), b.id());
        b.regenerate_id();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_hit_test_rectangle() {
        let rect = Shape::with_id("r", ShapeKind::Rectangle, ShapeGeometry::new(0.0, 0.0, 100.0, 100.0));
        assert!(rect.hit_test(Point::new(50.0, 50.0), 0.0));
        assert!(!rect.hit_test(Point::new(150.0, 50.0), 0.0));
        assert!(rect.hit_test(Point::new(105.0, 50.0), 10.0));
    }

    #[test]
    fn test_hit_test_ellipse_misses_corner() {
        let ellipse = Shape::with_id("e", ShapeKind::Ellipse, ShapeGeometry::new(0.0, 0.0, 100.0, 100.0));
        assert!(ellipse.hit_test(Point::new(50.0, 50.0), 0.0));
        assert!(!ellipse.hit_test(Point::new(2.0, 2.0), 0.0));
    }

    #[test]
    fn test_fill_with_opacity() {
        let style = ShapeStyle {
            opacity: 0.5,
            ..ShapeStyle::filled(SerializableColor::new(0xae, 0x34, 0x21, 255))
        };
        let fill = style.fill_with_opacity().unwrap();
        assert_eq!(SerializableColor::from(fill), SerializableColor::new(0xae, 0x34, 0x21, 127));
    }

    #[test]
    fn test_shape_json_uses_flat_geometry() {
        let json = r#"{"id":"a","kind":"rectangle","left":1,"top":2,"width":3,"height":4}"#;
        let shape: Shape = serde_json::from_str(json).unwrap();
        assert_eq!(shape.id(), "a");
        assert_eq!(shape.kind, ShapeKind::Rectangle);
        assert!((shape.geometry.scale_x - 1.0).abs() < f64::EPSILON);
        assert_eq!(shape.style, ShapeStyle::default());
    }
}
