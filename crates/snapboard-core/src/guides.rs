//! Guide markers: transient lines that show an active snap.
//!
//! Marker identifiers follow `<orientation>-<category>-<edge>`, e.g.
//! `vertical-canvas-left` or `horizontal-elements-center`. The category part
//! is `canvas` for artboard-boundary guides and `elements` for peer guides.
//! One category + edge combination has at most one live marker.

use crate::host::SnapHost;
use crate::object::SceneObject;
use crate::shapes::SerializableColor;
use kurbo::{Line, Point};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Direction a guide line runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

impl Orientation {
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Vertical => "vertical",
            Orientation::Horizontal => "horizontal",
        }
    }
}

/// Which engine owns a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuideCategory {
    /// Alignment with the artboard boundary.
    Boundary,
    /// Alignment with another shape.
    Peer,
}

impl GuideCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            GuideCategory::Boundary => "canvas",
            GuideCategory::Peer => "elements",
        }
    }
}

/// The edge or center line being aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuideEdge {
    Left,
    Right,
    Center,
    Top,
    Bottom,
}

impl GuideEdge {
    pub fn as_str(self) -> &'static str {
        match self {
            GuideEdge::Left => "left",
            GuideEdge::Right => "right",
            GuideEdge::Center => "center",
            GuideEdge::Top => "top",
            GuideEdge::Bottom => "bottom",
        }
    }
}

/// Returned when a string is not a guide identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a guide identifier: {0}")]
pub struct ParseGuideIdError(String);

/// Composed marker identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct GuideId {
    pub orientation: Orientation,
    pub category: GuideCategory,
    pub edge: GuideEdge,
}

impl GuideId {
    pub fn new(orientation: Orientation, category: GuideCategory, edge: GuideEdge) -> Self {
        Self {
            orientation,
            category,
            edge,
        }
    }
}

impl fmt::Display for GuideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}",
            self.orientation.as_str(),
            self.category.as_str(),
            self.edge.as_str()
        )
    }
}

impl FromStr for GuideId {
    type Err = ParseGuideIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseGuideIdError(s.to_string());
        let mut parts = s.splitn(3, '-');
        let (Some(orientation), Some(category), Some(edge)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(err());
        };
        let orientation = match orientation {
            "vertical" => Orientation::Vertical,
            "horizontal" => Orientation::Horizontal,
            _ => return Err(err()),
        };
        let category = match category {
            "canvas" => GuideCategory::Boundary,
            "elements" => GuideCategory::Peer,
            _ => return Err(err()),
        };
        let edge = match (orientation, edge) {
            (Orientation::Vertical, "left") => GuideEdge::Left,
            (Orientation::Vertical, "right") => GuideEdge::Right,
            (Orientation::Horizontal, "top") => GuideEdge::Top,
            (Orientation::Horizontal, "bottom") => GuideEdge::Bottom,
            (_, "center") => GuideEdge::Center,
            _ => return Err(err()),
        };
        Ok(Self::new(orientation, category, edge))
    }
}

impl From<GuideId> for String {
    fn from(id: GuideId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for GuideId {
    type Error = ParseGuideIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Stroke appearance of a guide line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuideStyle {
    pub color: SerializableColor,
    pub width: f64,
    /// Dash pattern (on, off), `None` for a solid line.
    pub dash: Option<[f64; 2]>,
    pub opacity: f64,
}

impl GuideStyle {
    /// Solid red line used for artboard guides.
    pub fn boundary() -> Self {
        Self {
            color: SerializableColor::red(),
            width: 1.0,
            dash: None,
            opacity: 0.8,
        }
    }

    /// Dashed line used for peer guides; green when vertical, black when horizontal.
    pub fn peer(orientation: Orientation) -> Self {
        let color = match orientation {
            Orientation::Vertical => SerializableColor::green(),
            Orientation::Horizontal => SerializableColor::black(),
        };
        Self {
            color,
            width: 1.0,
            dash: Some([5.0, 5.0]),
            opacity: 0.8,
        }
    }

    /// Stroke color with opacity applied, ready for a renderer.
    pub fn stroke_color(&self) -> peniko::Color {
        let c = self.color;
        let alpha = (f64::from(c.a) * self.opacity.clamp(0.0, 1.0)) as u8;
        peniko::Color::from_rgba8(c.r, c.g, c.b, alpha)
    }

    fn for_id(id: GuideId) -> Self {
        match id.category {
            GuideCategory::Boundary => Self::boundary(),
            GuideCategory::Peer => Self::peer(id.orientation),
        }
    }
}

/// A non-interactive line segment signalling an active snap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideMarker {
    pub id: GuideId,
    pub line: Line,
    pub style: GuideStyle,
}

impl GuideMarker {
    /// Vertical marker at `x` spanning `y0..y1`.
    pub fn vertical(category: GuideCategory, edge: GuideEdge, x: f64, y0: f64, y1: f64) -> Self {
        let id = GuideId::new(Orientation::Vertical, category, edge);
        Self {
            id,
            line: Line::new(Point::new(x, y0), Point::new(x, y1)),
            style: GuideStyle::for_id(id),
        }
    }

    /// Horizontal marker at `y` spanning `x0..x1`.
    pub fn horizontal(category: GuideCategory, edge: GuideEdge, y: f64, x0: f64, x1: f64) -> Self {
        let id = GuideId::new(Orientation::Horizontal, category, edge);
        Self {
            id,
            line: Line::new(Point::new(x0, y), Point::new(x1, y)),
            style: GuideStyle::for_id(id),
        }
    }

    /// Identifier as stored on the surface.
    pub fn object_id(&self) -> String {
        self.id.to_string()
    }

    pub fn category(&self) -> GuideCategory {
        self.id.category
    }
}

/// Create, look up and bulk-remove markers on a host surface.
pub struct GuideRegistry<'a, H: SnapHost + ?Sized> {
    host: &'a mut H,
}

impl<'a, H: SnapHost + ?Sized> GuideRegistry<'a, H> {
    pub fn new(host: &'a mut H) -> Self {
        Self { host }
    }

    /// Check whether a marker with this identifier is live.
    pub fn exists(&self, id: &GuideId) -> bool {
        self.host
            .list_objects()
            .into_iter()
            .any(|object| matches!(object, SceneObject::Guide(marker) if marker.id == *id))
    }

    /// Remove every marker of `category` and request a redraw.
    ///
    /// Returns how many markers were removed; clearing an empty set is a no-op
    /// apart from the redraw request.
    pub fn clear(&mut self, category: GuideCategory) -> usize {
        let ids: Vec<String> = self
            .host
            .list_objects()
            .into_iter()
            .filter_map(|object| match object {
                SceneObject::Guide(marker) if marker.category() == category => Some(marker.object_id()),
                _ => None,
            })
            .collect();
        for id in &ids {
            self.host.remove_object(id);
        }
        self.host.request_redraw();
        ids.len()
    }

    /// Insert a marker unless one with the same identifier is already live.
    ///
    /// Does not redraw; callers batch the redraw at the end of their pass.
    pub fn add(&mut self, marker: GuideMarker) -> bool {
        if self.exists(&marker.id) {
            log::trace!("guide {} already live", marker.id);
            return false;
        }
        let id = marker.id;
        let added = self.host.add_object(SceneObject::Guide(marker));
        if !added {
            log::warn!("host refused guide {id}");
        }
        added
    }

    /// Live markers of `category` in draw order.
    pub fn live(&self, category: GuideCategory) -> Vec<GuideMarker> {
        self.host
            .list_objects()
            .into_iter()
            .filter_map(|object| match object {
                SceneObject::Guide(marker) if marker.category() == category => Some(marker.clone()),
                _ => None,
            })
            .collect()
    }
}
