//! Flat shape records exchanged with the wireframe generator.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ComponentKind, Placeable};
use crate::geometry::{Bounds, Point, Size};

/// A semantically-typed UI element with a label and a bounding box.
///
/// This is the flat record produced by the wireframe generator:
/// `{ "type", "label", "x", "y", "width", "height" }`. Geometry on input is
/// advisory; the layout engine replaces it. Every other field is kept in
/// [`Shape::extra`] in its original order and written back unchanged.
///
/// # Examples
///
/// ```
/// # use wireframe_core::semantic::{ComponentKind, Placeable, Shape};
/// let shape: Shape = serde_json::from_str(
///     r#"{"type": "card", "label": "Revenue", "x": 5, "y": 5, "width": 1, "height": 1, "tone": "muted"}"#,
/// ).unwrap();
///
/// assert_eq!(shape.kind(), &ComponentKind::Card);
/// assert_eq!(shape.label(), "Revenue");
/// assert_eq!(shape.extra()["tone"], "muted");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    #[serde(rename = "type")]
    kind: ComponentKind,
    #[serde(default)]
    label: String,
    #[serde(default)]
    x: f32,
    #[serde(default)]
    y: f32,
    #[serde(default)]
    width: f32,
    #[serde(default)]
    height: f32,
    #[serde(flatten)]
    extra: IndexMap<String, Value>,
}

impl Shape {
    /// Create a shape with zeroed geometry and no extra fields.
    pub fn new(kind: impl Into<ComponentKind>, label: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            label: label.into(),
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            extra: IndexMap::new(),
        }
    }

    /// Attach an extra pass-through field (builder style).
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Fields other than type, label and geometry, in input order.
    pub fn extra(&self) -> &IndexMap<String, Value> {
        &self.extra
    }
}

impl Placeable for Shape {
    fn kind(&self) -> &ComponentKind {
        &self.kind
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn bounds(&self) -> Bounds {
        Bounds::new_from_top_left(
            Point::new(self.x, self.y),
            Size::new(self.width, self.height),
        )
    }

    fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.x = bounds.min_x();
        self.y = bounds.min_y();
        self.width = bounds.width();
        self.height = bounds.height();
        self
    }
}
