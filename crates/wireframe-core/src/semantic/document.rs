//! Top-level documents accepted at the JSON boundary.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Screen, Shape};

/// A wireframe generator response: `{ "shapes": [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeList {
    shapes: Vec<Shape>,
    #[serde(flatten)]
    extra: IndexMap<String, Value>,
}

impl ShapeList {
    pub fn new(shapes: Vec<Shape>) -> Self {
        Self {
            shapes,
            extra: IndexMap::new(),
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Replace the shapes, keeping every other top-level field.
    pub fn with_shapes(mut self, shapes: Vec<Shape>) -> Self {
        self.shapes = shapes;
        self
    }
}

/// A semantic blueprint with design-phase screens.
///
/// Only `screens` is interpreted; stories, the user flow, the data model and
/// any other content are carried along untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blueprint {
    screens: Vec<Screen>,
    #[serde(flatten)]
    extra: IndexMap<String, Value>,
}

impl Blueprint {
    pub fn new(screens: Vec<Screen>) -> Self {
        Self {
            screens,
            extra: IndexMap::new(),
        }
    }

    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    /// Consume the blueprint, mapping every screen through `f`.
    pub fn map_screens(mut self, f: impl FnMut(Screen) -> Screen) -> Self {
        self.screens = self.screens.into_iter().map(f).collect();
        self
    }

    /// Find a screen by id or name.
    pub fn screen(&self, selector: &str) -> Option<&Screen> {
        self.screens.iter().find(|screen| screen.matches(selector))
    }

    /// Fields other than `screens`, in input order.
    pub fn extra(&self) -> &IndexMap<String, Value> {
        &self.extra
    }
}

/// Any document the wireframe tools read and write.
///
/// # Examples
///
/// ```
/// # use wireframe_core::semantic::Document;
/// let bare: Document = serde_json::from_str(r#"[{"type": "card", "label": "A"}]"#).unwrap();
/// assert!(matches!(bare, Document::Shapes(_)));
///
/// let wrapped: Document = serde_json::from_str(r#"{"shapes": []}"#).unwrap();
/// assert!(matches!(wrapped, Document::ShapeList(_)));
///
/// let blueprint: Document = serde_json::from_str(r#"{"name": "App", "screens": []}"#).unwrap();
/// assert!(matches!(blueprint, Document::Blueprint(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Document {
    /// A bare array of shapes.
    Shapes(Vec<Shape>),
    /// An object wrapping a `shapes` array.
    ShapeList(ShapeList),
    /// A blueprint with `screens`.
    Blueprint(Blueprint),
}

impl Document {
    /// Number of shape lists in this document (one per screen for blueprints).
    pub fn layout_count(&self) -> usize {
        match self {
            Self::Shapes(_) | Self::ShapeList(_) => 1,
            Self::Blueprint(blueprint) => blueprint.screens().len(),
        }
    }
}
