//! Blueprint screens and their wireframe components.
//!
//! These mirror the design-phase records of a semantic blueprint, where a
//! component stores its geometry as nested `position` and `size` objects
//! rather than the flat fields of a [`Shape`](super::Shape).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ComponentKind, Placeable};
use crate::geometry::{Bounds, Point, Size};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
struct Position {
    #[serde(default)]
    x: f32,
    #[serde(default)]
    y: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
struct Dimensions {
    #[serde(default)]
    width: f32,
    #[serde(default)]
    height: f32,
}

/// A component placed on a blueprint screen.
///
/// Fields such as `props`, `children`, `linkedEntityId` and `linkedStoryIds`
/// are not interpreted and pass through in [`WireframeComponent::extra`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireframeComponent {
    #[serde(default)]
    id: String,
    #[serde(rename = "type")]
    kind: ComponentKind,
    #[serde(default)]
    label: String,
    #[serde(default)]
    position: Position,
    #[serde(default)]
    size: Dimensions,
    #[serde(flatten)]
    extra: IndexMap<String, Value>,
}

impl WireframeComponent {
    /// Create a component with zeroed geometry.
    pub fn new(
        id: impl Into<String>,
        kind: impl Into<ComponentKind>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            label: label.into(),
            position: Position::default(),
            size: Dimensions::default(),
            extra: IndexMap::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn extra(&self) -> &IndexMap<String, Value> {
        &self.extra
    }
}

impl Placeable for WireframeComponent {
    fn kind(&self) -> &ComponentKind {
        &self.kind
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn bounds(&self) -> Bounds {
        Bounds::new_from_top_left(
            Point::new(self.position.x, self.position.y),
            Size::new(self.size.width, self.size.height),
        )
    }

    fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.position = Position {
            x: bounds.min_x(),
            y: bounds.min_y(),
        };
        self.size = Dimensions {
            width: bounds.width(),
            height: bounds.height(),
        };
        self
    }
}

/// A screen of the blueprint design phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    path: String,
    #[serde(default)]
    components: Vec<WireframeComponent>,
    #[serde(flatten)]
    extra: IndexMap<String, Value>,
}

impl Screen {
    /// Create an empty screen.
    pub fn new(id: impl Into<String>, name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            path: path.into(),
            components: Vec::new(),
            extra: IndexMap::new(),
        }
    }

    /// Append a component (builder style).
    pub fn with_component(mut self, component: WireframeComponent) -> Self {
        self.components.push(component);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn components(&self) -> &[WireframeComponent] {
        &self.components
    }

    /// Replace the components of this screen, keeping everything else.
    pub fn with_components(mut self, components: Vec<WireframeComponent>) -> Self {
        self.components = components;
        self
    }

    /// Returns true if `selector` equals this screen's id or name.
    pub fn matches(&self, selector: &str) -> bool {
        self.id == selector || self.name == selector
    }
}
