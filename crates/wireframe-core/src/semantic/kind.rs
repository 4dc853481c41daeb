//! The closed set of semantic component kinds.

use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Semantic kind of a wireframe component.
///
/// The names match the external `type` strings (kebab-case). Any other string
/// is kept verbatim in [`ComponentKind::Other`] so it round-trips unchanged.
///
/// # Examples
///
/// ```
/// # use wireframe_core::semantic::ComponentKind;
/// let kind: ComponentKind = "data-table".parse().unwrap();
/// assert_eq!(kind, ComponentKind::DataTable);
///
/// let custom: ComponentKind = "stepper".parse().unwrap();
/// assert_eq!(custom.as_str(), "stepper");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComponentKind {
    Navbar,
    Sidebar,
    DataTable,
    Form,
    Card,
    List,
    Button,
    Input,
    Chart,
    Modal,
    Text,
    Image,
    Container,
    /// An unrecognized type string.
    Other(String),
}

impl ComponentKind {
    /// Returns the external `type` string for this kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Navbar => "navbar",
            Self::Sidebar => "sidebar",
            Self::DataTable => "data-table",
            Self::Form => "form",
            Self::Card => "card",
            Self::List => "list",
            Self::Button => "button",
            Self::Input => "input",
            Self::Chart => "chart",
            Self::Modal => "modal",
            Self::Text => "text",
            Self::Image => "image",
            Self::Container => "container",
            Self::Other(name) => name,
        }
    }

    /// Returns true for kinds that reserve a fixed strip of the canvas
    /// (navbar and sidebar).
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::Navbar | Self::Sidebar)
    }
}

impl FromStr for ComponentKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "navbar" => Self::Navbar,
            "sidebar" => Self::Sidebar,
            "data-table" => Self::DataTable,
            "form" => Self::Form,
            "card" => Self::Card,
            "list" => Self::List,
            "button" => Self::Button,
            "input" => Self::Input,
            "chart" => Self::Chart,
            "modal" => Self::Modal,
            "text" => Self::Text,
            "image" => Self::Image,
            "container" => Self::Container,
            other => Self::Other(other.to_string()),
        };
        Ok(kind)
    }
}

impl From<String> for ComponentKind {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(Self::Other(_)) => Self::Other(value),
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }
}

impl From<&str> for ComponentKind {
    fn from(value: &str) -> Self {
        match value.parse() {
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }
}

impl From<ComponentKind> for String {
    fn from(kind: ComponentKind) -> Self {
        match kind {
            ComponentKind::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
