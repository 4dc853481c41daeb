//! Semantic model types for wireframes.
//!
//! This module contains the records the layout engine consumes and produces.
//! Every record keeps the fields it does not interpret so that documents
//! round-trip without losing caller content.
//!
//! # Organization
//!
//! - [`kind`] - The closed set of component kinds: [`ComponentKind`]
//! - [`shape`] - Flat generator records: [`Shape`]
//! - [`screen`] - Blueprint screens: [`Screen`], [`WireframeComponent`]
//! - [`document`] - Top-level JSON documents: [`Document`], [`Blueprint`], [`ShapeList`]

pub mod document;
pub mod kind;
pub mod screen;
pub mod shape;

pub use document::*;
pub use kind::*;
pub use screen::*;
pub use shape::*;

use crate::geometry::Bounds;

/// A labeled, typed record whose geometry can be recomputed.
///
/// Implemented by every record layout that carries a wireframe component, so
/// one layout engine positions all of them. `with_bounds` consumes the record
/// and returns it with only its geometry replaced.
pub trait Placeable: Clone {
    /// The semantic kind that selects the placement rule.
    fn kind(&self) -> &ComponentKind;

    /// Free-text label; layout only looks at its length.
    fn label(&self) -> &str;

    /// Current geometry of the record.
    fn bounds(&self) -> Bounds;

    /// Returns the record with its geometry replaced by `bounds`.
    fn with_bounds(self, bounds: Bounds) -> Self;
}
