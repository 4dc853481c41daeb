//! Wireframe layout
//!
//! Turns an unordered list of semantically-typed components into absolute,
//! non-overlapping placements on a fixed-width canvas. Geometry on input is
//! ignored; kind and label drive every decision.
//!
//! Placement is rule based: navbar and sidebar reserve fixed strips, and the
//! remaining items are grouped into runs of adjacent same-kind components,
//! each run stacked, gridded or aligned according to its kind.

mod engine;
mod grid;
mod rules;

pub use engine::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_GAP, Engine, EngineBuilder, LayoutReport,
    NAVBAR_HEIGHT, SIDEBAR_HEIGHT, SIDEBAR_WIDTH,
};
pub use grid::place_grid;
pub use rules::button_width;

use wireframe_core::semantic::Placeable;

/// Lay out `items` on the default 1024 unit canvas with a 16 unit gap.
///
/// # Examples
///
/// ```
/// use wireframe::layout::layout;
/// use wireframe::semantic::Shape;
///
/// assert!(layout::<Shape>(&[]).is_empty());
/// ```
pub fn layout<T: Placeable>(items: &[T]) -> Vec<T> {
    Engine::default().layout(items)
}
