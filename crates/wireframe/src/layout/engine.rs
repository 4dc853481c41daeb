//! The deterministic wireframe layout engine.
//!
//! A layout pass runs in four steps:
//!
//! 1. The first navbar and the first sidebar are pulled out of the input.
//! 2. They are pinned to the top strip and the left strip of the canvas.
//! 3. The remaining region, inset by the gap, becomes the content area.
//! 4. The rest of the input is split into runs of adjacent same-kind items
//!    and folded over a vertical cursor, each run placed by its [`Rule`].

use log::{debug, trace};

use wireframe_core::{
    geometry::{Bounds, Insets, Point, Size},
    semantic::{ComponentKind, Placeable},
};

use super::rules::{Frame, Rule};

pub const DEFAULT_CANVAS_WIDTH: f32 = 1024.0;
pub const DEFAULT_CANVAS_HEIGHT: f32 = 768.0;
pub const DEFAULT_GAP: f32 = 16.0;

pub const NAVBAR_HEIGHT: f32 = 56.0;
pub const SIDEBAR_WIDTH: f32 = 200.0;
pub const SIDEBAR_HEIGHT: f32 = 712.0;

/// Summary of a layout pass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutReport {
    groups: usize,
    cursor_y: f32,
    bounds: Option<Bounds>,
}

impl LayoutReport {
    /// Number of content groups placed (structural elements excluded).
    pub fn groups(&self) -> usize {
        self.groups
    }

    /// Final position of the vertical cursor.
    pub fn cursor_y(&self) -> f32 {
        self.cursor_y
    }

    /// Bounds enclosing every placed item, or `None` for an empty layout.
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }
}

/// Layout engine with fixed canvas parameters.
///
/// The engine holds no state between calls; it clones every input record and
/// replaces only its geometry.
///
/// # Examples
///
/// ```
/// use wireframe::layout::Engine;
/// use wireframe::semantic::{ComponentKind, Placeable, Shape};
///
/// let shapes = vec![
///     Shape::new(ComponentKind::Card, "Revenue"),
///     Shape::new(ComponentKind::Navbar, "Top"),
/// ];
///
/// let placed = Engine::default().layout(&shapes);
/// assert_eq!(placed[0].label(), "Top");
/// assert_eq!(placed[0].width(), 1024.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Engine {
    canvas: Size,
    gap: f32,
}

impl Default for Engine {
    fn default() -> Self {
        EngineBuilder::new().build()
    }
}

impl Engine {
    /// Logical canvas size.
    pub fn canvas(&self) -> Size {
        self.canvas
    }

    /// Spacing between neighbouring items and around the content area.
    pub fn gap(&self) -> f32 {
        self.gap
    }

    /// Position every item, returning new records in output order:
    /// navbar, sidebar, then content in input order.
    pub fn layout<T: Placeable>(&self, items: &[T]) -> Vec<T> {
        self.layout_with_report(items).0
    }

    /// Like [`Engine::layout`], also returning a [`LayoutReport`].
    pub fn layout_with_report<T: Placeable>(&self, items: &[T]) -> (Vec<T>, LayoutReport) {
        let navbar_index = first_of_kind(items, &ComponentKind::Navbar);
        let sidebar_index = first_of_kind(items, &ComponentKind::Sidebar);

        let mut placed = Vec::with_capacity(items.len());

        let mut top = 0.0;
        if let Some(index) = navbar_index {
            let bounds = Bounds::new_from_top_left(
                Point::default(),
                Size::new(self.canvas.width(), NAVBAR_HEIGHT),
            );
            placed.push(items[index].clone().with_bounds(bounds));
            top = NAVBAR_HEIGHT;
        }

        let mut left = 0.0;
        if let Some(index) = sidebar_index {
            let bounds = Bounds::new_from_top_left(
                Point::new(0.0, top),
                Size::new(SIDEBAR_WIDTH, SIDEBAR_HEIGHT),
            );
            placed.push(items[index].clone().with_bounds(bounds));
            left = SIDEBAR_WIDTH;
        }

        let frame = self.frame(top, left);
        let content: Vec<&T> = items
            .iter()
            .enumerate()
            .filter(|(index, _)| Some(*index) != navbar_index && Some(*index) != sidebar_index)
            .map(|(_, item)| item)
            .collect();

        let (placed, cursor_y, groups) = adjacent_groups(&content).fold(
            (placed, frame.area.min_y(), 0),
            |(mut placed, cursor, groups), group| {
                let kind = group[0].kind();
                let step = Rule::for_group(kind, group.len()).place(group, cursor, &frame);
                trace!(
                    kind = kind.as_str(),
                    count = group.len(),
                    cursor,
                    advance = step.advance;
                    "Placed group"
                );
                placed.extend(step.placed);
                (placed, cursor + step.advance, groups + 1)
            },
        );

        let bounds = placed
            .iter()
            .map(Placeable::bounds)
            .reduce(|acc, bounds| acc.merge(&bounds));

        debug!(
            items_count = items.len(),
            groups,
            cursor_y,
            has_navbar = navbar_index.is_some(),
            has_sidebar = sidebar_index.is_some();
            "Layout calculated"
        );

        let report = LayoutReport {
            groups,
            cursor_y,
            bounds,
        };
        (placed, report)
    }

    /// Content frame left after reserving `top` and `left` strips.
    fn frame(&self, top: f32, left: f32) -> Frame {
        let canvas = Bounds::new_from_top_left(Point::default(), self.canvas);
        let area = canvas.inset(Insets::new(top, 0.0, 0.0, left).add_uniform(self.gap));
        Frame {
            canvas: self.canvas,
            area,
            gap: self.gap,
        }
    }
}

/// Builder for [`Engine`].
///
/// Defaults are a 1024x768 canvas with a 16 unit gap.
#[derive(Debug, Clone, Copy)]
pub struct EngineBuilder {
    canvas_width: f32,
    canvas_height: f32,
    gap: f32,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineBuilder {
    /// Create a builder with the default canvas parameters
    pub fn new() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            gap: DEFAULT_GAP,
        }
    }

    /// Set the logical canvas width
    pub fn with_canvas_width(mut self, width: f32) -> Self {
        self.canvas_width = width;
        self
    }

    /// Set the logical canvas height (used to center modals)
    pub fn with_canvas_height(mut self, height: f32) -> Self {
        self.canvas_height = height;
        self
    }

    /// Set the spacing between items
    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    pub fn build(self) -> Engine {
        Engine {
            canvas: Size::new(self.canvas_width, self.canvas_height),
            gap: self.gap,
        }
    }
}

fn first_of_kind<T: Placeable>(items: &[T], kind: &ComponentKind) -> Option<usize> {
    items.iter().position(|item| item.kind() == kind)
}

/// Split `items` into maximal runs of adjacent items sharing a kind.
///
/// Items of the same kind separated by another kind form separate groups.
fn adjacent_groups<'a, T: Placeable>(items: &'a [&'a T]) -> impl Iterator<Item = &'a [&'a T]> {
    items.chunk_by(|a, b| a.kind() == b.kind())
}
