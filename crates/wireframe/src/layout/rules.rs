//! Placement rules for groups of same-kind components.
//!
//! Every kind maps to exactly one [`Rule`]. A rule is a pure function of the
//! group, the current cursor and the [`Frame`]; it returns the placed records
//! and how far the cursor moves.

use wireframe_core::{
    geometry::{Bounds, Point, Size},
    semantic::{ComponentKind, Placeable},
};

use super::grid::{column_width, grid_advance, place_grid};

pub const CONTAINER_HEIGHT: f32 = 48.0;
pub const COLLECTION_HEIGHT: f32 = 280.0;
pub const FORM_HEIGHT: f32 = 280.0;
pub const CARD_HEIGHT: f32 = 120.0;
pub const CHART_HEIGHT: f32 = 220.0;
pub const INPUT_HEIGHT: f32 = 44.0;
pub const INPUT_MAX_WIDTH: f32 = 400.0;
pub const IMAGE_HEIGHT: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const BUTTON_MIN_WIDTH: f32 = 100.0;
pub const TEXT_HEIGHT: f32 = 32.0;
pub const MODAL_SIZE: Size = Size::new(400.0, 300.0);
pub const DEFAULT_HEIGHT: f32 = 60.0;

/// Canvas geometry shared by every rule in one layout pass.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    /// Full logical canvas size.
    pub canvas: Size,
    /// Region left for flowing content, inset by `gap` on every side.
    pub area: Bounds,
    pub gap: f32,
}

/// How the width of a grid cell is chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellWidth {
    /// Columns share the content width evenly.
    Shared,
    /// A single column is capped at the given width.
    Capped(f32),
}

/// The placement rule selected for a group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    /// One full-width item per row.
    Stack { height: f32 },
    /// Row-major grid of uniform cells.
    Grid {
        columns: usize,
        height: f32,
        width: CellWidth,
    },
    /// A single right-aligned row sized from the labels.
    ButtonRow,
    /// Centered on the canvas without moving the cursor.
    Overlay,
}

/// Result of placing one group.
#[derive(Debug)]
pub struct GroupPlacement<T> {
    pub placed: Vec<T>,
    /// Distance the cursor moves, including the trailing gap.
    pub advance: f32,
}

impl Rule {
    /// Select the rule for a group of `count` items of `kind`.
    ///
    /// Navbars and sidebars only reach this point when they were not the
    /// first of their kind, and then use the default stack like any
    /// unrecognized kind.
    pub fn for_group(kind: &ComponentKind, count: usize) -> Self {
        match kind {
            ComponentKind::Container => Self::Stack {
                height: CONTAINER_HEIGHT,
            },
            ComponentKind::DataTable | ComponentKind::List => Self::Stack {
                height: COLLECTION_HEIGHT,
            },
            ComponentKind::Form => Self::Grid {
                columns: if count == 1 { 1 } else { 2 },
                height: FORM_HEIGHT,
                width: CellWidth::Shared,
            },
            ComponentKind::Card => Self::Grid {
                columns: count.min(3),
                height: CARD_HEIGHT,
                width: CellWidth::Shared,
            },
            ComponentKind::Chart => Self::Grid {
                columns: count.min(2),
                height: CHART_HEIGHT,
                width: CellWidth::Shared,
            },
            ComponentKind::Input if count == 1 => Self::Grid {
                columns: 1,
                height: INPUT_HEIGHT,
                width: CellWidth::Capped(INPUT_MAX_WIDTH),
            },
            ComponentKind::Input => Self::Grid {
                columns: 2,
                height: INPUT_HEIGHT,
                width: CellWidth::Shared,
            },
            ComponentKind::Image => Self::Grid {
                columns: count.min(3),
                height: IMAGE_HEIGHT,
                width: CellWidth::Shared,
            },
            ComponentKind::Button => Self::ButtonRow,
            ComponentKind::Text => Self::Stack {
                height: TEXT_HEIGHT,
            },
            ComponentKind::Modal => Self::Overlay,
            ComponentKind::Navbar | ComponentKind::Sidebar | ComponentKind::Other(_) => {
                Self::Stack {
                    height: DEFAULT_HEIGHT,
                }
            }
        }
    }

    /// Place `group` with its top edge at `cursor`.
    pub fn place<T: Placeable>(
        self,
        group: &[&T],
        cursor: f32,
        frame: &Frame,
    ) -> GroupPlacement<T> {
        let area = frame.area;
        let gap = frame.gap;
        let origin = Point::new(area.min_x(), cursor);

        match self {
            Self::Stack { height } => GroupPlacement {
                placed: place_grid(group, origin, Size::new(area.width(), height), 1, gap),
                advance: grid_advance(group.len(), 1, height, gap),
            },
            Self::Grid {
                columns,
                height,
                width,
            } => {
                let cell_width = match width {
                    CellWidth::Shared => column_width(area.width(), columns, gap),
                    CellWidth::Capped(max) => max.min(area.width()),
                };
                let cell = Size::new(cell_width, height);
                GroupPlacement {
                    placed: place_grid(group, origin, cell, columns, gap),
                    advance: grid_advance(group.len(), columns, height, gap),
                }
            }
            Self::ButtonRow => GroupPlacement {
                placed: place_button_row(group, cursor, frame),
                advance: BUTTON_HEIGHT + gap,
            },
            Self::Overlay => {
                let top_left = Point::new(
                    frame.canvas.width() / 2.0 - MODAL_SIZE.width() / 2.0,
                    frame.canvas.height() / 2.0 - MODAL_SIZE.height() / 2.0,
                );
                let bounds = Bounds::new_from_top_left(top_left, MODAL_SIZE);
                GroupPlacement {
                    placed: group
                        .iter()
                        .map(|item| (*item).clone().with_bounds(bounds))
                        .collect(),
                    advance: 0.0,
                }
            }
        }
    }
}

/// Text-width heuristic for buttons: nine units per character plus padding.
pub fn button_width(label: &str) -> f32 {
    let chars = label.chars().count() as f32;
    BUTTON_MIN_WIDTH.max(chars * 9.0 + 32.0)
}

/// Right-align a row of buttons against the content area's right edge.
///
/// Positions are assigned from the last button to the first; the output keeps
/// input order.
fn place_button_row<T: Placeable>(group: &[&T], cursor: f32, frame: &Frame) -> Vec<T> {
    let mut right = frame.area.max_x();
    let mut placed: Vec<T> = group
        .iter()
        .rev()
        .map(|item| {
            let width = button_width(item.label());
            let bounds = Bounds::new_from_top_left(
                Point::new(right - width, cursor),
                Size::new(width, BUTTON_HEIGHT),
            );
            right -= width + frame.gap;
            (*item).clone().with_bounds(bounds)
        })
        .collect();
    placed.reverse();
    placed
}
