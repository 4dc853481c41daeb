//! Uniform row-major grid placement shared by the grid-based rules.

use wireframe_core::{
    geometry::{Bounds, Point, Size},
    semantic::Placeable,
};

/// Width of one column when `columns` columns and their gaps span `width`.
pub fn column_width(width: f32, columns: usize, gap: f32) -> f32 {
    let columns = columns.max(1) as f32;
    (width - gap * (columns - 1.0)) / columns
}

/// Vertical space consumed by `count` cells of height `cell_height` in
/// `columns` columns, including one trailing gap per row.
pub fn grid_advance(count: usize, columns: usize, cell_height: f32, gap: f32) -> f32 {
    let rows = count.div_ceil(columns.max(1));
    rows as f32 * (cell_height + gap)
}

/// Place `items` in a row-major grid.
///
/// Item `j` lands in column `j % columns`, row `j / columns`, with its
/// top-left corner at `origin + (col * (cell.width + gap), row * (cell.height + gap))`.
/// Every item receives exactly `cell` as its size.
///
/// # Arguments
///
/// * `items` - Records to position, in placement order
/// * `origin` - Top-left corner of the first cell
/// * `cell` - Size of every cell
/// * `columns` - Number of columns; values below one are treated as one
/// * `gap` - Spacing between neighbouring cells on both axes
pub fn place_grid<T: Placeable>(
    items: &[&T],
    origin: Point,
    cell: Size,
    columns: usize,
    gap: f32,
) -> Vec<T> {
    let columns = columns.max(1);
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let col = (index % columns) as f32;
            let row = (index / columns) as f32;
            let top_left = origin.add_point(Point::new(
                col * (cell.width() + gap),
                row * (cell.height() + gap),
            ));
            (*item).clone().with_bounds(Bounds::new_from_top_left(top_left, cell))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use wireframe_core::semantic::{ComponentKind, Shape};

    use super::*;

    fn cards(count: usize) -> Vec<Shape> {
        (0..count)
            .map(|i| Shape::new(ComponentKind::Card, format!("Card {i}")))
            .collect()
    }

    #[test]
    fn test_column_width() {
        assert_approx_eq!(f32, column_width(992.0, 1, 16.0), 992.0);
        assert_approx_eq!(f32, column_width(992.0, 2, 16.0), 488.0);
        assert_approx_eq!(f32, column_width(992.0, 3, 16.0), 320.0);
        assert_approx_eq!(f32, column_width(992.0, 0, 16.0), 992.0);
    }

    #[test]
    fn test_grid_advance_rounds_rows_up() {
        assert_approx_eq!(f32, grid_advance(1, 3, 120.0, 16.0), 136.0);
        assert_approx_eq!(f32, grid_advance(3, 3, 120.0, 16.0), 136.0);
        assert_approx_eq!(f32, grid_advance(4, 3, 120.0, 16.0), 272.0);
        assert_approx_eq!(f32, grid_advance(0, 3, 120.0, 16.0), 0.0);
    }

    #[test]
    fn test_place_grid_row_major() {
        let items = cards(5);
        let refs: Vec<&Shape> = items.iter().collect();

        let placed = place_grid(
            &refs,
            Point::new(16.0, 16.0),
            Size::new(100.0, 50.0),
            2,
            10.0,
        );

        let corners: Vec<(f32, f32)> = placed.iter().map(|s| (s.x(), s.y())).collect();
        assert_eq!(
            corners,
            vec![
                (16.0, 16.0),
                (126.0, 16.0),
                (16.0, 76.0),
                (126.0, 76.0),
                (16.0, 136.0),
            ]
        );
        assert!(placed.iter().all(|s| s.width() == 100.0 && s.height() == 50.0));
    }

    #[test]
    fn test_place_grid_keeps_labels_in_order() {
        let items = cards(3);
        let refs: Vec<&Shape> = items.iter().collect();

        let placed = place_grid(&refs, Point::default(), Size::new(10.0, 10.0), 3, 0.0);

        let labels: Vec<&str> = placed.iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["Card 0", "Card 1", "Card 2"]);
    }
}
