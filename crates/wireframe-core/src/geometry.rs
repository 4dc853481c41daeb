//! Geometric primitives for wireframe layout and positioning.
//!
//! This module provides the geometric types used throughout the wireframe
//! crates for calculating positions, sizes, and bounding boxes of UI
//! components.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in canvas space
//! - [`Size`] - Width and height
//! - [`Bounds`] - Axis-aligned rectangles, stored as min and max corners
//! - [`Insets`] - Per-side spacing used to shrink a [`Bounds`]
//!
//! # Coordinate System
//!
//! Wireframes use a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner of the canvas at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward
//!
//! Wireframe components are anchored by their top-left corner, so
//! [`Bounds::new_from_top_left`] is the usual constructor.

/// A 2D point representing a position in canvas coordinate space.
///
/// # Examples
///
/// ```
/// # use wireframe_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn x(self) -> f32 {
        self.x
    }

    pub fn y(self) -> f32 {
        self.y
    }

    /// Component-wise sum.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Returns true if both coordinates are finite and not negative
    pub fn is_finite_non_negative(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.x >= 0.0 && self.y >= 0.0
    }
}

/// Width and height of a rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }

}

/// An axis-aligned rectangle stored as its min and max corners.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Rectangle anchored at `top_left`.
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Left edge.
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Top edge.
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Right edge.
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Bottom edge.
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    pub fn min_point(self) -> Point {
        Point {
            x: self.min_x,
            y: self.min_y,
        }
    }

    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Converts bounds to a Size object
    pub fn to_size(self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Smallest rectangle covering both.
    ///
    /// # Examples
    ///
    /// ```
    /// # use wireframe_core::geometry::{Bounds, Point, Size};
    /// let navbar = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(100.0, 30.0));
    /// let card = Bounds::new_from_top_left(Point::new(10.0, 40.0), Size::new(120.0, 80.0));
    ///
    /// let combined = navbar.merge(&card);
    /// assert_eq!(combined.min_x(), 0.0);
    /// assert_eq!(combined.min_y(), 0.0);
    /// assert_eq!(combined.width(), 130.0);
    /// assert_eq!(combined.height(), 120.0);
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Returns true if the interiors of the two bounds overlap.
    ///
    /// Rectangles that only touch along an edge do not intersect.
    ///
    /// # Examples
    ///
    /// ```
    /// # use wireframe_core::geometry::{Bounds, Point, Size};
    /// let a = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(10.0, 10.0));
    /// let b = Bounds::new_from_top_left(Point::new(10.0, 0.0), Size::new(10.0, 10.0));
    /// let c = Bounds::new_from_top_left(Point::new(5.0, 5.0), Size::new(10.0, 10.0));
    ///
    /// assert!(!a.intersects(&b));
    /// assert!(a.intersects(&c));
    /// ```
    pub fn intersects(&self, other: &Self) -> bool {
        self.min_x < other.max_x
            && other.min_x < self.max_x
            && self.min_y < other.max_y
            && other.min_y < self.max_y
    }

    /// Returns true if `other` lies entirely within these bounds (edges inclusive)
    pub fn contains(&self, other: &Self) -> bool {
        other.min_x >= self.min_x
            && other.max_x <= self.max_x
            && other.min_y >= self.min_y
            && other.max_y <= self.max_y
    }

    /// Shrinks the bounds by the given insets.
    pub fn inset(&self, insets: Insets) -> Self {
        Self {
            min_x: self.min_x + insets.left(),
            min_y: self.min_y + insets.top(),
            max_x: self.max_x - insets.right(),
            max_y: self.max_y - insets.bottom(),
        }
    }
}

/// Spacing on the four sides of a rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Insets in CSS order: top, right, bottom, left.
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Returns the top inset value
    pub fn top(self) -> f32 {
        self.top
    }

    /// Returns the right inset value
    pub fn right(self) -> f32 {
        self.right
    }

    /// Returns the bottom inset value
    pub fn bottom(self) -> f32 {
        self.bottom
    }

    /// Returns the left inset value
    pub fn left(self) -> f32 {
        self.left
    }

    /// Returns new insets with `value` added to every side
    pub fn add_uniform(self, value: f32) -> Self {
        Self {
            top: self.top + value,
            right: self.right + value,
            bottom: self.bottom + value,
            left: self.left + value,
        }
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn bounds_strategy() -> impl Strategy<Value = Bounds> {
        (
            -1000.0f32..1000.0,
            -1000.0f32..1000.0,
            1.0f32..500.0,
            1.0f32..500.0,
        )
            .prop_map(|(x, y, w, h)| Bounds::new_from_top_left(Point::new(x, y), Size::new(w, h)))
    }

    /// Per-side fractions of the bounds size; each pair sums below one.
    fn inset_fractions_strategy() -> impl Strategy<Value = (f32, f32, f32, f32)> {
        (0.0f32..0.49, 0.0f32..0.49, 0.0f32..0.49, 0.0f32..0.49)
    }

    // ===================
    // Property Test Functions
    // ===================

    fn check_intersects_is_symmetric(a: Bounds, b: Bounds) -> Result<(), TestCaseError> {
        prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        Ok(())
    }

    /// A non-empty rectangle overlaps itself but not its right-hand neighbour.
    fn check_intersects_excludes_shared_edge(a: Bounds) -> Result<(), TestCaseError> {
        let neighbour =
            Bounds::new_from_top_left(Point::new(a.max_x(), a.min_y()), a.to_size());
        prop_assert!(a.intersects(&a));
        prop_assert!(!a.intersects(&neighbour));
        prop_assert!(!neighbour.intersects(&a));
        Ok(())
    }

    fn check_merge_contains_both(a: Bounds, b: Bounds) -> Result<(), TestCaseError> {
        let merged = a.merge(&b);
        prop_assert!(merged.contains(&a));
        prop_assert!(merged.contains(&b));
        prop_assert_eq!(merged, b.merge(&a));
        Ok(())
    }

    fn check_inset_stays_inside(
        bounds: Bounds,
        (top, right, bottom, left): (f32, f32, f32, f32),
    ) -> Result<(), TestCaseError> {
        let insets = Insets::new(
            bounds.height() * top,
            bounds.width() * right,
            bounds.height() * bottom,
            bounds.width() * left,
        );
        let inner = bounds.inset(insets);

        prop_assert!(bounds.contains(&inner));
        prop_assert!(inner.width() >= 0.0 && inner.height() >= 0.0);
        Ok(())
    }

    proptest! {
        #[test]
        fn bounds_intersects_is_symmetric(a in bounds_strategy(), b in bounds_strategy()) {
            check_intersects_is_symmetric(a, b)?;
        }

        #[test]
        fn bounds_intersects_excludes_shared_edge(a in bounds_strategy()) {
            check_intersects_excludes_shared_edge(a)?;
        }

        #[test]
        fn bounds_merge_contains_both(a in bounds_strategy(), b in bounds_strategy()) {
            check_merge_contains_both(a, b)?;
        }

        #[test]
        fn bounds_inset_stays_inside(
            bounds in bounds_strategy(),
            fractions in inset_fractions_strategy(),
        ) {
            check_inset_stays_inside(bounds, fractions)?;
        }
    }
}
