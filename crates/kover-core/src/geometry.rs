//! Integer geometric primitives for scene analysis.
//!
//! # Overview
//!
//! - [`Point`] - A position on the integer plane
//! - [`Bounds`] - An axis-aligned box defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! Scenes live on the integer plane with X increasing rightward and Y
//! increasing upward. Entity coordinates are `i32`; extents derived from them
//! (`x ± w`) are computed in `i64` so they never overflow.

/// A position on the integer plane.
///
/// # Examples
///
/// ```
/// # use kover_core::geometry::Point;
/// let p = Point::new(3, -4);
/// assert_eq!(p.x(), 3);
/// assert_eq!(p.y(), -4);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate.
    pub fn x(self) -> i32 {
        self.x
    }

    /// Returns the y-coordinate.
    pub fn y(self) -> i32 {
        self.y
    }

    /// Returns the box centered on this point with the given half extents.
    pub fn to_bounds(self, half_width: i32, half_height: i32) -> Bounds {
        Bounds::new_from_center(self, half_width, half_height)
    }
}

/// An axis-aligned box `[min_x, max_x] x [min_y, max_y]`.
///
/// # Examples
///
/// ```
/// # use kover_core::geometry::{Bounds, Point};
/// let a = Bounds::new_from_center(Point::new(0, 0), 5, 5);
/// let b = Bounds::new_from_center(Point::new(10, 0), 5, 5);
///
/// // Sharing the edge x = 5 is not an intersection
/// assert!(!a.intersects(&b));
///
/// let merged = a.merge(&b);
/// assert_eq!((merged.min_x(), merged.max_x()), (-5, 15));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounds {
    min_x: i64,
    min_y: i64,
    max_x: i64,
    max_y: i64,
}

impl Bounds {
    /// Creates bounds centered on `center` spanning `half_width` and
    /// `half_height` on each side.
    pub fn new_from_center(center: Point, half_width: i32, half_height: i32) -> Self {
        let (x, y) = (i64::from(center.x), i64::from(center.y));
        let (w, h) = (i64::from(half_width), i64::from(half_height));
        Self {
            min_x: x - w,
            min_y: y - h,
            max_x: x + w,
            max_y: y + h,
        }
    }

    /// Left edge.
    pub fn min_x(self) -> i64 {
        self.min_x
    }

    /// Bottom edge.
    pub fn min_y(self) -> i64 {
        self.min_y
    }

    /// Right edge.
    pub fn max_x(self) -> i64 {
        self.max_x
    }

    /// Top edge.
    pub fn max_y(self) -> i64 {
        self.max_y
    }

    /// Returns the smallest box containing both `self` and `other`.
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Returns `true` if the interiors of the two boxes intersect.
    ///
    /// Boxes that only share an edge or a corner do not intersect.
    pub fn intersects(&self, other: &Self) -> bool {
        !(self.max_x <= other.min_x
            || self.min_x >= other.max_x
            || self.max_y <= other.min_y
            || self.min_y >= other.max_y)
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
        (-1000i32..1000, -1000i32..1000, 1i32..500, 1i32..500)
            .prop_map(|(x, y, w, h)| Bounds::new_from_center(Point::new(x, y), w, h))
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Intersection does not depend on argument order.
    fn check_intersects_is_symmetric(b1: Bounds, b2: Bounds) -> Result<(), TestCaseError> {
        prop_assert_eq!(b1.intersects(&b2), b2.intersects(&b1));
        Ok(())
    }

    /// A box placed exactly against the right edge of another never intersects it.
    fn check_edge_neighbour_does_not_intersect(
        x: i32,
        y: i32,
        w1: i32,
        w2: i32,
        h: i32,
    ) -> Result<(), TestCaseError> {
        let left = Bounds::new_from_center(Point::new(x, y), w1, h);
        let right = Bounds::new_from_center(Point::new(x + w1 + w2, y), w2, h);

        prop_assert_eq!(left.max_x(), right.min_x());
        prop_assert!(!left.intersects(&right));
        Ok(())
    }

    /// The merged box contains both inputs.
    fn check_merge_contains_both(b1: Bounds, b2: Bounds) -> Result<(), TestCaseError> {
        let merged = b1.merge(&b2);

        for b in [b1, b2] {
            prop_assert!(merged.min_x() <= b.min_x());
            prop_assert!(merged.min_y() <= b.min_y());
            prop_assert!(merged.max_x() >= b.max_x());
            prop_assert!(merged.max_y() >= b.max_y());
        }
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn intersects_is_symmetric(b1 in bounds_strategy(), b2 in bounds_strategy()) {
            check_intersects_is_symmetric(b1, b2)?;
        }

        #[test]
        fn edge_neighbour_does_not_intersect(
            x in -1000i32..1000,
            y in -1000i32..1000,
            w1 in 1i32..500,
            w2 in 1i32..500,
            h in 1i32..500,
        ) {
            check_edge_neighbour_does_not_intersect(x, y, w1, w2, h)?;
        }

        #[test]
        fn merge_contains_both(b1 in bounds_strategy(), b2 in bounds_strategy()) {
            check_merge_contains_both(b1, b2)?;
        }
    }
}
