//! Plane coordinates.

use std::fmt;

/// A point in the origin-centered, y-up plane.
///
/// Points are plain values: two points are the same point when their
/// coordinates are equal.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Abscissa
    pub x: f64,
    /// Ordinate (positive is up)
    pub y: f64,
}

impl Point {
    /// The plane origin `(0, 0)`.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between `self` and `other`.
    ///
    /// Symmetric, and zero only when both points share their coordinates.
    pub fn distance_from(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x : {}, y : {}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_from(&b), 5.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Point::new(-2.5, 7.0);
        let b = Point::new(4.0, -1.25);
        assert_eq!(a.distance_from(&b), b.distance_from(&a));
    }

    #[test]
    fn distance_is_zero_only_for_equal_points() {
        let a = Point::new(1.5, -3.0);
        assert_eq!(a.distance_from(&a), 0.0);
        assert!(a.distance_from(&Point::new(1.5, -2.0)) > 0.0);
        // Opposite offsets cancel out in a sum-based formula but not here
        assert!(Point::new(1.0, -1.0).distance_from(&Point::ORIGIN) > 0.0);
    }

    #[test]
    fn renders_coordinates() {
        assert_eq!(Point::new(3.0, -4.5).to_string(), "x : 3, y : -4.5");
    }
}
