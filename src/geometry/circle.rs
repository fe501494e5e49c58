use std::f64::consts::PI;
use std::fmt;

use super::error::{ShapeError, non_negative};
use super::perimeter::HasPerimeter;
use super::point::Point;

/// A circle given by its center and radius.
///
/// A zero radius is accepted and describes a single point.
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    /// Creates a circle, rejecting a negative radius.
    pub fn new(center: Point, radius: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            center,
            radius: non_negative("radius", radius)?,
        })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl HasPerimeter for Circle {
    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle (center: {}, radius: {})", self.center, self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perimeter_is_circumference() {
        for r in [0.0, 1.0, 10.0, 123.456] {
            let circle = Circle::new(Point::new(5.0, -5.0), r).unwrap();
            assert_eq!(circle.perimeter(), 2.0 * PI * r);
        }
    }

    #[test]
    fn zero_radius_is_a_point_circle() {
        let circle = Circle::new(Point::ORIGIN, 0.0).unwrap();
        assert_eq!(circle.perimeter(), 0.0);
    }

    #[test]
    fn negative_radius_is_rejected() {
        let err = Circle::new(Point::ORIGIN, -1.0).unwrap_err();
        assert_eq!(
            err,
            ShapeError::InvalidMeasurement {
                name: "radius",
                value: -1.0
            }
        );
    }

    #[test]
    fn description_lists_center_then_radius() {
        let circle = Circle::new(Point::new(1.0, 2.0), 10.0).unwrap();
        assert_eq!(
            circle.to_string(),
            "Circle (center: x : 1, y : 2, radius: 10)"
        );
    }
}
