use std::fmt;

use super::perimeter::HasPerimeter;
use super::point::Point;

/// A triangle given by its three vertices, in drawing order.
///
/// Collinear or coincident vertices are accepted.
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    vertices: [Point; 3],
}

impl Triangle {
    pub fn new(p1: Point, p2: Point, p3: Point) -> Self {
        Self {
            vertices: [p1, p2, p3],
        }
    }

    pub fn vertices(&self) -> &[Point; 3] {
        &self.vertices
    }
}

impl HasPerimeter for Triangle {
    /// Sum of the sides p1→p2, p2→p3 and p3→p1.
    fn perimeter(&self) -> f64 {
        let [p1, p2, p3] = &self.vertices;
        p1.distance_from(p2) + p2.distance_from(p3) + p3.distance_from(p1)
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [p1, p2, p3] = &self.vertices;
        write!(f, "Triangle (p1: {p1}, p2: {p2}, p3: {p3})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn right_triangle() -> Triangle {
        Triangle::new(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 10.0),
        )
    }

    #[test]
    fn perimeter_of_right_triangle() {
        let expected = 10.0 + 10.0 + 10.0 * 2f64.sqrt();
        assert!((right_triangle().perimeter() - expected).abs() < EPS);
    }

    #[test]
    fn perimeter_ignores_relabeling() {
        let (a, b, c) = (
            Point::new(-3.0, 1.0),
            Point::new(7.5, 4.0),
            Point::new(2.0, -6.0),
        );
        let base = Triangle::new(a, b, c).perimeter();
        let rotated = Triangle::new(b, c, a).perimeter();
        let reflected = Triangle::new(c, b, a).perimeter();
        assert!((base - rotated).abs() < EPS);
        assert!((base - reflected).abs() < EPS);
    }

    #[test]
    fn collinear_vertices_are_accepted() {
        let flat = Triangle::new(
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(3.0, 0.0),
        );
        assert!((flat.perimeter() - 6.0).abs() < EPS);
    }

    #[test]
    fn description_lists_vertices_in_order() {
        assert_eq!(
            right_triangle().to_string(),
            "Triangle (p1: x : 0, y : 0, p2: x : 10, y : 0, p3: x : 0, y : 10)"
        );
    }
}
