//! The closed set of shapes the canvas knows how to measure and draw.

use std::fmt;
use std::str::FromStr;

use super::circle::Circle;
use super::error::ShapeError;
use super::perimeter::HasPerimeter;
use super::rectangle::Rectangle;
use super::square::Square;
use super::triangle::Triangle;

/// Any drawable plane shape.
///
/// Each variant keeps its own measurements; the [`Display`](fmt::Display)
/// output is the human-readable description used in listings.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Rectangle(Rectangle),
    /// Kept distinct from `Rectangle` so the square's coupled setters stay in force.
    Square(Square),
    Triangle(Triangle),
}

impl Shape {
    /// Returns which kind of shape this is.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Square(_) => ShapeKind::Square,
            Shape::Triangle(_) => ShapeKind::Triangle,
        }
    }
}

impl HasPerimeter for Shape {
    fn perimeter(&self) -> f64 {
        match self {
            Shape::Circle(c) => c.perimeter(),
            Shape::Rectangle(r) => r.perimeter(),
            Shape::Square(s) => s.perimeter(),
            Shape::Triangle(t) => t.perimeter(),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Circle(c) => fmt::Display::fmt(c, f),
            Shape::Rectangle(r) => fmt::Display::fmt(r, f),
            Shape::Square(s) => fmt::Display::fmt(s, f),
            Shape::Triangle(t) => fmt::Display::fmt(t, f),
        }
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Shape::Rectangle(rect)
    }
}

impl From<Square> for Shape {
    fn from(square: Square) -> Self {
        Shape::Square(square)
    }
}

impl From<Triangle> for Shape {
    fn from(triangle: Triangle) -> Self {
        Shape::Triangle(triangle)
    }
}

/// Shape kind labels, as accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Square,
    Triangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Circle,
        ShapeKind::Rectangle,
        ShapeKind::Square,
        ShapeKind::Triangle,
    ];

    /// Lowercase label for this kind.
    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Square => "square",
            ShapeKind::Triangle => "triangle",
        }
    }

    /// Names of the numeric parameters a request for this kind carries, in order.
    pub fn parameter_names(self) -> &'static [&'static str] {
        match self {
            ShapeKind::Circle => &["centerX", "centerY", "radius"],
            ShapeKind::Rectangle => &["originX", "originY", "length", "width"],
            ShapeKind::Square => &["originX", "originY", "side"],
            ShapeKind::Triangle => &["p1x", "p1y", "p2x", "p2y", "p3x", "p3y"],
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ShapeError::UnknownKind(wanted.to_string()))
    }
}
