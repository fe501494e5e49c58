use std::fmt;

use super::error::{ShapeError, non_negative};
use super::perimeter::HasPerimeter;
use super::point::Point;

/// An axis-aligned rectangle.
///
/// `origin` is the bottom-left corner in plane coordinates; `width` extends
/// along x and `length` along y. The two dimensions are independent.
#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    origin: Point,
    length: f64,
    width: f64,
}

impl Rectangle {
    /// Creates a rectangle, rejecting a negative length or width.
    pub fn new(origin: Point, length: f64, width: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            origin,
            length: non_negative("length", length)?,
            width: non_negative("width", width)?,
        })
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Changes the length, leaving the width alone.
    pub fn set_length(&mut self, length: f64) -> Result<(), ShapeError> {
        self.length = non_negative("length", length)?;
        Ok(())
    }

    /// Changes the width, leaving the length alone.
    pub fn set_width(&mut self, width: f64) -> Result<(), ShapeError> {
        self.width = non_negative("width", width)?;
        Ok(())
    }

    /// Writes both dimensions at once. Callers validate beforehand.
    pub(super) fn resize(&mut self, length: f64, width: f64) {
        self.length = length;
        self.width = width;
    }
}

impl HasPerimeter for Rectangle {
    fn perimeter(&self) -> f64 {
        2.0 * (self.length + self.width)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rectangle (origin: {}, length: {}, width: {})",
            self.origin, self.length, self.width
        )
    }
}
