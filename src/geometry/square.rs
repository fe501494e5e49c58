use std::fmt;

use super::error::{ShapeError, non_negative};
use super::perimeter::HasPerimeter;
use super::point::Point;
use super::rectangle::Rectangle;

/// A rectangle whose length and width are always equal.
///
/// The underlying [`Rectangle`] is only reachable through a shared
/// reference, so every mutation goes through [`Square::set_side`], which
/// writes both dimensions together.
#[derive(Clone, Debug, PartialEq)]
pub struct Square {
    rect: Rectangle,
}

impl Square {
    /// Creates a square, rejecting a negative side.
    pub fn new(origin: Point, side: f64) -> Result<Self, ShapeError> {
        let side = non_negative("side", side)?;
        Ok(Self {
            rect: Rectangle::new(origin, side, side)?,
        })
    }

    pub fn origin(&self) -> Point {
        self.rect.origin()
    }

    pub fn side(&self) -> f64 {
        self.rect.length()
    }

    pub fn length(&self) -> f64 {
        self.rect.length()
    }

    pub fn width(&self) -> f64 {
        self.rect.width()
    }

    /// Resizes the square; both dimensions take `side`.
    pub fn set_side(&mut self, side: f64) -> Result<(), ShapeError> {
        let side = non_negative("side", side)?;
        self.rect.resize(side, side);
        Ok(())
    }

    /// Sets the length, which for a square also sets the width.
    pub fn set_length(&mut self, length: f64) -> Result<(), ShapeError> {
        self.set_side(length)
    }

    /// Sets the width, which for a square also sets the length.
    pub fn set_width(&mut self, width: f64) -> Result<(), ShapeError> {
        self.set_side(width)
    }

    /// The square viewed as the rectangle it specializes.
    pub fn as_rectangle(&self) -> &Rectangle {
        &self.rect
    }
}

impl From<Square> for Rectangle {
    fn from(square: Square) -> Self {
        square.rect
    }
}

impl HasPerimeter for Square {
    fn perimeter(&self) -> f64 {
        self.rect.perimeter()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square (origin: {}, side: {})", self.origin(), self.side())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_square(square: &Square) {
        assert_eq!(square.length(), square.width());
        let rect = square.as_rectangle();
        assert_eq!(rect.length(), rect.width());
    }

    #[test]
    fn perimeter_is_four_sides() {
        let square = Square::new(Point::ORIGIN, 20.0).unwrap();
        assert_eq!(square.perimeter(), 80.0);
    }

    #[test]
    fn every_setter_keeps_sides_equal() {
        let mut square = Square::new(Point::new(2.0, 3.0), 1.0).unwrap();
        assert_square(&square);

        square.set_side(4.0).unwrap();
        assert_square(&square);
        assert_eq!(square.side(), 4.0);

        square.set_length(9.0).unwrap();
        assert_square(&square);
        assert_eq!(square.width(), 9.0);

        square.set_width(2.5).unwrap();
        assert_square(&square);
        assert_eq!(square.length(), 2.5);
        assert_eq!(square.perimeter(), 10.0);
    }

    #[test]
    fn rejected_mutation_leaves_square_untouched() {
        let mut square = Square::new(Point::ORIGIN, 6.0).unwrap();
        assert!(square.set_width(-1.0).is_err());
        assert_eq!((square.length(), square.width()), (6.0, 6.0));
    }

    #[test]
    fn negative_side_is_rejected() {
        assert!(matches!(
            Square::new(Point::ORIGIN, -3.0),
            Err(ShapeError::InvalidMeasurement { name: "side", .. })
        ));
    }

    #[test]
    fn converts_into_equal_rectangle() {
        let square = Square::new(Point::ORIGIN, 20.0).unwrap();
        let rect: Rectangle = square.into();
        assert_eq!(rect, Rectangle::new(Point::ORIGIN, 20.0, 20.0).unwrap());
    }

    #[test]
    fn description_lists_origin_then_side() {
        let square = Square::new(Point::new(0.0, 0.0), 20.0).unwrap();
        assert_eq!(
            square.to_string(),
            "Square (origin: x : 0, y : 0, side: 20)"
        );
    }
}
