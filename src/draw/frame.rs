//! Frame container for the shapes drawn on a canvas.

use crate::geometry::Shape;

/// Ordered collection of every shape submitted since the last reset.
///
/// Shapes are only ever appended; the whole collection is dropped on reset.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    /// Shapes in draw order (first = bottom layer, last = top layer)
    shapes: Vec<Shape>,
}

impl Frame {
    /// Creates a new empty frame with no shapes.
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Removes all shapes from the frame.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Adds a new shape on top of the existing ones and returns it.
    pub fn add_shape(&mut self, shape: Shape) -> &Shape {
        self.shapes.push(shape);
        &self.shapes[self.shapes.len() - 1]
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// One description line per shape, in draw order.
    pub fn descriptions(&self) -> Vec<String> {
        self.shapes.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Circle, Point, Square};

    #[test]
    fn keeps_insertion_order() {
        let mut frame = Frame::new();
        frame.add_shape(Circle::new(Point::ORIGIN, 1.0).unwrap().into());
        frame.add_shape(Square::new(Point::ORIGIN, 2.0).unwrap().into());
        assert_eq!(
            frame.descriptions(),
            vec![
                "Circle (center: x : 0, y : 0, radius: 1)".to_string(),
                "Square (origin: x : 0, y : 0, side: 2)".to_string(),
            ]
        );
    }

    #[test]
    fn clear_empties_the_frame() {
        let mut frame = Frame::new();
        frame.add_shape(Circle::new(Point::ORIGIN, 1.0).unwrap().into());
        assert_eq!(frame.len(), 1);
        frame.clear();
        assert!(frame.is_empty());
    }
}
