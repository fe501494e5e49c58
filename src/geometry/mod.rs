//! Plane geometry: points, shapes and their measurements.
//!
//! Shapes live in an origin-centered plane with y pointing up. Lengths
//! (radius, length, width, side) are validated at construction and never
//! negative afterwards.

pub mod circle;
pub mod error;
pub mod perimeter;
pub mod point;
pub mod rectangle;
pub mod shape;
pub mod square;
pub mod triangle;

pub use circle::Circle;
pub use error::ShapeError;
pub use perimeter::HasPerimeter;
pub use point::Point;
pub use rectangle::Rectangle;
pub use shape::{Shape, ShapeKind};
pub use square::Square;
pub use triangle::Triangle;
