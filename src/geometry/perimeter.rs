//! The "has a perimeter" capability.

/// Shapes whose boundary length can be measured.
///
/// Implemented independently by every shape type. For shapes built from
/// non-negative measurements the result is finite and non-negative.
pub trait HasPerimeter {
    /// Length of the shape's boundary.
    fn perimeter(&self) -> f64;
}
