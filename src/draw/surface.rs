//! The primitive vector operations a drawing target has to offer.
//!
//! [`Surface`] is the minimal set the [`Drawer`](super::Drawer) relies on:
//! path building, stroking, and the two pieces of paint state (stroke color
//! and line join) that shape routines are allowed to change temporarily.
//! [`Backdrop`] adds the fill operations needed to paint the canvas
//! background and its axis legend.

use std::ops::{Deref, DerefMut};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::color::Color;

/// How two stroked segments are joined at a corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    /// Sharp, pointed corner
    #[default]
    Miter,
    /// Rounded corner
    Round,
    /// Corner cut off flat
    Bevel,
}

/// A raster target that can stroke vector paths.
///
/// Coordinates are raster coordinates: origin at the top-left corner,
/// y growing downward.
pub trait Surface {
    /// Discards the current path and starts a new one.
    fn begin_path(&mut self);

    /// Starts a new sub-path at `(x, y)`.
    fn move_to(&mut self, x: f64, y: f64);

    /// Adds a straight segment from the current point to `(x, y)`.
    fn line_to(&mut self, x: f64, y: f64);

    /// Closes the current sub-path back to its first point.
    fn close_path(&mut self);

    /// Strokes the current path with the current stroke color and line join.
    fn stroke(&mut self);

    /// Strokes a rectangle outline without touching the current path.
    ///
    /// `width` and `height` may be negative, extending left or up from `(x, y)`.
    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Adds a circular arc centered at `(x, y)` to the current path.
    ///
    /// Angles are in radians, measured clockwise in raster space.
    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64);

    fn stroke_color(&self) -> Color;

    fn set_stroke_color(&mut self, color: Color);

    fn line_join(&self) -> LineJoin;

    fn set_line_join(&mut self, join: LineJoin);
}

/// Fill operations used for painting the background behind the shapes.
pub trait Backdrop: Surface {
    fn fill_color(&self) -> Color;

    fn set_fill_color(&mut self, color: Color);

    /// Fills a rectangle with the current fill color.
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Draws `text` with its baseline starting at `(x, y)`.
    fn fill_text(&mut self, text: &str, x: f64, y: f64, size: f64);
}

/// Scoped access to a surface that restores its paint state on drop.
///
/// The stroke color and line join in effect when the guard was created are
/// written back when it goes out of scope, whichever way the scope is left.
pub struct StyleGuard<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
    stroke_color: Color,
    line_join: LineJoin,
}

impl<'a, S: Surface + ?Sized> StyleGuard<'a, S> {
    pub fn new(surface: &'a mut S) -> Self {
        let stroke_color = surface.stroke_color();
        let line_join = surface.line_join();
        Self {
            surface,
            stroke_color,
            line_join,
        }
    }
}

impl<S: Surface + ?Sized> Deref for StyleGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for StyleGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for StyleGuard<'_, S> {
    fn drop(&mut self) {
        if self.surface.stroke_color() != self.stroke_color {
            self.surface.set_stroke_color(self.stroke_color);
        }
        if self.surface.line_join() != self.line_join {
            self.surface.set_line_join(self.line_join);
        }
    }
}
