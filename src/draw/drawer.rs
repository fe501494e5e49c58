//! Shape rendering onto an origin-centered canvas.

use std::f64::consts::PI;

use log::debug;

use super::color::{BLACK, Color};
use super::surface::{LineJoin, StyleGuard, Surface};
use crate::geometry::{Circle, Point, Rectangle, Shape, Triangle};

/// Maps plane coordinates to raster coordinates for a canvas of fixed size.
///
/// The plane origin sits at the canvas center and plane y points up, while
/// raster rows grow downward: `(x, y)` lands on `(width/2 + x, height/2 - y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RasterTransform {
    width: f64,
    height: f64,
}

impl RasterTransform {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Raster position of a plane point.
    pub fn to_raster(&self, point: Point) -> (f64, f64) {
        (self.width / 2.0 + point.x, self.height / 2.0 - point.y)
    }

    /// Plane point under a raster position.
    pub fn to_plane(&self, x: f64, y: f64) -> Point {
        Point::new(x - self.width / 2.0, self.height / 2.0 - y)
    }
}

/// Paint settings applied to every stroked shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub line_join: LineJoin,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: BLACK,
            line_join: LineJoin::Miter,
        }
    }
}

/// Draws [`Shape`]s onto a [`Surface`].
///
/// The canvas size is captured once at construction. Every shape routine
/// maps its points through the same [`RasterTransform`] and leaves the
/// surface's stroke color and line join as it found them.
pub struct Drawer<S: Surface> {
    surface: S,
    transform: RasterTransform,
    style: StrokeStyle,
}

impl<S: Surface> Drawer<S> {
    /// Creates a drawer for a `width` x `height` pixel surface.
    pub fn new(surface: S, width: f64, height: f64) -> Self {
        debug!("Initiating drawer on canvas {}x{}", width, height);
        Self {
            surface,
            transform: RasterTransform::new(width, height),
            style: StrokeStyle::default(),
        }
    }

    pub fn with_style(mut self, style: StrokeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    pub fn set_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }

    pub fn transform(&self) -> RasterTransform {
        self.transform
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Draws every shape in order (first shape = bottom layer).
    pub fn draw_shapes(&mut self, shapes: &[Shape]) {
        for shape in shapes {
            self.draw_shape(shape);
        }
    }

    /// Draws a single shape, dispatching on its kind.
    ///
    /// Squares go through the rectangle routine.
    pub fn draw_shape(&mut self, shape: &Shape) {
        match shape {
            Shape::Circle(circle) => self.draw_circle(circle),
            Shape::Rectangle(rect) => self.draw_rectangle(rect),
            Shape::Square(square) => self.draw_rectangle(square.as_rectangle()),
            Shape::Triangle(triangle) => self.draw_triangle(triangle),
        }
    }

    fn draw_circle(&mut self, circle: &Circle) {
        let (cx, cy) = self.transform.to_raster(circle.center());
        let style = self.style;

        let mut surface = StyleGuard::new(&mut self.surface);
        surface.begin_path();
        surface.set_stroke_color(style.color);
        surface.arc(cx, cy, circle.radius(), 0.0, 2.0 * PI);
        surface.stroke();
    }

    fn draw_rectangle(&mut self, rect: &Rectangle) {
        // The origin is the bottom-left corner in the plane, so the raster
        // rectangle extends upward by its length.
        let (x, y) = self.transform.to_raster(rect.origin());
        let style = self.style;

        let mut surface = StyleGuard::new(&mut self.surface);
        surface.begin_path();
        surface.set_stroke_color(style.color);
        surface.set_line_join(style.line_join);
        surface.stroke_rect(x, y, rect.width(), -rect.length());
    }

    fn draw_triangle(&mut self, triangle: &Triangle) {
        let [p1, p2, p3] = triangle.vertices().map(|p| self.transform.to_raster(p));
        let style = self.style;

        let mut surface = StyleGuard::new(&mut self.surface);
        surface.set_stroke_color(style.color);
        surface.set_line_join(style.line_join);
        surface.begin_path();
        surface.move_to(p1.0, p1.1);
        surface.line_to(p2.0, p2.1);
        surface.line_to(p3.0, p3.1);
        surface.close_path();
        surface.stroke();
    }
}
