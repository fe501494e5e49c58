//! A drawing session: the shapes submitted so far and the surface they are drawn on.

use log::{info, warn};

use crate::draw::{Backdrop, BackgroundStyle, Drawer, Frame, StrokeStyle, paint_background};
use crate::geometry::{HasPerimeter, Shape, ShapeError};
use crate::request::ShapeRequest;

/// Owns the shape collection and redraws all of it after every change.
///
/// Each accepted submission appends a new shape and triggers a full redraw
/// (background, then every shape in submission order). A rejected submission
/// leaves both the collection and the surface untouched.
pub struct Canvas<S: Backdrop> {
    drawer: Drawer<S>,
    frame: Frame,
    background: BackgroundStyle,
}

impl<S: Backdrop> Canvas<S> {
    /// Creates a canvas over `surface` and paints its background.
    pub fn new(
        surface: S,
        width: f64,
        height: f64,
        stroke: StrokeStyle,
        background: BackgroundStyle,
    ) -> Self {
        info!("Initializing {}x{} canvas", width, height);
        let mut canvas = Self {
            drawer: Drawer::new(surface, width, height).with_style(stroke),
            frame: Frame::new(),
            background,
        };
        canvas.repaint_background();
        canvas
    }

    /// Builds the requested shape, appends it and redraws the canvas.
    pub fn submit(&mut self, request: &ShapeRequest) -> Result<&Shape, ShapeError> {
        let shape = request.build().inspect_err(|err| {
            warn!("Rejected {} request: {}", request.kind(), err);
        })?;
        info!("Adding {} (perimeter {:.2})", shape, shape.perimeter());

        self.frame.add_shape(shape);
        self.redraw();
        Ok(&self.frame.shapes()[self.frame.len() - 1])
    }

    /// Appends already-built shapes and redraws once for the whole batch.
    pub fn extend<I>(&mut self, shapes: I)
    where
        I: IntoIterator<Item = Shape>,
    {
        let before = self.frame.len();
        for shape in shapes {
            self.frame.add_shape(shape);
        }
        info!("Adding {} shapes", self.frame.len() - before);
        self.redraw();
    }

    /// Repaints the background and every shape, in order.
    pub fn redraw(&mut self) {
        self.repaint_background();
        self.drawer.draw_shapes(self.frame.shapes());
    }

    /// Drops every shape and repaints an empty canvas.
    pub fn reset(&mut self) {
        info!("Resetting canvas ({} shapes cleared)", self.frame.len());
        self.frame.clear();
        self.repaint_background();
    }

    pub fn shapes(&self) -> &[Shape] {
        self.frame.shapes()
    }

    /// Human-readable listing, one line per shape.
    pub fn descriptions(&self) -> Vec<String> {
        self.frame.descriptions()
    }

    pub fn surface(&self) -> &S {
        self.drawer.surface()
    }

    pub fn surface_mut(&mut self) -> &mut S {
        self.drawer.surface_mut()
    }

    pub fn into_surface(self) -> S {
        self.drawer.into_surface()
    }

    fn repaint_background(&mut self) {
        let transform = self.drawer.transform();
        paint_background(
            self.drawer.surface_mut(),
            transform.width(),
            transform.height(),
            &self.background,
        );
    }
}
