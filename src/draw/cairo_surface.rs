//! Cairo-backed [`Surface`].

use std::fs::File;
use std::path::Path;

use anyhow::{Context as _, Result, anyhow};
use log::{info, warn};

use super::color::{BLACK, Color};
use super::surface::{Backdrop, LineJoin, Surface};

/// Draws onto a Cairo context.
///
/// Cairo has a single source pattern for stroking and filling, so the stroke
/// and fill colors are tracked here and applied right before each paint call.
pub struct CairoSurface {
    ctx: cairo::Context,
    image: Option<cairo::ImageSurface>,
    stroke_color: Color,
    fill_color: Color,
}

impl CairoSurface {
    /// Wraps an existing context.
    pub fn new(ctx: cairo::Context) -> Self {
        Self {
            ctx,
            image: None,
            stroke_color: BLACK,
            fill_color: BLACK,
        }
    }

    /// Creates a transparent ARGB image of the given size to draw on.
    pub fn image(width: i32, height: i32) -> Result<Self> {
        let image = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)
            .with_context(|| format!("Failed to create {width}x{height} image surface"))?;
        let ctx = cairo::Context::new(&image).context("Failed to create Cairo context")?;
        let mut surface = Self::new(ctx);
        surface.image = Some(image);
        Ok(surface)
    }

    /// Sets the stroke width used for every outline.
    pub fn with_line_width(self, width: f64) -> Self {
        self.ctx.set_line_width(width);
        self
    }

    /// Releases the context and returns the backing image, if any.
    pub fn into_image(self) -> Option<cairo::ImageSurface> {
        let Self { ctx, image, .. } = self;
        drop(ctx);
        image
    }

    /// Writes the backing image to `path` as PNG.
    pub fn write_png(&self, path: &Path) -> Result<()> {
        let image = self
            .image
            .as_ref()
            .ok_or_else(|| anyhow!("Surface is not backed by an image"))?;
        image.flush();

        let mut file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        image
            .write_to_png(&mut file)
            .map_err(|err| anyhow!("Failed to write PNG to {}: {err}", path.display()))?;

        info!("Saved canvas to {}", path.display());
        Ok(())
    }

    fn apply_source(&self, color: Color) {
        self.ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    }
}

impl Surface for CairoSurface {
    fn begin_path(&mut self) {
        self.ctx.new_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn stroke(&mut self) {
        self.apply_source(self.stroke_color);
        if let Err(err) = self.ctx.stroke() {
            warn!("Cairo stroke failed: {err}");
        }
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        // Keep whatever path is pending intact around the rectangle
        let pending = self.ctx.copy_path().ok();
        self.ctx.new_path();
        self.ctx.rectangle(x, y, width, height);
        self.stroke();
        if let Some(path) = pending {
            self.ctx.append_path(&path);
        }
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) {
        self.ctx.arc(x, y, radius, start_angle, end_angle);
    }

    fn stroke_color(&self) -> Color {
        self.stroke_color
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn line_join(&self) -> LineJoin {
        match self.ctx.line_join() {
            cairo::LineJoin::Round => LineJoin::Round,
            cairo::LineJoin::Bevel => LineJoin::Bevel,
            _ => LineJoin::Miter,
        }
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.ctx.set_line_join(match join {
            LineJoin::Miter => cairo::LineJoin::Miter,
            LineJoin::Round => cairo::LineJoin::Round,
            LineJoin::Bevel => cairo::LineJoin::Bevel,
        });
    }
}

impl Backdrop for CairoSurface {
    fn fill_color(&self) -> Color {
        self.fill_color
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.new_path();
        self.ctx.rectangle(x, y, width, height);
        self.apply_source(self.fill_color);
        if let Err(err) = self.ctx.fill() {
            warn!("Cairo fill failed: {err}");
        }
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, size: f64) {
        self.ctx.select_font_face(
            "Sans",
            cairo::FontSlant::Normal,
            cairo::FontWeight::Normal,
        );
        self.ctx.set_font_size(size);
        self.apply_source(self.fill_color);
        self.ctx.move_to(x, y);
        if let Err(err) = self.ctx.show_text(text) {
            warn!("Cairo text rendering failed: {err}");
        }
        self.ctx.new_path();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::RED;

    #[test]
    fn line_join_round_trips_through_cairo() {
        let mut surface = CairoSurface::image(10, 10).unwrap();
        assert_eq!(surface.line_join(), LineJoin::Miter);
        surface.set_line_join(LineJoin::Bevel);
        assert_eq!(surface.line_join(), LineJoin::Bevel);
    }

    #[test]
    fn stroke_color_is_tracked() {
        let mut surface = CairoSurface::image(10, 10).unwrap();
        surface.set_stroke_color(RED);
        assert_eq!(surface.stroke_color(), RED);
        assert_eq!(surface.fill_color(), BLACK);
    }

    #[test]
    fn write_png_needs_an_image() {
        let image = cairo::ImageSurface::create(cairo::Format::ARgb32, 4, 4).unwrap();
        let surface = CairoSurface::new(cairo::Context::new(&image).unwrap());
        let dir = tempfile::tempdir().unwrap();
        assert!(surface.write_png(&dir.path().join("out.png")).is_err());
    }
}
