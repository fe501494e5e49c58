//! Rendering of shapes onto raster surfaces (Cairo-based).
//!
//! This module defines the drawing side of the crate:
//! - [`Surface`] / [`Backdrop`]: the primitive operations a drawing target offers
//! - [`Drawer`]: maps any [`Shape`](crate::geometry::Shape) to its stroke routine
//! - [`Frame`]: the ordered collection of shapes on a canvas
//! - [`CairoSurface`] and [`RecordingSurface`]: the two bundled targets

pub mod background;
pub mod cairo_surface;
pub mod color;
pub mod drawer;
pub mod frame;
pub mod recording;
pub mod surface;

// Re-export commonly used types at module level
pub use background::{BackgroundStyle, paint_background};
pub use cairo_surface::CairoSurface;
pub use color::Color;
pub use drawer::{Drawer, RasterTransform, StrokeStyle};
pub use frame::Frame;
pub use recording::{DrawCommand, RecordingSurface};
pub use surface::{Backdrop, LineJoin, StyleGuard, Surface};
