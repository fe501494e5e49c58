//! Plane shapes measured and drawn onto an origin-centered raster canvas.
//!
//! The library is split the way the binary uses it:
//! - [`geometry`]: points, the shape types and their perimeters
//! - [`draw`]: surfaces, the shape drawer and the shape collection
//! - [`request`]: typed construction requests, as read from the command line
//! - [`canvas`]: a drawing session tying a collection to a surface
//! - [`config`]: the TOML configuration file

pub mod canvas;
pub mod config;
pub mod draw;
pub mod geometry;
pub mod request;

pub use canvas::Canvas;
pub use config::Config;
pub use geometry::{HasPerimeter, Point, Shape, ShapeError, ShapeKind};
pub use request::ShapeRequest;
