use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};
use log::{error, info};

use shapecanvas::draw::{CairoSurface, RecordingSurface};
use shapecanvas::{Canvas, Config, HasPerimeter, ShapeRequest};

#[derive(Parser, Debug)]
#[command(name = "shapecanvas")]
#[command(
    version,
    about = "Draw circles, rectangles, squares and triangles on an origin-centered canvas"
)]
struct Cli {
    /// Shape to draw, as KIND:PARAMS (repeatable). Kinds and parameters:
    /// circle:cx,cy,radius  rectangle:x,y,length,width  square:x,y,side
    /// triangle:x1,y1,x2,y2,x3,y3
    #[arg(
        long = "shape",
        short = 's',
        value_name = "KIND:PARAMS",
        allow_hyphen_values = true
    )]
    shapes: Vec<String>,

    /// Write the rendered canvas to this PNG file
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print the primitive draw calls of the final redraw
    #[arg(long, action = ArgAction::SetTrue)]
    trace: bool,

    /// Read settings from this file instead of ~/.config/shapecanvas/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Canvas width in pixels (overrides the config file)
    #[arg(long, value_name = "PIXELS")]
    width: Option<u32>,

    /// Canvas height in pixels (overrides the config file)
    #[arg(long, value_name = "PIXELS")]
    height: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(width) = cli.width {
        config.canvas.width = width;
    }
    if let Some(height) = cli.height {
        config.canvas.height = height;
    }
    config.validate_and_clamp();

    if cli.shapes.is_empty() {
        println!("No shapes given; try: shapecanvas --shape circle:0,0,10 --output canvas.png");
    }

    let width = f64::from(config.canvas.width);
    let height = f64::from(config.canvas.height);
    let stroke = config.stroke.style();
    let background = config.canvas.background_style();

    // The listing and the trace come from a recording canvas; the PNG is
    // rendered afterwards from the shapes it accepted.
    let mut listing = Canvas::new(RecordingSurface::new(), width, height, stroke, background);
    let mut failures = 0usize;

    for raw in &cli.shapes {
        let submitted = raw
            .parse::<ShapeRequest>()
            .and_then(|request| listing.submit(&request).cloned());
        // Only the final redraw is ever printed
        listing.surface_mut().clear();

        match submitted {
            Ok(shape) => {
                let number = listing.shapes().len();
                println!("{number}. {shape} - perimeter: {:.2}", shape.perimeter());
            }
            Err(err) => {
                error!("Skipping shape '{raw}': {err}");
                failures += 1;
            }
        }
    }

    if cli.trace {
        listing.redraw();
        for command in listing.surface().commands() {
            println!("{command}");
        }
    }

    if let Some(path) = &cli.output {
        let surface = CairoSurface::image(
            i32::try_from(config.canvas.width).context("Canvas width too large")?,
            i32::try_from(config.canvas.height).context("Canvas height too large")?,
        )?
        .with_line_width(config.stroke.line_width);

        let mut png = Canvas::new(surface, width, height, stroke, background);
        png.extend(listing.shapes().iter().cloned());
        png.into_surface().write_png(path)?;
        info!("Rendered {} shapes", listing.shapes().len());
    }

    if failures > 0 {
        return Err(anyhow::anyhow!("{failures} shape(s) could not be drawn"));
    }

    Ok(())
}
