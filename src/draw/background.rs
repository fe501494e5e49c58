//! Canvas background: solid fill, both axes and their legend.

use super::color::{BLACK, Color, GREY, WHITE};
use super::surface::Backdrop;

/// Colors and legend size for the canvas background.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackgroundStyle {
    pub fill: Color,
    pub axis: Color,
    pub legend: Color,
    pub legend_size: f64,
}

impl Default for BackgroundStyle {
    fn default() -> Self {
        Self {
            fill: WHITE,
            axis: GREY,
            legend: BLACK,
            legend_size: 16.0,
        }
    }
}

/// Length of each arrowhead stroke at the positive end of an axis.
const ARROW_SIZE: f64 = 10.0;

/// Paints the background of a `width` x `height` canvas.
///
/// Fills the whole surface, strokes the x axis (left to right) and y axis
/// (bottom to top) through the canvas center with arrowheads on their
/// positive ends, then labels them "X", "Y" and the origin "0".
/// The surface's paint state is restored afterwards.
pub fn paint_background<B: Backdrop + ?Sized>(
    surface: &mut B,
    width: f64,
    height: f64,
    style: &BackgroundStyle,
) {
    let previous_fill = surface.fill_color();
    let previous_stroke = surface.stroke_color();
    let (mid_x, mid_y) = (width / 2.0, height / 2.0);

    surface.set_fill_color(style.fill);
    surface.fill_rect(0.0, 0.0, width, height);

    surface.set_stroke_color(style.axis);
    surface.begin_path();
    // x axis and its arrowhead
    surface.move_to(0.0, mid_y);
    surface.line_to(width, mid_y);
    surface.move_to(width - ARROW_SIZE, mid_y - ARROW_SIZE);
    surface.line_to(width, mid_y);
    surface.move_to(width - ARROW_SIZE, mid_y + ARROW_SIZE);
    surface.line_to(width, mid_y);
    // y axis and its arrowhead
    surface.move_to(mid_x, height);
    surface.line_to(mid_x, 0.0);
    surface.move_to(mid_x - ARROW_SIZE, 15.0);
    surface.line_to(mid_x, 0.0);
    surface.move_to(mid_x + ARROW_SIZE, 15.0);
    surface.line_to(mid_x, 0.0);
    surface.stroke();

    surface.set_fill_color(style.legend);
    surface.fill_text("X", width - 25.0, mid_y + 15.0, style.legend_size);
    surface.fill_text("Y", mid_x + 5.0, 25.0, style.legend_size);
    surface.fill_text("0", mid_x + 5.0, mid_y + 15.0, style.legend_size);

    surface.set_fill_color(previous_fill);
    surface.set_stroke_color(previous_stroke);
}
