//! A surface that records the calls made on it instead of rasterizing.

use std::fmt;

use super::color::{BLACK, Color};
use super::surface::{Backdrop, LineJoin, Surface};

/// One primitive call issued against a surface.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    BeginPath,
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    ClosePath,
    Stroke,
    StrokeRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Arc {
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    SetStrokeColor(Color),
    SetLineJoin(LineJoin),
    SetFillColor(Color),
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    FillText {
        text: String,
        x: f64,
        y: f64,
        size: f64,
    },
}

impl DrawCommand {
    /// Whether this command puts ink on the surface.
    pub fn is_paint(&self) -> bool {
        matches!(
            self,
            DrawCommand::Stroke
                | DrawCommand::StrokeRect { .. }
                | DrawCommand::FillRect { .. }
                | DrawCommand::FillText { .. }
        )
    }
}

impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawCommand::BeginPath => write!(f, "begin_path"),
            DrawCommand::MoveTo { x, y } => write!(f, "move_to {x} {y}"),
            DrawCommand::LineTo { x, y } => write!(f, "line_to {x} {y}"),
            DrawCommand::ClosePath => write!(f, "close_path"),
            DrawCommand::Stroke => write!(f, "stroke"),
            DrawCommand::StrokeRect {
                x,
                y,
                width,
                height,
            } => write!(f, "stroke_rect {x} {y} {width} {height}"),
            DrawCommand::Arc {
                x,
                y,
                radius,
                start_angle,
                end_angle,
            } => write!(f, "arc {x} {y} {radius} {start_angle:.4} {end_angle:.4}"),
            DrawCommand::SetStrokeColor(color) => write!(f, "stroke_color {color}"),
            DrawCommand::SetLineJoin(join) => write!(f, "line_join {join:?}"),
            DrawCommand::SetFillColor(color) => write!(f, "fill_color {color}"),
            DrawCommand::FillRect {
                x,
                y,
                width,
                height,
            } => write!(f, "fill_rect {x} {y} {width} {height}"),
            DrawCommand::FillText { text, x, y, size } => {
                write!(f, "fill_text {text:?} {x} {y} {size}")
            }
        }
    }
}

/// Surface that keeps an ordered log of [`DrawCommand`]s.
///
/// Paint state starts out as black strokes and fills with mitered joins.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    stroke_color: Color,
    fill_color: Color,
    line_join: LineJoin,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            stroke_color: BLACK,
            fill_color: BLACK,
            line_join: LineJoin::Miter,
        }
    }

    /// Every command recorded so far, oldest first.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Removes and returns the recorded commands, keeping the paint state.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Forgets recorded commands, keeping the paint state.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Surface for RecordingSurface {
    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::LineTo { x, y });
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::StrokeRect {
            x,
            y,
            width,
            height,
        });
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) {
        self.commands.push(DrawCommand::Arc {
            x,
            y,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn stroke_color(&self) -> Color {
        self.stroke_color
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
        self.commands.push(DrawCommand::SetStrokeColor(color));
    }

    fn line_join(&self) -> LineJoin {
        self.line_join
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.line_join = join;
        self.commands.push(DrawCommand::SetLineJoin(join));
    }
}

impl Backdrop for RecordingSurface {
    fn fill_color(&self) -> Color {
        self.fill_color
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
        self.commands.push(DrawCommand::SetFillColor(color));
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
        });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, size: f64) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            x,
            y,
            size,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::RED;

    #[test]
    fn records_in_call_order() {
        let mut surface = RecordingSurface::new();
        surface.begin_path();
        surface.move_to(1.0, 2.0);
        surface.line_to(3.0, 4.0);
        surface.stroke();
        assert_eq!(
            surface.commands(),
            &[
                DrawCommand::BeginPath,
                DrawCommand::MoveTo { x: 1.0, y: 2.0 },
                DrawCommand::LineTo { x: 3.0, y: 4.0 },
                DrawCommand::Stroke,
            ]
        );
    }

    #[test]
    fn take_keeps_paint_state() {
        let mut surface = RecordingSurface::new();
        surface.set_stroke_color(RED);
        assert_eq!(surface.take_commands().len(), 1);
        assert!(surface.commands().is_empty());
        assert_eq!(surface.stroke_color(), RED);
    }

    #[test]
    fn trace_lines_are_readable() {
        let rect = DrawCommand::StrokeRect {
            x: 100.0,
            y: 100.0,
            width: 20.0,
            height: -20.0,
        };
        assert_eq!(rect.to_string(), "stroke_rect 100 100 20 -20");
        assert!(rect.is_paint());
        assert!(!DrawCommand::BeginPath.is_paint());
    }
}
