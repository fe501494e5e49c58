//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::{BackgroundStyle, LineJoin, StrokeStyle};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canvas size and background settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 50 - 8192)
    #[serde(default = "default_width")]
    pub width: u32,

    /// Canvas height in pixels (valid range: 50 - 8192)
    #[serde(default = "default_height")]
    pub height: u32,

    /// Background fill behind the axes
    #[serde(default = "default_background")]
    pub background: ColorSpec,

    /// Color of the x and y axes
    #[serde(default = "default_axis_color")]
    pub axis_color: ColorSpec,

    /// Color of the "X", "Y" and "0" legend
    #[serde(default = "default_legend_color")]
    pub legend_color: ColorSpec,

    /// Legend font size in points (valid range: 6.0 - 72.0)
    #[serde(default = "default_legend_font_size")]
    pub legend_font_size: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: default_background(),
            axis_color: default_axis_color(),
            legend_color: default_legend_color(),
            legend_font_size: default_legend_font_size(),
        }
    }
}

impl CanvasConfig {
    pub fn background_style(&self) -> BackgroundStyle {
        BackgroundStyle {
            fill: self.background.to_color(),
            axis: self.axis_color.to_color(),
            legend: self.legend_color.to_color(),
            legend_size: self.legend_font_size,
        }
    }
}

/// Outline settings shared by every shape.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct StrokeConfig {
    /// Outline color
    #[serde(default = "default_stroke_color")]
    pub color: ColorSpec,

    /// Corner style where outline segments meet (miter, round, bevel)
    #[serde(default)]
    pub line_join: LineJoin,

    /// Outline thickness in pixels (valid range: 0.1 - 20.0)
    #[serde(default = "default_line_width")]
    pub line_width: f64,
}

impl Default for StrokeConfig {
    fn default() -> Self {
        Self {
            color: default_stroke_color(),
            line_join: LineJoin::default(),
            line_width: default_line_width(),
        }
    }
}

impl StrokeConfig {
    pub fn style(&self) -> StrokeStyle {
        StrokeStyle {
            color: self.color.to_color(),
            line_join: self.line_join,
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_width() -> u32 {
    600
}

fn default_height() -> u32 {
    400
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_axis_color() -> ColorSpec {
    ColorSpec::Rgb([204, 204, 204])
}

fn default_legend_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_legend_font_size() -> f64 {
    16.0
}

fn default_stroke_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_line_width() -> f64 {
    1.0
}
