//! Typed shape construction requests.
//!
//! A request carries the numeric parameters for one shape kind, already
//! read as numbers. Building it is where measurements get validated.

use std::str::FromStr;

use crate::geometry::{Circle, Point, Rectangle, Shape, ShapeError, ShapeKind, Square, Triangle};

/// Parameters for constructing one shape.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeRequest {
    Circle {
        center_x: f64,
        center_y: f64,
        radius: f64,
    },
    Rectangle {
        origin_x: f64,
        origin_y: f64,
        length: f64,
        width: f64,
    },
    Square {
        origin_x: f64,
        origin_y: f64,
        side: f64,
    },
    Triangle {
        p1x: f64,
        p1y: f64,
        p2x: f64,
        p2y: f64,
        p3x: f64,
        p3y: f64,
    },
}

impl ShapeRequest {
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeRequest::Circle { .. } => ShapeKind::Circle,
            ShapeRequest::Rectangle { .. } => ShapeKind::Rectangle,
            ShapeRequest::Square { .. } => ShapeKind::Square,
            ShapeRequest::Triangle { .. } => ShapeKind::Triangle,
        }
    }

    /// Builds a request from positional parameters, in the order given by
    /// [`ShapeKind::parameter_names`].
    pub fn from_params(kind: ShapeKind, params: &[f64]) -> Result<Self, ShapeError> {
        let request = match (kind, params) {
            (ShapeKind::Circle, &[center_x, center_y, radius]) => ShapeRequest::Circle {
                center_x,
                center_y,
                radius,
            },
            (ShapeKind::Rectangle, &[origin_x, origin_y, length, width]) => {
                ShapeRequest::Rectangle {
                    origin_x,
                    origin_y,
                    length,
                    width,
                }
            }
            (ShapeKind::Square, &[origin_x, origin_y, side]) => ShapeRequest::Square {
                origin_x,
                origin_y,
                side,
            },
            (ShapeKind::Triangle, &[p1x, p1y, p2x, p2y, p3x, p3y]) => ShapeRequest::Triangle {
                p1x,
                p1y,
                p2x,
                p2y,
                p3x,
                p3y,
            },
            _ => {
                return Err(ShapeError::ParameterCount {
                    kind: kind.label(),
                    expected: kind.parameter_names().len(),
                    found: params.len(),
                });
            }
        };
        Ok(request)
    }

    /// Constructs the shape, failing with `InvalidMeasurement` on negative lengths.
    pub fn build(&self) -> Result<Shape, ShapeError> {
        let shape: Shape = match *self {
            ShapeRequest::Circle {
                center_x,
                center_y,
                radius,
            } => Circle::new(Point::new(center_x, center_y), radius)?.into(),
            ShapeRequest::Rectangle {
                origin_x,
                origin_y,
                length,
                width,
            } => Rectangle::new(Point::new(origin_x, origin_y), length, width)?.into(),
            ShapeRequest::Square {
                origin_x,
                origin_y,
                side,
            } => Square::new(Point::new(origin_x, origin_y), side)?.into(),
            ShapeRequest::Triangle {
                p1x,
                p1y,
                p2x,
                p2y,
                p3x,
                p3y,
            } => Triangle::new(
                Point::new(p1x, p1y),
                Point::new(p2x, p2y),
                Point::new(p3x, p3y),
            )
            .into(),
        };
        Ok(shape)
    }
}

impl FromStr for ShapeRequest {
    type Err = ShapeError;

    /// Parses `kind:v1,v2,...`, e.g. `circle:0,0,10`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, values) = s.split_once(':').unwrap_or((s, ""));
        let kind: ShapeKind = kind.parse()?;

        // An empty field is an error, not a skipped one, so values never shift
        let values = values.trim();
        let params = if values.is_empty() {
            Vec::new()
        } else {
            values
                .split(',')
                .map(str::trim)
                .map(|v| {
                    v.parse::<f64>()
                        .map_err(|_| ShapeError::NotANumber(v.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?
        };

        Self::from_params(kind, &params)
    }
}
