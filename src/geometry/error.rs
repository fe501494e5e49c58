//! Errors raised while constructing shapes.

use thiserror::Error;

/// Failure to build a shape from a set of measurements.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ShapeError {
    /// A length-like measurement (radius, length, width, side) was negative, infinite or NaN.
    #[error("invalid measurement: {name} = {value} (must be a finite non-negative number)")]
    InvalidMeasurement {
        /// Name of the offending measurement
        name: &'static str,
        /// Value that was rejected
        value: f64,
    },

    /// A construction request carried the wrong number of parameters for its kind.
    #[error("{kind} expects {expected} parameters, got {found}")]
    ParameterCount {
        kind: &'static str,
        expected: usize,
        found: usize,
    },

    /// A construction request named a shape kind that does not exist.
    #[error("unknown shape kind '{0}'")]
    UnknownKind(String),

    /// A parameter could not be read as a number.
    #[error("parameter '{0}' is not a number")]
    NotANumber(String),
}

/// Returns `value` unchanged when it is a usable length, or `InvalidMeasurement`.
pub(crate) fn non_negative(name: &'static str, value: f64) -> Result<f64, ShapeError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ShapeError::InvalidMeasurement { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_accepted() {
        assert_eq!(non_negative("radius", 0.0), Ok(0.0));
    }

    #[test]
    fn negative_and_nan_are_rejected() {
        assert!(matches!(
            non_negative("side", -1.0),
            Err(ShapeError::InvalidMeasurement { name: "side", .. })
        ));
        assert!(non_negative("width", f64::NAN).is_err());
    }

    #[test]
    fn infinite_values_are_rejected() {
        assert!(matches!(
            non_negative("radius", f64::INFINITY),
            Err(ShapeError::InvalidMeasurement { name: "radius", .. })
        ));
        assert!(non_negative("length", f64::NEG_INFINITY).is_err());
        assert_eq!(non_negative("width", f64::MAX), Ok(f64::MAX));
    }

    #[test]
    fn messages_name_the_measurement() {
        let err = non_negative("length", -2.5).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid measurement: length = -2.5 (must be a finite non-negative number)"
        );
    }
}
