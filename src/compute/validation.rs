//! Validation for user-supplied coordinates.
//!
//! The index accepts any `f64` pair it is given. Input layers (such as the
//! interactive shell) call these helpers before registering a record.

use crate::error::{Result, RosterError};
use geo::Point;

/// Validates that both components of a coordinate are finite.
///
/// # Examples
///
/// ```
/// use kdroster::compute::validation::validate_coordinate;
///
/// assert!(validate_coordinate(-12.04, -77.03).is_ok());
/// assert!(validate_coordinate(f64::NAN, 0.0).is_err());
/// assert!(validate_coordinate(0.0, f64::INFINITY).is_err());
/// ```
pub fn validate_coordinate(x: f64, y: f64) -> Result<Point<f64>> {
    if !x.is_finite() {
        return Err(RosterError::InvalidInput(format!(
            "x coordinate must be finite, got: {}",
            x
        )));
    }

    if !y.is_finite() {
        return Err(RosterError::InvalidInput(format!(
            "y coordinate must be finite, got: {}",
            y
        )));
    }

    Ok(Point::new(x, y))
}

/// Parses a coordinate component from user text and validates it.
///
/// Surrounding whitespace is ignored. `field` names the value in the error.
pub fn parse_coordinate(field: &str, input: &str) -> Result<f64> {
    let value: f64 = input.trim().parse().map_err(|_| {
        RosterError::InvalidInput(format!("{} must be a number, got: {:?}", field, input.trim()))
    })?;

    if !value.is_finite() {
        return Err(RosterError::InvalidInput(format!(
            "{} must be finite, got: {}",
            field, value
        )));
    }

    Ok(value)
}
