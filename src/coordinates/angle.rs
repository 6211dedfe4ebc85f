//! # Angle Unit Module
//!
//! Vector angles (azimuth `phi`, elevation `theta`, the angle between two
//! vectors) are computed in radians internally. Every public operation that
//! reads or writes an angle takes an [`AngleUnit`] saying which unit the
//! caller works in, so values supplied in degrees are converted exactly once
//! on the way in and once on the way out.
//!
//! ## Examples
//!
//! ```rust
//! use vecta::coordinates::angle::AngleUnit;
//!
//! let radians = AngleUnit::Degrees.to_radians(180.0);
//! assert!((radians - std::f64::consts::PI).abs() < 1e-15);
//!
//! // Radians pass through untouched
//! assert_eq!(AngleUnit::Radians.to_radians(1.25), 1.25);
//! ```

use crate::constants::{DEG2RAD, RAD2DEG};

/// Unit an angle value is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AngleUnit {
    /// Angle in radians
    #[default]
    Radians,
    /// Angle in degrees
    Degrees,
}

impl AngleUnit {
    /// Picks the unit from a "degrees" flag
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vecta::coordinates::angle::AngleUnit;
    ///
    /// assert_eq!(AngleUnit::from_degrees_flag(true), AngleUnit::Degrees);
    /// assert_eq!(AngleUnit::from_degrees_flag(false), AngleUnit::Radians);
    /// ```
    pub fn from_degrees_flag(degrees: bool) -> Self {
        if degrees {
            AngleUnit::Degrees
        } else {
            AngleUnit::Radians
        }
    }

    /// Returns true for [`AngleUnit::Degrees`]
    pub fn is_degrees(self) -> bool {
        matches!(self, AngleUnit::Degrees)
    }

    /// Converts a value expressed in this unit into radians
    ///
    /// Conversion from degrees uses `value * (π / 180)`.
    pub fn to_radians(self, value: f64) -> f64 {
        match self {
            AngleUnit::Degrees => value * DEG2RAD,
            AngleUnit::Radians => value,
        }
    }

    /// Converts a value in radians into this unit
    ///
    /// Conversion to degrees uses `radians * (180 / π)`.
    pub fn express(self, radians: f64) -> f64 {
        match self {
            AngleUnit::Degrees => radians * RAD2DEG,
            AngleUnit::Radians => radians,
        }
    }
}
