//! # Polar (Spherical) Descriptor
//!
//! A vector given by its azimuth `phi` (angle in the XY plane from +X toward
//! +Y), its elevation `theta` (angle from +Z) and its `magnitude`.
//!
//! Every field is optional and falls back to a default:
//! - `phi`: `0`
//! - `theta`: `π/2` (or `90` in degrees), i.e. the XY plane
//! - `magnitude`: `1`
//!
//! Converted to parser input, a descriptor always carries `phi`, so even
//! `Polar::default()` is read as the polar `(1, 0, 0)`.
//!
//! ```rust
//! use vecta::coordinates::polar::Polar;
//!
//! let up = Polar::elevation(0.0).to_cartesian();
//! assert!((up.z - 1.0).abs() < 1e-15);
//! ```

use super::angle::AngleUnit;
use super::cartesian::Cartesian3;
use crate::constants::{DEFAULT_POLAR_MAGNITUDE, PLANAR_THETA, PLANAR_THETA_DEG};

/// Polar/spherical vector descriptor
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Polar {
    /// Azimuthal angle
    pub phi: Option<f64>,
    /// Elevation angle, measured from the Z axis
    pub theta: Option<f64>,
    /// Length of the vector
    pub magnitude: Option<f64>,
    /// Whether `phi` and `theta` are in degrees
    pub degrees: bool,
}

impl Polar {
    /// Planar vector with the given azimuth
    pub fn azimuth(phi: f64) -> Self {
        Polar {
            phi: Some(phi),
            ..Default::default()
        }
    }

    /// Vector with the given elevation and zero azimuth
    pub fn elevation(theta: f64) -> Self {
        Polar {
            theta: Some(theta),
            ..Default::default()
        }
    }

    /// Vector with both angles set
    pub fn spherical(phi: f64, theta: f64) -> Self {
        Polar {
            phi: Some(phi),
            theta: Some(theta),
            ..Default::default()
        }
    }

    /// Sets the magnitude
    pub fn with_magnitude(mut self, magnitude: f64) -> Self {
        self.magnitude = Some(magnitude);
        self
    }

    /// Marks the angles as degrees or radians
    pub fn with_unit(mut self, unit: AngleUnit) -> Self {
        self.degrees = unit.is_degrees();
        self
    }

    /// Unit of `phi` and `theta`
    pub fn unit(&self) -> AngleUnit {
        AngleUnit::from_degrees_flag(self.degrees)
    }

    /// Azimuth in radians, defaulted
    pub fn phi_radians(&self) -> f64 {
        self.unit().to_radians(self.phi.unwrap_or(0.0))
    }

    /// Elevation in radians, defaulted to the XY plane
    pub fn theta_radians(&self) -> f64 {
        let planar = if self.degrees {
            PLANAR_THETA_DEG
        } else {
            PLANAR_THETA
        };
        self.unit().to_radians(self.theta.unwrap_or(planar))
    }

    /// Converts to Cartesian components without any rounding
    ///
    /// - `x = m * sin(theta) * cos(phi)`
    /// - `y = m * sin(theta) * sin(phi)`
    /// - `z = m * cos(theta)`
    pub fn to_cartesian(&self) -> Cartesian3 {
        let magnitude = self.magnitude.unwrap_or(DEFAULT_POLAR_MAGNITUDE);
        let phi = self.phi_radians();
        let theta = self.theta_radians();
        let sin_theta = theta.sin();

        Cartesian3::new(
            magnitude * sin_theta * phi.cos(),
            magnitude * sin_theta * phi.sin(),
            magnitude * theta.cos(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_defaults_point_along_x() {
        let coord = Polar::default().to_cartesian();
        assert_abs_diff_eq!(coord.x, 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(coord.y, 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(coord.z, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_azimuth_in_plane() {
        let coord = Polar::azimuth(PI / 2.0).with_magnitude(10.0).to_cartesian();
        assert_abs_diff_eq!(coord.x, 0.0, epsilon = 1e-14);
        assert_abs_diff_eq!(coord.y, 10.0, epsilon = 1e-14);
        assert_abs_diff_eq!(coord.z, 0.0, epsilon = 1e-14);
    }

    #[test]
    fn test_degrees_default_theta() {
        let polar = Polar::azimuth(90.0).with_unit(AngleUnit::Degrees);
        assert_abs_diff_eq!(polar.theta_radians(), PI / 2.0, epsilon = 1e-15);

        let coord = polar.to_cartesian();
        assert_abs_diff_eq!(coord.y, 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_spherical() {
        let coord = Polar::spherical(PI / 4.0, PI / 4.0)
            .with_magnitude(2.0)
            .to_cartesian();
        assert_abs_diff_eq!(coord.x, 1.0, epsilon = 1e-14);
        assert_abs_diff_eq!(coord.y, 1.0, epsilon = 1e-14);
        assert_abs_diff_eq!(coord.z, 2.0f64.sqrt(), epsilon = 1e-14);
    }
}
