//! # Cylindrical Descriptor
//!
//! A vector given by its radial distance `p` from the Z axis, its azimuth
//! `phi` and its height `z`. Only `phi` is an angle; `z` is never converted.

use super::angle::AngleUnit;
use super::cartesian::Cartesian3;

/// Cylindrical vector descriptor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylindrical {
    /// Radial distance from the Z axis
    pub p: f64,
    /// Azimuthal angle
    pub phi: f64,
    /// Height along the Z axis
    pub z: f64,
    /// Whether `phi` is in degrees
    pub degrees: bool,
}

impl Cylindrical {
    /// Creates a descriptor with `phi` in radians
    pub fn new(p: f64, phi: f64, z: f64) -> Self {
        Cylindrical {
            p,
            phi,
            z,
            degrees: false,
        }
    }

    /// Marks `phi` as degrees or radians
    pub fn with_unit(mut self, unit: AngleUnit) -> Self {
        self.degrees = unit.is_degrees();
        self
    }

    /// Unit of `phi`
    pub fn unit(&self) -> AngleUnit {
        AngleUnit::from_degrees_flag(self.degrees)
    }

    /// Converts to Cartesian components without any rounding
    ///
    /// `x = p * cos(phi)`, `y = p * sin(phi)`, `z = z`
    pub fn to_cartesian(&self) -> Cartesian3 {
        let angle = self.unit().to_radians(self.phi);
        Cartesian3::new(self.p * angle.cos(), self.p * angle.sin(), self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{PI, SQRT_2};

    #[test]
    fn test_diagonal() {
        let coord = Cylindrical::new(SQRT_2, PI / 4.0, 5.0).to_cartesian();
        assert_abs_diff_eq!(coord.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(coord.y, 1.0, epsilon = 1e-12);
        assert_eq!(coord.z, 5.0);
    }

    #[test]
    fn test_height_is_not_angle_scaled() {
        let coord = Cylindrical::new(2.0, 180.0, 45.0)
            .with_unit(AngleUnit::Degrees)
            .to_cartesian();
        assert_abs_diff_eq!(coord.x, -2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(coord.y, 0.0, epsilon = 1e-12);
        assert_eq!(coord.z, 45.0);
    }
}
