//! Angles and rotations of a [`Vector`]
//!
//! Rotations work in polar space: the current azimuth and elevation are read
//! off the vector, offset, and the result is rebuilt from a [`Polar`]
//! descriptor with the original magnitude. Every angle argument comes with
//! an [`AngleUnit`].

use super::Vector;
use crate::coordinates::{AngleUnit, Polar};
use crate::numeric;
use crate::parser::VectorInput;

impl Vector {
    /// Azimuth: angle of the XY projection from +X toward +Y
    ///
    /// ```rust
    /// use vecta::{vector, AngleUnit};
    ///
    /// assert_eq!(vector((0.0, 1.0)).get_phi(AngleUnit::Degrees), 90.0);
    /// ```
    pub fn get_phi(&self, unit: AngleUnit) -> f64 {
        unit.express(self.y.atan2(self.x))
    }

    /// Elevation: angle from +Z
    ///
    /// Undefined (NaN) for the zero vector.
    pub fn get_theta(&self, unit: AngleUnit) -> f64 {
        unit.express((self.z / self.magnitude()).acos())
    }

    /// Angle between the two vectors
    ///
    /// The angle is undefined when either vector has zero length; 0 is
    /// returned then.
    ///
    /// With `signed` set, the angle is negated when the Z component of
    /// `self × other` is negative, i.e. when `other` lies clockwise of `self`
    /// seen from +Z.
    ///
    /// ```rust
    /// use vecta::{vector, AngleUnit};
    ///
    /// let a = vector((1.0, 0.0));
    /// let b = vector((0.0, 1.0));
    /// assert_eq!(a.angle(b, true, AngleUnit::Degrees), 90.0);
    /// assert_eq!(b.angle(a, true, AngleUnit::Degrees), -90.0);
    /// ```
    pub fn angle(&self, other: impl Into<VectorInput>, signed: bool, unit: AngleUnit) -> f64 {
        let other = Vector::new(other);
        let lengths = self.magnitude() * other.magnitude();
        if lengths == 0.0 {
            return 0.0;
        }
        let cosine = numeric::clamp(self.dot(other) / lengths, -1.0, 1.0);
        let angle = unit.express(cosine.acos());
        if signed && self.cross(other).z() < 0.0 {
            -angle
        } else {
            angle
        }
    }

    /// Rotates about the Z axis
    pub fn rotate(&self, angle: f64, unit: AngleUnit) -> Vector {
        self.rotate3d(angle, 0.0, unit)
    }

    /// Rotates about the Z axis in place
    pub fn rotate_self(&mut self, angle: f64, unit: AngleUnit) -> &mut Self {
        self.rotate3d_self(angle, 0.0, unit)
    }

    /// Offsets both the azimuth and the elevation
    ///
    /// ```rust
    /// use vecta::{vector, AngleUnit};
    /// use vecta::coordinates::Polar;
    ///
    /// let v = vector(Polar::spherical(0.0, 0.0).with_unit(AngleUnit::Degrees));
    /// let r = v.rotate3d(60.0, 30.0, AngleUnit::Degrees);
    /// assert!((r.get_phi(AngleUnit::Degrees) - 60.0).abs() < 1e-9);
    /// assert!((r.get_theta(AngleUnit::Degrees) - 30.0).abs() < 1e-9);
    /// ```
    pub fn rotate3d(&self, phi: f64, theta: f64, unit: AngleUnit) -> Vector {
        let polar = Polar::spherical(self.get_phi(unit) + phi, self.get_theta(unit) + theta)
            .with_magnitude(self.magnitude())
            .with_unit(unit);
        Vector::new(polar)
    }

    /// Offsets both angles in place
    pub fn rotate3d_self(&mut self, phi: f64, theta: f64, unit: AngleUnit) -> &mut Self {
        let rotated = self.rotate3d(phi, theta, unit).components();
        self.assign(rotated)
    }

    /// Same length and elevation, new azimuth
    pub fn set_phi(&self, value: f64, unit: AngleUnit) -> Vector {
        let polar = Polar::spherical(value, self.get_theta(unit))
            .with_magnitude(self.magnitude())
            .with_unit(unit);
        Vector::new(polar)
    }

    /// Replaces the azimuth in place
    pub fn set_phi_self(&mut self, value: f64, unit: AngleUnit) -> &mut Self {
        let updated = self.set_phi(value, unit).components();
        self.assign(updated)
    }

    /// Same length and azimuth, new elevation
    pub fn set_theta(&self, value: f64, unit: AngleUnit) -> Vector {
        let polar = Polar::spherical(self.get_phi(unit), value)
            .with_magnitude(self.magnitude())
            .with_unit(unit);
        Vector::new(polar)
    }

    /// Replaces the elevation in place
    pub fn set_theta_self(&mut self, value: f64, unit: AngleUnit) -> &mut Self {
        let updated = self.set_theta(value, unit).components();
        self.assign(updated)
    }
}

#[cfg(test)]
mod tests {
    use crate::coordinates::{AngleUnit, Polar};
    use crate::vector::{vector, Vector};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f64::consts::PI;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_angle_getters() {
        let v = vector(Polar::spherical(PI / 3.0, PI / 4.0));
        assert_abs_diff_eq!(v.get_phi(AngleUnit::Radians), PI / 3.0, epsilon = EPS);
        assert_abs_diff_eq!(v.get_theta(AngleUnit::Radians), PI / 4.0, epsilon = EPS);
        assert_abs_diff_eq!(v.get_phi(AngleUnit::Degrees), 60.0, epsilon = EPS);
        assert_abs_diff_eq!(v.get_theta(AngleUnit::Degrees), 45.0, epsilon = EPS);
    }

    #[test]
    fn test_theta_of_zero_vector_is_nan() {
        assert!(Vector::zero().get_theta(AngleUnit::Radians).is_nan());
    }

    #[test]
    fn test_unsigned_angle() {
        let a = vector((1.0, 0.0));
        let b = vector((0.0, 1.0));
        assert_abs_diff_eq!(a.angle(b, false, AngleUnit::Radians), PI / 2.0, epsilon = EPS);
        assert_abs_diff_eq!(b.angle(a, false, AngleUnit::Radians), PI / 2.0, epsilon = EPS);
        assert_abs_diff_eq!(
            a.angle((-1.0, 0.0), false, AngleUnit::Degrees),
            180.0,
            epsilon = EPS
        );
    }

    #[test]
    fn test_signed_angle_sign_follows_cross_product() {
        let a = vector((1.0, 0.0));
        let b = vector((1.0, -1.0));
        assert_abs_diff_eq!(a.angle(b, true, AngleUnit::Degrees), -45.0, epsilon = EPS);
        assert_abs_diff_eq!(b.angle(a, true, AngleUnit::Degrees), 45.0, epsilon = EPS);

        // Parallel vectors have a zero cross product and count as positive
        assert_eq!(a.angle(a, true, AngleUnit::Degrees), 0.0);
        assert_eq!(a.angle((-3.0, 0.0), true, AngleUnit::Degrees), 180.0);
    }

    #[test]
    fn test_angle_with_zero_vector() {
        let a = vector((1.0, 2.0, 3.0));
        assert_eq!(a.angle(Vector::zero(), false, AngleUnit::Radians), 0.0);
        assert_eq!(Vector::zero().angle(a, true, AngleUnit::Degrees), 0.0);
    }

    #[test]
    fn test_angle_cosine_is_clamped() {
        // dot / (|a||b|) can land just above 1 for parallel vectors
        let a = vector((0.1, 0.2, 0.3));
        let b = a.scale(3.0, false);
        assert!(!a.angle(b, false, AngleUnit::Radians).is_nan());
    }

    #[test]
    fn test_rotate_in_plane() {
        let v = vector((1.0, 0.0)).rotate(90.0, AngleUnit::Degrees);
        assert_eq!(v.to_array(), [0.0, 1.0, 0.0]);

        let mut w = vector((2.0, 0.0));
        w.rotate_self(PI, AngleUnit::Radians);
        assert_eq!(w.to_array(), [-2.0, 0.0, 0.0]);
    }

    #[test]
    fn test_rotate_keeps_magnitude() {
        let v = vector((3.0, 4.0, 12.0));
        let r = v.rotate3d(0.3, -0.2, AngleUnit::Radians);
        assert_abs_diff_eq!(r.magnitude(), 13.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rotate3d_chain_radians() {
        let v = vector(Polar::spherical(PI / 3.0, PI / 3.0))
            .rotate3d(PI / 3.0, PI / 3.0, AngleUnit::Radians)
            .rotate3d(-PI / 2.0, -PI / 2.0, AngleUnit::Radians);
        assert_abs_diff_eq!(v.get_phi(AngleUnit::Radians), PI / 6.0, epsilon = EPS);
        assert_abs_diff_eq!(v.get_theta(AngleUnit::Radians), PI / 6.0, epsilon = EPS);
    }

    #[test]
    fn test_rotate3d_self_chain_degrees() {
        let mut v = vector(Polar::spherical(0.0, 0.0).with_unit(AngleUnit::Degrees));
        v.rotate3d_self(60.0, 30.0, AngleUnit::Degrees)
            .rotate3d_self(30.0, 15.0, AngleUnit::Degrees)
            .rotate3d_self(-45.0, -30.0, AngleUnit::Degrees);
        assert_abs_diff_eq!(v.get_phi(AngleUnit::Degrees), 45.0, epsilon = EPS);
        assert_abs_diff_eq!(v.get_theta(AngleUnit::Degrees), 15.0, epsilon = EPS);
    }

    #[test]
    fn test_set_phi_and_theta() {
        let v = vector((2.0, 0.0));
        let turned = v.set_phi(90.0, AngleUnit::Degrees);
        assert_eq!(turned.to_array(), [0.0, 2.0, 0.0]);

        let raised = v.set_theta(0.0, AngleUnit::Radians);
        assert_eq!(raised.to_array(), [0.0, 0.0, 2.0]);

        let mut w = v;
        w.set_phi_self(PI, AngleUnit::Radians).set_theta_self(PI, AngleUnit::Radians);
        assert_abs_diff_eq!(w.z(), -2.0, epsilon = EPS);
        assert_abs_diff_eq!(w.magnitude(), 2.0, epsilon = EPS);
    }

    #[test]
    fn test_rotating_huge_vectors_keeps_them() {
        let v = vector((1e300, 0.0, 0.0));
        let r = v.rotate(90.0, AngleUnit::Degrees);
        assert!(r.valid());
        assert_relative_eq!(r.y(), 1e300, max_relative = 1e-12);
        assert_relative_eq!(r.magnitude(), 1e300, max_relative = 1e-12);

        let raised = v.set_theta(0.0, AngleUnit::Radians);
        assert!(raised.valid());
        assert_relative_eq!(raised.z(), 1e300, max_relative = 1e-12);

        let mut w = v;
        w.set_phi_self(PI, AngleUnit::Radians);
        assert_relative_eq!(w.x(), -1e300, max_relative = 1e-12);
    }
}
