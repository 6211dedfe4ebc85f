//! Coordinate descriptors a vector can be built from
//!
//! [`Cartesian3`] is the canonical triple; [`Polar`] and [`Cylindrical`] are
//! typed forms of the polar-like and cylindrical-like inputs the parser
//! accepts.

pub mod angle;
pub mod cartesian;
pub mod cylindrical;
pub mod polar;

pub use angle::AngleUnit;
pub use cartesian::Cartesian3;
pub use cylindrical::Cylindrical;
pub use polar::Polar;

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_polar_and_cylindrical_agree_in_plane() {
        let polar = Polar::azimuth(PI / 3.0).with_magnitude(2.0).to_cartesian();
        let cylindrical = Cylindrical::new(2.0, PI / 3.0, 0.0).to_cartesian();

        assert!((polar.x - cylindrical.x).abs() < 1e-14);
        assert!((polar.y - cylindrical.y).abs() < 1e-14);
        assert!((polar.z - cylindrical.z).abs() < 1e-14);
    }

    #[test]
    fn test_degree_and_radian_descriptors_match() {
        let radians = Polar::spherical(PI / 6.0, PI / 3.0).to_cartesian();
        let degrees = Polar::spherical(30.0, 60.0)
            .with_unit(AngleUnit::Degrees)
            .to_cartesian();

        for (r, d) in radians.to_array().into_iter().zip(degrees.to_array()) {
            assert!((r - d).abs() < 1e-14);
        }
    }
}
