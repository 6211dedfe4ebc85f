//! Random unit vectors

use rand::Rng;

use super::Vector;
use crate::constants::TAU;
use crate::coordinates::Polar;

impl Vector {
    /// Random unit vector in the XY plane, uniform in azimuth
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    /// use vecta::Vector;
    ///
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let v = Vector::random(&mut rng);
    /// assert_eq!(v.z(), 0.0);
    /// assert!((v.magnitude() - 1.0).abs() < 1e-9);
    /// ```
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Vector {
        Vector::new(Polar::azimuth(TAU * rng.gen::<f64>()))
    }

    /// Random unit vector uniformly distributed on the sphere
    ///
    /// Draws `z` uniformly in `[-1, 1)` and an azimuth uniformly in
    /// `[0, 2π)`, which gives a uniform density over the sphere surface.
    pub fn random3d<R: Rng + ?Sized>(rng: &mut R) -> Vector {
        let z = 2.0 * (rng.gen::<f64>() - 0.5);
        let phi = TAU * rng.gen::<f64>();
        let radius = (1.0 - z * z).sqrt();
        Vector::build(radius * phi.cos(), radius * phi.sin(), z)
    }
}
