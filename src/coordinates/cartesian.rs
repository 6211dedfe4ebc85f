//! # Cartesian Coordinate Module
//!
//! [`Cartesian3`] is the canonical triple every vector input is reduced to.
//! Whatever shape the caller used (scalar arguments, a tuple, a polar or
//! cylindrical descriptor) the parser ends with one of these, and
//! [`Vector`](crate::Vector) stores exactly these three numbers.
//!
//! ## Coordinate System Convention
//!
//! Standard right-handed axes:
//! - **X-axis**: `phi = 0`, `theta = π/2`
//! - **Y-axis**: `phi = π/2`, `theta = π/2`
//! - **Z-axis**: `theta = 0`
//!
//! ## Internal Storage
//!
//! Components are stored as three `f64` values with no normalization or
//! rounding. Missing components are represented as `0.0`, never as NaN.
//!
//! ## Examples
//!
//! ```rust
//! use vecta::coordinates::cartesian::Cartesian3;
//!
//! let x_axis = Cartesian3::new(1.0, 0.0, 0.0);
//! let y_axis = Cartesian3::new(0.0, 1.0, 0.0);
//!
//! assert_eq!(x_axis.dot(&y_axis), 0.0);
//! assert_eq!(x_axis.cross(&y_axis), Cartesian3::new(0.0, 0.0, 1.0));
//! ```

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::numeric::{self, validate_numbers};

/// Three-dimensional Cartesian triple
///
/// Serializes as a plain `[x, y, z]` array.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Cartesian3 {
    /// X-component
    pub x: f64,
    /// Y-component
    pub y: f64,
    /// Z-component
    pub z: f64,
}

impl Cartesian3 {
    /// The origin
    pub const ZERO: Cartesian3 = Cartesian3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Creates a new Cartesian triple
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vecta::coordinates::cartesian::Cartesian3;
    ///
    /// let coord = Cartesian3::new(1.0, 2.0, 3.0);
    /// assert_eq!(coord.x, 1.0);
    /// assert_eq!(coord.y, 2.0);
    /// assert_eq!(coord.z, 3.0);
    /// ```
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Cartesian3 { x, y, z }
    }

    /// Returns the components packed into an array
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Returns true when no component is NaN or infinite
    pub fn is_finite(&self) -> bool {
        validate_numbers(&self.to_array())
    }

    /// Calculates the magnitude (length) of the vector
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vecta::coordinates::cartesian::Cartesian3;
    ///
    /// assert_eq!(Cartesian3::new(3.0, 4.0, 12.0).magnitude(), 13.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        let squared = self.magnitude_sq();
        if squared.is_finite() {
            squared.sqrt()
        } else {
            // Squares overflow well before the length itself does
            self.x.hypot(self.y).hypot(self.z)
        }
    }

    /// Squared magnitude, cheaper when only comparing lengths
    pub fn magnitude_sq(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Calculates the dot product with another triple
    ///
    /// `dot = x₁*x₂ + y₁*y₂ + z₁*z₂`
    pub fn dot(&self, other: &Cartesian3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Calculates the right-handed cross product with another triple
    ///
    /// ```text
    /// cross = (y₁*z₂ - z₁*y₂, z₁*x₂ - x₁*z₂, x₁*y₂ - y₁*x₂)
    /// ```
    pub fn cross(&self, other: &Cartesian3) -> Cartesian3 {
        Cartesian3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Applies `f` to every component
    pub fn map<F: Fn(f64) -> f64>(&self, f: F) -> Cartesian3 {
        Cartesian3 {
            x: f(self.x),
            y: f(self.y),
            z: f(self.z),
        }
    }

    /// Rounds every component to `places` decimal digits
    pub fn rounded(&self, places: i32) -> Cartesian3 {
        self.map(|v| numeric::round(v, places))
    }

    /// Converts to nalgebra Vector3 for linear algebra operations
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vecta::coordinates::cartesian::Cartesian3;
    /// use nalgebra::Vector3;
    ///
    /// let vec: Vector3<f64> = Cartesian3::new(1.0, 2.0, 3.0).to_vector3();
    /// assert_eq!(vec.y, 2.0);
    /// ```
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra Vector3
    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        Cartesian3 {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }
}

impl From<[f64; 3]> for Cartesian3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Cartesian3 { x, y, z }
    }
}

impl From<Cartesian3> for [f64; 3] {
    fn from(coord: Cartesian3) -> Self {
        coord.to_array()
    }
}
