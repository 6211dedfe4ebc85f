//! # Vector Module
//!
//! [`Vector`] is a 2D/3D Euclidean vector built from any [`VectorInput`].
//!
//! ## Construction
//!
//! Every constructor and every operation that produces a new vector goes
//! through [`Vector::new`], which always runs the parser. The parse outcome
//! is kept as the `valid` flag:
//!
//! ```rust
//! use vecta::{vector, Vector};
//! use vecta::parser::Fields;
//!
//! assert!(vector((1.0, 2.0, 3.0)).valid());
//! assert!(!Vector::new(Fields::new().with("a", 4.0)).valid());
//! ```
//!
//! ## Immutable and mutating operations
//!
//! Operations come in two flavours. The plain form (`add`, `scale`, ...)
//! borrows the receiver and returns a new vector. The `_self` form
//! (`add_self`, `scale_self`, ...) rewrites the receiver's components and
//! returns `&mut Self` for chaining. Mutating operations never touch the
//! `valid` flag: it records the construction parse only.
//!
//! ```rust
//! use vecta::vector;
//!
//! let mut v = vector((1.0, 2.0, 3.0));
//! v.add_self((1.0, 1.0, 1.0)).scale_self(2.0, false);
//! assert_eq!(v.to_string(), "(4, 6, 8)");
//! ```
//!
//! ## Degenerate operations
//!
//! Nothing panics on domain errors. Normalizing a zero vector or dividing by
//! zero yields an invalid zero vector from the immutable form and leaves the
//! receiver untouched in the mutating form.
//!
//! ## Concurrency
//!
//! `Vector` is a `Copy` value. Sharing one instance for in-place mutation
//! across threads needs external synchronization like any other `&mut`.

mod arithmetic;
mod random;
mod rotation;
mod rounding;

use std::fmt;
use std::str::FromStr;

use nalgebra::Vector3;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::coordinates::Cartesian3;
use crate::numeric::format_number;
use crate::parser::{ParseResult, Parser, VectorInput};
use crate::{Result, VectaError};

/// Named Cartesian component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// The X component
    X,
    /// The Y component
    Y,
    /// The Z component
    Z,
}

impl FromStr for Component {
    type Err = VectaError;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "x" => Ok(Component::X),
            "y" => Ok(Component::Y),
            "z" => Ok(Component::Z),
            other => Err(VectaError::UnknownComponent(other.to_string())),
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Component::X => "x",
            Component::Y => "y",
            Component::Z => "z",
        };
        f.write_str(name)
    }
}

/// A 2 or 3-dimensional Euclidean vector
///
/// Two-dimensional vectors are simply vectors with `z == 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector {
    x: f64,
    y: f64,
    z: f64,
    valid: bool,
}

impl Vector {
    /// Builds a vector from any supported input
    ///
    /// An existing [`Vector`] is returned unchanged, components and flag
    /// included.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vecta::Vector;
    /// use vecta::coordinates::Polar;
    /// use std::f64::consts::PI;
    ///
    /// let v = Vector::new(Polar::azimuth(PI / 2.0).with_magnitude(10.0));
    /// assert_eq!(v.to_string(), "(0, 10, 0)");
    /// ```
    pub fn new(input: impl Into<VectorInput>) -> Self {
        Self::with_parser(input, &Parser::default())
    }

    /// Builds a vector using a specific parser configuration
    pub fn with_parser(input: impl Into<VectorInput>, parser: &Parser) -> Self {
        Self::from_parse(parser.parse(input))
    }

    /// Builds a vector, returning an error instead of a flagged vector
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vecta::Vector;
    ///
    /// assert!(Vector::try_new([1.0, 2.0]).is_ok());
    /// assert!(Vector::try_new([1.0, 2.0, 3.0, 4.0]).is_err());
    /// ```
    pub fn try_new(input: impl Into<VectorInput>) -> Result<Self> {
        let input = input.into();
        let result = Parser::default().parse_input(&input);
        if result.valid {
            Ok(Self::from_parse(result))
        } else {
            Err(VectaError::InvalidInput(format!(
                "{:?} (parsed as {:?})",
                input, result.variant
            )))
        }
    }

    /// Wraps a parse result
    pub fn from_parse(result: ParseResult) -> Self {
        let Cartesian3 { x, y, z } = result.components;
        Vector {
            x,
            y,
            z,
            valid: result.valid,
        }
    }

    /// The valid zero vector
    pub fn zero() -> Self {
        Self::new(())
    }

    /// The invalid zero vector returned by degenerate operations
    pub fn invalid() -> Self {
        Vector {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            valid: false,
        }
    }

    /// X component
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y component
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Z component
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Reads a component by name
    pub fn component(&self, component: Component) -> f64 {
        match component {
            Component::X => self.x,
            Component::Y => self.y,
            Component::Z => self.z,
        }
    }

    /// Whether the input this vector was built from was usable
    pub fn valid(&self) -> bool {
        self.valid
    }

    /// Components as a canonical triple
    pub fn components(&self) -> Cartesian3 {
        Cartesian3::new(self.x, self.y, self.z)
    }

    /// Independent copy with identical components and validity
    pub fn copy(&self) -> Vector {
        *self
    }

    /// Components packed into an array
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Iterates over x, then y, then z
    pub fn iter(&self) -> std::array::IntoIter<f64, 3> {
        self.to_array().into_iter()
    }

    /// Numeric value of the vector: its magnitude
    pub fn to_number(&self) -> f64 {
        self.magnitude()
    }

    /// The `(x, y, z)` representation
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }

    /// Overwrites the components, leaving the flag alone
    fn assign(&mut self, components: Cartesian3) -> &mut Self {
        self.x = components.x;
        self.y = components.y;
        self.z = components.z;
        self
    }

    /// Builds a new vector from raw components through the parser
    fn build(x: f64, y: f64, z: f64) -> Vector {
        Vector::new((x, y, z))
    }
}

impl Default for Vector {
    fn default() -> Self {
        Vector::zero()
    }
}

/// Creates a vector from any supported input
///
/// Shorthand for [`Vector::new`].
pub fn vector(input: impl Into<VectorInput>) -> Vector {
    Vector::new(input)
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            format_number(self.x),
            format_number(self.y),
            format_number(self.z)
        )
    }
}

impl IntoIterator for Vector {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &Vector {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Vector> for f64 {
    fn from(vector: Vector) -> Self {
        vector.to_number()
    }
}

impl From<Vector> for [f64; 3] {
    fn from(vector: Vector) -> Self {
        vector.to_array()
    }
}

impl From<Vector> for Cartesian3 {
    fn from(vector: Vector) -> Self {
        vector.components()
    }
}

impl From<Vector> for Vector3<f64> {
    fn from(vector: Vector) -> Self {
        vector.components().to_vector3()
    }
}

impl Serialize for Vector {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.components().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Vector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(Vector::new(value))
    }
}

// Operator forms of the immutable operations
impl<T: Into<VectorInput>> std::ops::Add<T> for Vector {
    type Output = Vector;

    fn add(self, other: T) -> Vector {
        Vector::add(&self, other)
    }
}

impl<T: Into<VectorInput>> std::ops::Sub<T> for Vector {
    type Output = Vector;

    fn sub(self, other: T) -> Vector {
        Vector::sub(&self, other)
    }
}

impl std::ops::Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, scalar: f64) -> Vector {
        self.scale(scalar, false)
    }
}

impl std::ops::Div<f64> for Vector {
    type Output = Vector;

    fn div(self, scalar: f64) -> Vector {
        self.scale(scalar, true)
    }
}

impl std::ops::Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.inverted()
    }
}

impl<T: Into<VectorInput>> std::ops::AddAssign<T> for Vector {
    fn add_assign(&mut self, other: T) {
        self.add_self(other);
    }
}

impl<T: Into<VectorInput>> std::ops::SubAssign<T> for Vector {
    fn sub_assign(&mut self, other: T) {
        self.sub_self(other);
    }
}

impl std::ops::MulAssign<f64> for Vector {
    fn mul_assign(&mut self, scalar: f64) {
        self.scale_self(scalar, false);
    }
}

impl std::ops::DivAssign<f64> for Vector {
    fn div_assign(&mut self, scalar: f64) {
        self.scale_self(scalar, true);
    }
}
