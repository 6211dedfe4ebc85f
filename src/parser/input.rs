//! Input shapes accepted by the parser
//!
//! [`VectorInput`] is the single entry type for everything that can become a
//! vector. Keyed inputs are carried as [`Fields`], a small record of
//! dynamically typed [`Field`] values, so that "key present but holding a
//! string" stays distinguishable from "key missing".

use std::collections::BTreeMap;

use nalgebra::Vector3;
use serde_json::Value;

use crate::coordinates::{Cartesian3, Cylindrical, Polar};
use crate::vector::Vector;
use crate::Result;

/// Recognized object keys
pub mod keys {
    /// Cartesian X component
    pub const X: &str = "x";
    /// Cartesian Y component
    pub const Y: &str = "y";
    /// Cartesian Z component, also the cylindrical height
    pub const Z: &str = "z";
    /// Azimuthal angle (polar and cylindrical)
    pub const PHI: &str = "phi";
    /// Elevation angle (polar)
    pub const THETA: &str = "theta";
    /// Length (polar)
    pub const MAGNITUDE: &str = "magnitude";
    /// Radial distance (cylindrical)
    pub const P: &str = "p";
    /// Angle unit flag (polar and cylindrical)
    pub const DEGREES: &str = "degrees";

    /// Keys of a cartesian-like object, any one is enough
    pub const CARTESIAN: [&str; 3] = [X, Y, Z];
    /// Keys of a polar-like object, any one is enough
    pub const POLAR: [&str; 2] = [PHI, THETA];
    /// Keys of a cylindrical-like object, all are required
    pub const CYLINDRICAL: [&str; 3] = [P, PHI, Z];
}

/// A dynamically typed value inside a tuple or an object
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// Any floating point number, including NaN and the infinities
    Number(f64),
    /// A boolean flag
    Bool(bool),
    /// Text, never interpreted as a number
    Text(String),
    /// An explicit null
    Null,
}

impl Field {
    /// Returns the number held by this field, if it is one
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Field::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Truthiness used for flags such as `degrees`
    ///
    /// Non-zero numbers and non-empty text count as set; NaN and null do not.
    pub fn is_truthy(&self) -> bool {
        match self {
            Field::Number(n) => *n != 0.0 && !n.is_nan(),
            Field::Bool(b) => *b,
            Field::Text(s) => !s.is_empty(),
            Field::Null => false,
        }
    }
}

impl From<f64> for Field {
    fn from(value: f64) -> Self {
        Field::Number(value)
    }
}

impl From<bool> for Field {
    fn from(value: bool) -> Self {
        Field::Bool(value)
    }
}

impl From<&str> for Field {
    fn from(value: &str) -> Self {
        Field::Text(value.to_string())
    }
}

impl From<String> for Field {
    fn from(value: String) -> Self {
        Field::Text(value)
    }
}

impl From<&Value> for Field {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Field::Null,
            Value::Bool(b) => Field::Bool(*b),
            Value::Number(n) => n.as_f64().map_or(Field::Null, Field::Number),
            Value::String(s) => Field::Text(s.clone()),
            // Nested arrays and objects are never numeric
            other => Field::Text(other.to_string()),
        }
    }
}

/// A keyed record of fields, the object form of a vector input
///
/// # Examples
///
/// ```rust
/// use vecta::parser::Fields;
///
/// let fields = Fields::new().with("x", 1.0).with("label", "ignored");
/// assert!(fields.contains("x"));
/// assert!(!fields.contains("y"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Fields(BTreeMap<String, Field>);

impl Fields {
    /// Creates an empty record
    pub fn new() -> Self {
        Fields(BTreeMap::new())
    }

    /// Adds a field, builder style
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Field>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts a field, returning the previous value for that key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Field>) -> Option<Field> {
        self.0.insert(key.into(), value.into())
    }

    /// Looks up a field
    pub fn get(&self, key: &str) -> Option<&Field> {
        self.0.get(key)
    }

    /// Key membership, regardless of the value held
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// True if at least one of `keys` is present
    pub fn contains_any(&self, keys: &[&str]) -> bool {
        keys.iter().any(|key| self.contains(key))
    }

    /// True if every one of `keys` is present
    pub fn contains_all(&self, keys: &[&str]) -> bool {
        keys.iter().all(|key| self.contains(key))
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no fields
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<Field>> FromIterator<(K, V)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Fields(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Everything a vector can be built from
///
/// Most callers never name this type: every constructor and operation takes
/// `impl Into<VectorInput>`, and the `From` implementations below cover the
/// usual shapes.
///
/// | Rust value | Variant |
/// |---|---|
/// | `()` | `Absent` |
/// | `f64`, `(f64, f64)`, `(f64, f64, f64)` | `Scalars` |
/// | `[f64; N]`, `&[f64]`, `Vec<f64>`, `Vec<Option<f64>>`, `nalgebra::Vector3<f64>` | `Tuple` |
/// | `Fields`, `Cartesian3`, `Polar`, `Cylindrical` | `Object` |
/// | `Vector`, `&Vector` | `Vector` |
/// | `serde_json::Value` | by JSON shape |
#[derive(Debug, Clone, PartialEq, Default)]
pub enum VectorInput {
    /// No input at all
    #[default]
    Absent,
    /// One to three numeric arguments, missing trailing ones default to 0
    Scalars(f64, Option<f64>, Option<f64>),
    /// An ordered sequence; `None` entries are holes
    Tuple(Vec<Option<Field>>),
    /// A keyed record (cartesian, polar or cylindrical)
    Object(Fields),
    /// An already built vector, used as-is
    Vector(Vector),
    /// A value of a shape no variant accepts (a bare string, a top-level null)
    Unrecognized(Field),
}

impl VectorInput {
    /// Decodes a JSON document into an input
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vecta::parser::VectorInput;
    /// use vecta::Vector;
    ///
    /// let input = VectorInput::from_json_str(r#"{"x": 1, "z": 3}"#).unwrap();
    /// assert_eq!(Vector::new(input).to_string(), "(1, 0, 3)");
    /// ```
    pub fn from_json_str(json: &str) -> Result<VectorInput> {
        let value: Value = serde_json::from_str(json)?;
        Ok(VectorInput::from(value))
    }

    /// Returns the record of an object input
    pub fn as_fields(&self) -> Option<&Fields> {
        match self {
            VectorInput::Object(fields) => Some(fields),
            _ => None,
        }
    }
}

impl From<()> for VectorInput {
    fn from(_: ()) -> Self {
        VectorInput::Absent
    }
}

impl From<f64> for VectorInput {
    fn from(x: f64) -> Self {
        VectorInput::Scalars(x, None, None)
    }
}

impl From<(f64, f64)> for VectorInput {
    fn from((x, y): (f64, f64)) -> Self {
        VectorInput::Scalars(x, Some(y), None)
    }
}

impl From<(f64, f64, f64)> for VectorInput {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        VectorInput::Scalars(x, Some(y), Some(z))
    }
}

impl<const N: usize> From<[f64; N]> for VectorInput {
    fn from(values: [f64; N]) -> Self {
        VectorInput::from(&values[..])
    }
}

impl From<&[f64]> for VectorInput {
    fn from(values: &[f64]) -> Self {
        VectorInput::Tuple(values.iter().map(|v| Some(Field::Number(*v))).collect())
    }
}

impl From<Vec<f64>> for VectorInput {
    fn from(values: Vec<f64>) -> Self {
        VectorInput::from(values.as_slice())
    }
}

impl From<Vec<Option<f64>>> for VectorInput {
    fn from(values: Vec<Option<f64>>) -> Self {
        VectorInput::Tuple(values.into_iter().map(|v| v.map(Field::Number)).collect())
    }
}

impl From<Vec<Field>> for VectorInput {
    fn from(values: Vec<Field>) -> Self {
        VectorInput::Tuple(values.into_iter().map(Some).collect())
    }
}

impl From<Vector3<f64>> for VectorInput {
    fn from(vec: Vector3<f64>) -> Self {
        VectorInput::from([vec.x, vec.y, vec.z])
    }
}

impl From<Fields> for VectorInput {
    fn from(fields: Fields) -> Self {
        VectorInput::Object(fields)
    }
}

impl From<Cartesian3> for VectorInput {
    fn from(coord: Cartesian3) -> Self {
        VectorInput::Object(
            Fields::new()
                .with(keys::X, coord.x)
                .with(keys::Y, coord.y)
                .with(keys::Z, coord.z),
        )
    }
}

/// `phi` is always written so that a descriptor with no angles set still
/// parses as polar input.
impl From<Polar> for VectorInput {
    fn from(polar: Polar) -> Self {
        let mut fields = Fields::new()
            .with(keys::PHI, polar.phi.unwrap_or(0.0))
            .with(keys::DEGREES, polar.degrees);
        if let Some(theta) = polar.theta {
            fields.insert(keys::THETA, theta);
        }
        if let Some(magnitude) = polar.magnitude {
            fields.insert(keys::MAGNITUDE, magnitude);
        }
        VectorInput::Object(fields)
    }
}

impl From<Cylindrical> for VectorInput {
    fn from(cylindrical: Cylindrical) -> Self {
        VectorInput::Object(
            Fields::new()
                .with(keys::P, cylindrical.p)
                .with(keys::PHI, cylindrical.phi)
                .with(keys::Z, cylindrical.z)
                .with(keys::DEGREES, cylindrical.degrees),
        )
    }
}

impl From<Vector> for VectorInput {
    fn from(vector: Vector) -> Self {
        VectorInput::Vector(vector)
    }
}

impl From<&Vector> for VectorInput {
    fn from(vector: &Vector) -> Self {
        VectorInput::Vector(*vector)
    }
}

impl From<Value> for VectorInput {
    fn from(value: Value) -> Self {
        VectorInput::from(&value)
    }
}

impl From<&Value> for VectorInput {
    fn from(value: &Value) -> Self {
        match value {
            Value::Array(items) => {
                VectorInput::Tuple(items.iter().map(|item| Some(Field::from(item))).collect())
            }
            Value::Object(map) => VectorInput::Object(
                map.iter()
                    .map(|(key, item)| (key.clone(), Field::from(item)))
                    .collect(),
            ),
            Value::Number(n) => match n.as_f64() {
                Some(x) => VectorInput::Scalars(x, None, None),
                None => VectorInput::Unrecognized(Field::from(value)),
            },
            other => VectorInput::Unrecognized(Field::from(other)),
        }
    }
}
