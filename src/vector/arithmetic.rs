//! Linear algebra on [`Vector`]

use super::Vector;
use crate::coordinates::Cartesian3;
use crate::numeric::clamp_unit;
use crate::parser::VectorInput;

impl Vector {
    /// Component-wise sum
    pub fn add(&self, other: impl Into<VectorInput>) -> Vector {
        let other = Vector::new(other);
        Vector::build(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Adds `other` in place
    pub fn add_self(&mut self, other: impl Into<VectorInput>) -> &mut Self {
        let other = Vector::new(other);
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
        self
    }

    /// Component-wise difference, `self - other`
    pub fn sub(&self, other: impl Into<VectorInput>) -> Vector {
        self.add(Vector::new(other).inverted())
    }

    /// Subtracts `other` in place
    pub fn sub_self(&mut self, other: impl Into<VectorInput>) -> &mut Self {
        self.add_self(Vector::new(other).inverted())
    }

    /// Multiplies every component by `value`, or divides when `inverse` is set
    ///
    /// Dividing by zero logs a warning and yields the invalid zero vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vecta::vector;
    ///
    /// let v = vector((2.0, 4.0, 6.0));
    /// assert_eq!(v.scale(0.5, false).to_string(), "(1, 2, 3)");
    /// assert_eq!(v.scale(2.0, true).to_string(), "(1, 2, 3)");
    /// assert!(!v.scale(0.0, true).valid());
    /// ```
    pub fn scale(&self, value: f64, inverse: bool) -> Vector {
        match scale_factor(value, inverse) {
            Some(k) => Vector::build(self.x * k, self.y * k, self.z * k),
            None => Vector::invalid(),
        }
    }

    /// Scales in place; dividing by zero leaves the vector unchanged
    pub fn scale_self(&mut self, value: f64, inverse: bool) -> &mut Self {
        if let Some(k) = scale_factor(value, inverse) {
            self.x *= k;
            self.y *= k;
            self.z *= k;
        }
        self
    }

    /// The vector pointing the opposite way
    pub fn inverted(&self) -> Vector {
        self.scale(-1.0, false)
    }

    /// Flips the vector in place
    pub fn invert_self(&mut self) -> &mut Self {
        self.scale_self(-1.0, false)
    }

    /// Scalar product
    pub fn dot(&self, other: impl Into<VectorInput>) -> f64 {
        self.components().dot(&Vector::new(other).components())
    }

    /// Right-handed cross product, `self × other`
    pub fn cross(&self, other: impl Into<VectorInput>) -> Vector {
        let c = self.components().cross(&Vector::new(other).components());
        Vector::build(c.x, c.y, c.z)
    }

    /// Replaces `self` with `self × other`
    pub fn cross_self(&mut self, other: impl Into<VectorInput>) -> &mut Self {
        let c = self.components().cross(&Vector::new(other).components());
        self.assign(c)
    }

    /// Euclidean length
    pub fn magnitude(&self) -> f64 {
        self.components().magnitude()
    }

    /// Squared length, avoids the square root
    pub fn magnitude_sq(&self) -> f64 {
        self.components().magnitude_sq()
    }

    /// Euclidean distance between the two points
    pub fn distance(&self, other: impl Into<VectorInput>) -> f64 {
        self.offset_to(other).magnitude()
    }

    /// Squared distance between the two points
    pub fn distance_sq(&self, other: impl Into<VectorInput>) -> f64 {
        self.offset_to(other).magnitude_sq()
    }

    // Raw difference, not re-parsed, so an overflow stays infinite
    fn offset_to(&self, other: impl Into<VectorInput>) -> Cartesian3 {
        let other = Vector::new(other);
        Cartesian3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Unit vector in the same direction
    ///
    /// The zero vector has no direction and normalizes to the invalid zero
    /// vector.
    pub fn normalize(&self) -> Vector {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Vector::invalid();
        }
        self.scale(magnitude, true)
    }

    /// Alias of [`Vector::normalize`]
    pub fn unit(&self) -> Vector {
        self.normalize()
    }

    /// Normalizes in place; a zero vector stays as it is
    pub fn normalize_self(&mut self) -> &mut Self {
        let magnitude = self.magnitude();
        if magnitude != 0.0 {
            self.scale_self(magnitude, true);
        }
        self
    }

    /// Same direction, new length
    ///
    /// A negative `value` flips the direction. A zero vector has no direction:
    /// it normalizes to the zero triple, and scaling rebuilds that as the valid
    /// zero vector.
    pub fn set_magnitude(&self, value: f64) -> Vector {
        self.normalize().scale(value, false)
    }

    /// Sets the length in place to `|value|`
    pub fn set_magnitude_self(&mut self, value: f64) -> &mut Self {
        self.normalize_self().scale_self(value.abs(), false)
    }

    /// Caps the length at `cap`
    ///
    /// Shorter vectors come back unchanged. A cap of zero or less gives the
    /// zero vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vecta::vector;
    ///
    /// assert_eq!(vector((3.0, 4.0)).limit(1.0).magnitude(), 1.0);
    /// assert_eq!(vector((3.0, 4.0)).limit(10.0).to_string(), "(3, 4, 0)");
    /// ```
    pub fn limit(&self, cap: f64) -> Vector {
        if cap <= 0.0 {
            Vector::zero()
        } else if self.magnitude_sq() <= cap * cap {
            *self
        } else {
            self.set_magnitude(cap)
        }
    }

    /// Caps the length at `cap` in place
    pub fn limit_self(&mut self, cap: f64) -> &mut Self {
        if cap <= 0.0 {
            self.assign(Vector::zero().components())
        } else if self.magnitude_sq() <= cap * cap {
            self
        } else {
            self.set_magnitude_self(cap)
        }
    }

    /// Exact component-wise equality; the validity flag is not compared
    pub fn equals(&self, other: impl Into<VectorInput>) -> bool {
        self.components() == Vector::new(other).components()
    }

    /// Linear interpolation toward `other`
    ///
    /// `t` is clamped to `[0, 1]`: `0` gives `self`, `1` gives `other`.
    pub fn lerp(&self, other: impl Into<VectorInput>, t: f64) -> Vector {
        let other = Vector::new(other);
        let t = clamp_unit(t);
        Vector::build(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
            self.z + (other.z - self.z) * t,
        )
    }

    /// Moves `self` toward `other` by the clamped fraction `t`
    pub fn lerp_self(&mut self, other: impl Into<VectorInput>, t: f64) -> &mut Self {
        let target = self.lerp(other, t).components();
        self.assign(target)
    }

    /// Mirror image across the plane whose normal is `normal`
    ///
    /// `v - 2 (v · n̂) n̂`, where `n̂` is the normalized `normal`.
    pub fn reflect(&self, normal: impl Into<VectorInput>) -> Vector {
        let surface = Vector::new(normal).normalize();
        self.sub(surface.scale(2.0 * self.dot(surface), false))
    }

    /// Reflects in place across the plane with normal `normal`
    pub fn reflect_self(&mut self, normal: impl Into<VectorInput>) -> &mut Self {
        let reflected = self.reflect(normal).components();
        self.assign(reflected)
    }

    /// Applies `f` to each component
    ///
    /// ```rust
    /// use vecta::vector;
    ///
    /// let v = vector((1.0, -2.0, 3.0)).map(f64::abs);
    /// assert_eq!(v.to_string(), "(1, 2, 3)");
    /// ```
    pub fn map<F: Fn(f64) -> f64>(&self, f: F) -> Vector {
        let c = self.components().map(f);
        Vector::build(c.x, c.y, c.z)
    }

    /// Applies `f` to each component in place
    pub fn map_self<F: Fn(f64) -> f64>(&mut self, f: F) -> &mut Self {
        let c = self.components().map(f);
        self.assign(c)
    }

    /// Replaces the components with those parsed from `input`
    ///
    /// Like every mutating operation this keeps the validity flag; an
    /// unusable input writes the zero triple.
    pub fn set(&mut self, input: impl Into<VectorInput>) -> &mut Self {
        let replacement = Vector::new(input).components();
        self.assign(replacement)
    }
}

/// Factor to multiply by, `None` when dividing by zero
fn scale_factor(value: f64, inverse: bool) -> Option<f64> {
    if !inverse {
        return Some(value);
    }
    if value == 0.0 {
        log::warn!("Division by zero while scaling a vector");
        return None;
    }
    Some(1.0 / value)
}
