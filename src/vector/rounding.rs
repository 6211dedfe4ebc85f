//! Component-wise rounding, clamping and single-component updates

use super::{Component, Vector};
use crate::constants::{DEFAULT_CLAMP_MAX, DEFAULT_CLAMP_MIN};
use crate::numeric::{self, is_valid_number};

impl Vector {
    /// Rounds every component to `places` decimal digits
    ///
    /// ```rust
    /// use vecta::vector;
    ///
    /// let v = vector((1.2345, -0.0001, 2.5)).round(2);
    /// assert_eq!(v.to_string(), "(1.23, 0, 2.5)");
    /// ```
    pub fn round(&self, places: i32) -> Vector {
        self.map(|c| numeric::round(c, places))
    }

    /// Rounds in place
    pub fn round_self(&mut self, places: i32) -> &mut Self {
        self.map_self(|c| numeric::round(c, places))
    }

    /// Rounds every component down at `places` decimal digits
    pub fn floor(&self, places: i32) -> Vector {
        self.map(|c| numeric::floor(c, places))
    }

    /// Floors in place
    pub fn floor_self(&mut self, places: i32) -> &mut Self {
        self.map_self(|c| numeric::floor(c, places))
    }

    /// Rounds every component up at `places` decimal digits
    pub fn ceil(&self, places: i32) -> Vector {
        self.map(|c| numeric::ceil(c, places))
    }

    /// Ceils in place
    pub fn ceil_self(&mut self, places: i32) -> &mut Self {
        self.map_self(|c| numeric::ceil(c, places))
    }

    /// Clamps every component into `[min, max]`
    ///
    /// Bounds are not checked; with `min > max` every component becomes `max`.
    pub fn clamp(&self, min: f64, max: f64) -> Vector {
        self.map(|c| numeric::clamp(c, min, max))
    }

    /// Clamps in place, with the same reversed-bounds behaviour
    pub fn clamp_self(&mut self, min: f64, max: f64) -> &mut Self {
        self.map_self(|c| numeric::clamp(c, min, max))
    }

    /// Clamps every component into `[0, 1]`
    pub fn clamp_unit(&self) -> Vector {
        self.clamp(DEFAULT_CLAMP_MIN, DEFAULT_CLAMP_MAX)
    }

    /// Copy with one component replaced
    ///
    /// An unknown component name or a non-finite value yields the invalid
    /// zero vector.
    ///
    /// ```rust
    /// use vecta::vector;
    ///
    /// let v = vector((1.0, 2.0, 3.0));
    /// assert_eq!(v.set_component("z", 9.0).to_string(), "(1, 2, 9)");
    /// assert!(!v.set_component("w", 9.0).valid());
    /// ```
    pub fn set_component(&self, name: &str, value: f64) -> Vector {
        match checked_component(name, value) {
            Some(component) => {
                let mut updated = *self;
                updated.write_component(component, value);
                Vector::build(updated.x, updated.y, updated.z)
            }
            None => Vector::invalid(),
        }
    }

    /// Replaces one component in place
    ///
    /// An unknown name or a non-finite value leaves the vector unchanged.
    pub fn set_component_self(&mut self, name: &str, value: f64) -> &mut Self {
        if let Some(component) = checked_component(name, value) {
            self.write_component(component, value);
        }
        self
    }

    fn write_component(&mut self, component: Component, value: f64) {
        match component {
            Component::X => self.x = value,
            Component::Y => self.y = value,
            Component::Z => self.z = value,
        }
    }
}

fn checked_component(name: &str, value: f64) -> Option<Component> {
    let component = match name.parse::<Component>() {
        Ok(component) => component,
        Err(e) => {
            log::debug!("Ignoring component update: {}", e);
            return None;
        }
    };
    if !is_valid_number(value) {
        log::debug!("Ignoring non-finite value {} for component {}", value, component);
        return None;
    }
    Some(component)
}
