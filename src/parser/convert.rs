//! Conversions from a matched input shape to the canonical triple
//!
//! Each conversion checks every field it consumes. A present field that is
//! not a finite number rejects the whole input; a missing field takes its
//! default.

use super::input::{keys, Field, Fields};
use super::{InputVariant, ParseResult, ParserConfig};
use crate::constants::DEFAULT_CYLINDRICAL_RADIUS;
use crate::coordinates::{Cartesian3, Cylindrical, Polar};
use crate::numeric::{self, is_valid_number};

/// Reads a field that may be absent
///
/// `None` means the field is present but unusable, `Some(None)` that it is
/// absent.
fn optional_number(fields: &Fields, key: &str) -> Option<Option<f64>> {
    match fields.get(key) {
        None => Some(None),
        Some(field) => field
            .as_number()
            .filter(|n| is_valid_number(*n))
            .map(Some),
    }
}

fn number_or(fields: &Fields, key: &str, default: f64) -> Option<f64> {
    optional_number(fields, key).map(|value| value.unwrap_or(default))
}

fn degrees_flag(fields: &Fields) -> bool {
    fields.get(keys::DEGREES).is_some_and(Field::is_truthy)
}

/// Scalar arguments: every present argument must be finite
pub fn parse_scalars(x: f64, y: Option<f64>, z: Option<f64>) -> ParseResult {
    let components = Cartesian3::new(x, y.unwrap_or(0.0), z.unwrap_or(0.0));
    ParseResult::accepted(components, InputVariant::Scalars)
}

/// A 1–3 entry sequence; holes default to 0
pub fn parse_tuple(entries: &[Option<Field>]) -> ParseResult {
    let mut values = [0.0; 3];
    for (slot, entry) in values.iter_mut().zip(entries) {
        match entry {
            None => {}
            Some(field) => match field.as_number() {
                Some(n) => *slot = n,
                None => return ParseResult::rejected(InputVariant::Tuple),
            },
        }
    }
    ParseResult::accepted(Cartesian3::from(values), InputVariant::Tuple)
}

fn cartesian_from_fields(fields: &Fields) -> Option<Cartesian3> {
    Some(Cartesian3::new(
        number_or(fields, keys::X, 0.0)?,
        number_or(fields, keys::Y, 0.0)?,
        number_or(fields, keys::Z, 0.0)?,
    ))
}

/// Object with any of `x`, `y`, `z`
pub fn parse_cartesian(fields: &Fields) -> ParseResult {
    match cartesian_from_fields(fields) {
        Some(components) => ParseResult::accepted(components, InputVariant::Cartesian),
        None => ParseResult::rejected(InputVariant::Cartesian),
    }
}

/// Reads a polar descriptor out of an object
pub fn polar_from_fields(fields: &Fields) -> Option<Polar> {
    Some(Polar {
        phi: optional_number(fields, keys::PHI)?,
        theta: optional_number(fields, keys::THETA)?,
        magnitude: optional_number(fields, keys::MAGNITUDE)?,
        degrees: degrees_flag(fields),
    })
}

/// Object with `phi` and/or `theta`
///
/// All three components are rounded to the configured precision.
pub fn parse_polar(fields: &Fields, config: &ParserConfig) -> ParseResult {
    match polar_from_fields(fields) {
        Some(polar) => {
            let mut components = polar.to_cartesian();
            if let Some(places) = config.trig_precision {
                components = components.rounded(places);
            }
            ParseResult::accepted(components, InputVariant::Polar)
        }
        None => ParseResult::rejected(InputVariant::Polar),
    }
}

/// Reads a cylindrical descriptor out of an object
pub fn cylindrical_from_fields(fields: &Fields) -> Option<Cylindrical> {
    Some(Cylindrical {
        p: number_or(fields, keys::P, DEFAULT_CYLINDRICAL_RADIUS)?,
        phi: number_or(fields, keys::PHI, 0.0)?,
        z: number_or(fields, keys::Z, 0.0)?,
        degrees: degrees_flag(fields),
    })
}

/// Object with all of `p`, `phi` and `z`
///
/// Only the trig-derived `x` and `y` are rounded; `z` is copied through.
pub fn parse_cylindrical(fields: &Fields, config: &ParserConfig) -> ParseResult {
    match cylindrical_from_fields(fields) {
        Some(cylindrical) => {
            let mut components = cylindrical.to_cartesian();
            if let Some(places) = config.trig_precision {
                components.x = numeric::round(components.x, places);
                components.y = numeric::round(components.y, places);
            }
            ParseResult::accepted(components, InputVariant::Cylindrical)
        }
        None => ParseResult::rejected(InputVariant::Cylindrical),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{PI, SQRT_2};

    #[test]
    fn test_scalars_default_missing_arguments() {
        let result = parse_scalars(1.0, Some(2.0), None);
        assert!(result.valid);
        assert_eq!(result.components, Cartesian3::new(1.0, 2.0, 0.0));

        assert!(!parse_scalars(1.0, Some(f64::NAN), None).valid);
        assert!(!parse_scalars(f64::INFINITY, None, None).valid);
    }

    #[test]
    fn test_tuple_holes() {
        let result = parse_tuple(&[Some(Field::Number(4.0)), None, Some(Field::Number(6.0))]);
        assert!(result.valid);
        assert_eq!(result.components, Cartesian3::new(4.0, 0.0, 6.0));
    }

    #[test]
    fn test_tuple_rejects_non_numbers() {
        let result = parse_tuple(&[Some(Field::from("1")), Some(Field::from("2"))]);
        assert!(!result.valid);
        assert_eq!(result.components, Cartesian3::ZERO);

        assert!(!parse_tuple(&[Some(Field::Number(f64::NAN))]).valid);
        assert!(!parse_tuple(&[Some(Field::Null)]).valid);
    }

    #[test]
    fn test_cartesian_ignores_stray_keys() {
        let fields = Fields::new().with("x", 1.0).with("a", 2.0);
        let result = parse_cartesian(&fields);
        assert!(result.valid);
        assert_eq!(result.components, Cartesian3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_cartesian_rejects_non_numeric_component() {
        let fields = Fields::new().with("x", 1.0).with("y", Field::Null);
        assert!(!parse_cartesian(&fields).valid);
    }

    #[test]
    fn test_polar_rounding() {
        let fields = Fields::new().with("phi", PI / 2.0).with("magnitude", 10.0);
        let result = parse_polar(&fields, &ParserConfig::default());
        assert!(result.valid);
        assert_eq!(result.components, Cartesian3::new(0.0, 10.0, 0.0));
    }

    #[test]
    fn test_polar_without_rounding_keeps_noise() {
        let fields = Fields::new().with("phi", PI / 2.0);
        let config = ParserConfig::default().with_trig_precision(None);
        let result = parse_polar(&fields, &config);
        assert!(result.valid);
        assert!(result.components.x != 0.0);
        assert_abs_diff_eq!(result.components.x, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_polar_degrees() {
        let fields = Fields::new()
            .with("phi", 180.0)
            .with("degrees", true)
            .with("magnitude", 2.0);
        let result = parse_polar(&fields, &ParserConfig::default());
        assert_eq!(result.components, Cartesian3::new(-2.0, 0.0, 0.0));
    }

    #[test]
    fn test_polar_rejects_text_angle() {
        let fields = Fields::new().with("phi", "23");
        let result = parse_polar(&fields, &ParserConfig::default());
        assert!(!result.valid);
        assert_eq!(result.variant, InputVariant::Polar);
    }

    #[test]
    fn test_cylindrical() {
        let fields = Fields::new()
            .with("p", SQRT_2)
            .with("phi", PI / 4.0)
            .with("z", 5.0);
        let result = parse_cylindrical(&fields, &ParserConfig::default());
        assert!(result.valid);
        assert_abs_diff_eq!(result.components.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.components.y, 1.0, epsilon = 1e-12);
        assert_eq!(result.components.z, 5.0);
    }

    #[test]
    fn test_cylindrical_height_is_not_rounded() {
        let fields = Fields::new()
            .with("p", 1.0)
            .with("phi", 0.0)
            .with("z", 0.1234567890123456);
        let result = parse_cylindrical(&fields, &ParserConfig::default());
        assert_eq!(result.components.z, 0.1234567890123456);
    }

    #[test]
    fn test_huge_trig_results_stay_valid() {
        let fields = Fields::new().with("phi", 0.0).with("magnitude", 1e300);
        let result = parse_polar(&fields, &ParserConfig::default());
        assert!(result.valid);
        assert_eq!(result.components.x, 1e300);
        assert_eq!(result.components.y, 0.0);

        let fields = Fields::new().with("p", 1e300).with("phi", 0.0).with("z", 0.0);
        let result = parse_cylindrical(&fields, &ParserConfig::default());
        assert!(result.valid);
        assert_eq!(result.components, Cartesian3::new(1e300, 0.0, 0.0));
    }
}
