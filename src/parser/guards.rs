//! Shape predicates for the guard chain
//!
//! Guards only look at shape: sequence length, or which keys are present.
//! Whether the values behind those keys are usable numbers is decided by the
//! conversion that runs after a guard matches.

use super::input::{keys, VectorInput};

/// Sequence of one to three entries
pub fn is_tuple(input: &VectorInput) -> bool {
    matches!(input, VectorInput::Tuple(entries) if (1..=3).contains(&entries.len()))
}

/// Object carrying all of `p`, `phi` and `z`
pub fn is_cylindrical(input: &VectorInput) -> bool {
    input
        .as_fields()
        .is_some_and(|fields| fields.contains_all(&keys::CYLINDRICAL))
}

/// Object carrying `phi` or `theta`
pub fn is_polar(input: &VectorInput) -> bool {
    input
        .as_fields()
        .is_some_and(|fields| fields.contains_any(&keys::POLAR))
}

/// Object carrying at least one of `x`, `y`, `z`
pub fn is_cartesian(input: &VectorInput) -> bool {
    input
        .as_fields()
        .is_some_and(|fields| fields.contains_any(&keys::CARTESIAN))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::input::Fields;

    fn object(keys: &[&str]) -> VectorInput {
        VectorInput::Object(keys.iter().map(|k| (*k, 0.0)).collect::<Fields>())
    }

    #[test]
    fn test_tuple_length_bounds() {
        assert!(!is_tuple(&VectorInput::from(Vec::<f64>::new())));
        assert!(is_tuple(&VectorInput::from([1.0])));
        assert!(is_tuple(&VectorInput::from([1.0, 2.0, 3.0])));
        assert!(!is_tuple(&VectorInput::from([1.0, 2.0, 3.0, 4.0])));
        assert!(!is_tuple(&VectorInput::from((1.0, 2.0))));
    }

    #[test]
    fn test_cylindrical_requires_every_key() {
        assert!(is_cylindrical(&object(&["p", "phi", "z"])));
        assert!(!is_cylindrical(&object(&["p", "phi"])));
        assert!(!is_cylindrical(&object(&["phi", "z"])));
    }

    #[test]
    fn test_overlapping_guards() {
        let input = object(&["p", "phi", "z"]);
        // Shape alone matches all three object guards; precedence decides
        assert!(is_polar(&input));
        assert!(is_cartesian(&input));
    }

    #[test]
    fn test_membership_not_truthiness() {
        let input = VectorInput::Object(Fields::new().with("theta", 0.0));
        assert!(is_polar(&input));

        let input = VectorInput::Object(Fields::new().with("x", "not a number"));
        assert!(is_cartesian(&input));
    }

    #[test]
    fn test_unrelated_objects() {
        let input = object(&["a", "magnitude", "degrees"]);
        assert!(!is_cylindrical(&input));
        assert!(!is_polar(&input));
        assert!(!is_cartesian(&input));
        assert!(!is_cartesian(&VectorInput::Object(Fields::new())));
    }
}
