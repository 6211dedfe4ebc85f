//! # Input Parser
//!
//! Turns any [`VectorInput`] into a [`ParseResult`]: the canonical
//! [`Cartesian3`] triple plus a validity verdict. The parser never fails
//! structurally; unusable input yields a zero triple with `valid == false`.
//!
//! ## Resolution order
//!
//! 1. `Absent` is the valid zero vector.
//! 2. `Scalars` are checked argument by argument.
//! 3. Everything else runs through the guard chain in [`PRECEDENCE`]:
//!    tuple, cylindrical, polar, cartesian. The first matching guard wins.
//!
//! Cylindrical is tried before polar and cartesian because `{p, phi, z}`
//! also carries the polar key `phi` and the cartesian key `z`; only the
//! cylindrical guard needs all three of its keys.
//!
//! ## Examples
//!
//! ```rust
//! use vecta::parser::{parse, Fields, InputVariant};
//! use std::f64::consts::{PI, SQRT_2};
//!
//! let fields = Fields::new().with("p", SQRT_2).with("phi", PI / 4.0).with("z", 5.0);
//! let result = parse(fields);
//!
//! assert!(result.valid);
//! assert_eq!(result.variant, InputVariant::Cylindrical);
//! assert!((result.components.x - 1.0).abs() < 1e-12);
//! ```

pub mod convert;
pub mod guards;
pub mod input;

pub use input::{keys, Field, Fields, VectorInput};

use crate::constants::TRIG_PRECISION;
use crate::coordinates::Cartesian3;

/// Which input shape produced a parse result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputVariant {
    /// No input
    Absent,
    /// Scalar arguments
    Scalars,
    /// 1–3 entry sequence
    Tuple,
    /// `{p, phi, z}` object
    Cylindrical,
    /// `{phi?, theta?, magnitude?}` object
    Polar,
    /// `{x?, y?, z?}` object
    Cartesian,
    /// An existing vector
    Vector,
    /// Nothing matched
    Unrecognized,
}

/// Order in which shape guards are tried
pub const PRECEDENCE: [InputVariant; 4] = [
    InputVariant::Tuple,
    InputVariant::Cylindrical,
    InputVariant::Polar,
    InputVariant::Cartesian,
];

impl InputVariant {
    /// Runs this variant's guard and, on a match, its conversion
    ///
    /// Returns `None` when the guard does not match. Variants that are not
    /// part of the guard chain never match.
    pub fn try_parse(self, input: &VectorInput, config: &ParserConfig) -> Option<ParseResult> {
        match (self, input) {
            (InputVariant::Tuple, VectorInput::Tuple(entries)) if guards::is_tuple(input) => {
                Some(convert::parse_tuple(entries))
            }
            (InputVariant::Cylindrical, VectorInput::Object(fields))
                if guards::is_cylindrical(input) =>
            {
                Some(convert::parse_cylindrical(fields, config))
            }
            (InputVariant::Polar, VectorInput::Object(fields)) if guards::is_polar(input) => {
                Some(convert::parse_polar(fields, config))
            }
            (InputVariant::Cartesian, VectorInput::Object(fields))
                if guards::is_cartesian(input) =>
            {
                Some(convert::parse_cartesian(fields))
            }
            _ => None,
        }
    }
}

/// Outcome of parsing one input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParseResult {
    /// Canonical triple, all zeros when the input was rejected
    pub components: Cartesian3,
    /// Whether the input was usable
    pub valid: bool,
    /// Shape that produced this result
    pub variant: InputVariant,
}

impl ParseResult {
    /// A result whose validity follows from the components being finite
    pub fn accepted(components: Cartesian3, variant: InputVariant) -> Self {
        if components.is_finite() {
            ParseResult {
                components,
                valid: true,
                variant,
            }
        } else {
            ParseResult::rejected(variant)
        }
    }

    /// An invalid, zero-filled result
    pub fn rejected(variant: InputVariant) -> Self {
        ParseResult {
            components: Cartesian3::ZERO,
            valid: false,
            variant,
        }
    }
}

/// Parser settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParserConfig {
    /// Decimal digits kept on trig-derived components, `None` keeps them raw
    pub trig_precision: Option<i32>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            trig_precision: Some(TRIG_PRECISION),
        }
    }
}

impl ParserConfig {
    /// Sets the rounding applied to polar and cylindrical results
    pub fn with_trig_precision(mut self, places: Option<i32>) -> Self {
        self.trig_precision = places;
        self
    }
}

/// Converts vector inputs into canonical triples
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Creates a parser with the given settings
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Settings in use
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses one input
    pub fn parse(&self, input: impl Into<VectorInput>) -> ParseResult {
        self.parse_input(&input.into())
    }

    /// Parses a borrowed input
    pub fn parse_input(&self, input: &VectorInput) -> ParseResult {
        match input {
            VectorInput::Absent => ParseResult {
                components: Cartesian3::ZERO,
                valid: true,
                variant: InputVariant::Absent,
            },
            VectorInput::Scalars(x, y, z) => convert::parse_scalars(*x, *y, *z),
            VectorInput::Vector(vector) => ParseResult {
                components: vector.components(),
                valid: vector.valid(),
                variant: InputVariant::Vector,
            },
            _ => {
                for variant in PRECEDENCE {
                    if let Some(result) = variant.try_parse(input, &self.config) {
                        log::trace!("vector input parsed as {:?}", variant);
                        return result;
                    }
                }
                log::debug!("vector input matched no known shape: {:?}", input);
                ParseResult::rejected(InputVariant::Unrecognized)
            }
        }
    }
}

/// Parses one input with the default settings
pub fn parse(input: impl Into<VectorInput>) -> ParseResult {
    Parser::default().parse(input)
}
