//! Vecta: flexible-input 2D/3D Euclidean vectors
//!
//! This crate provides a [`Vector`] type that can be built from scalars,
//! sequences, Cartesian/polar/cylindrical records or JSON values, and a
//! parser that turns any of those shapes into a canonical `(x, y, z)`
//! triple with a validity verdict.
//!
//! ```rust
//! use vecta::{vector, AngleUnit};
//! use vecta::coordinates::Polar;
//!
//! let a = vector((1.0, 2.0, 3.0));
//! let b = vector(serde_json::json!({"phi": 90, "degrees": true, "magnitude": 2}));
//!
//! assert_eq!(b.to_string(), "(0, 2, 0)");
//! assert_eq!(a.add(b).to_string(), "(1, 4, 3)");
//! assert_eq!(vector(Polar::azimuth(0.0)).get_phi(AngleUnit::Degrees), 0.0);
//! ```

use thiserror::Error;

pub mod constants;
pub mod coordinates;
pub mod numeric;
pub mod parser;
pub mod vector;

// Re-export commonly used types
pub use coordinates::{AngleUnit, Cartesian3, Cylindrical, Polar};
pub use parser::{
    parse, Field, Fields, InputVariant, ParseResult, Parser, ParserConfig, VectorInput,
};
pub use vector::{vector, Component, Vector};

/// Main error type for the vecta library
#[derive(Debug, Error)]
pub enum VectaError {
    #[error("Unknown component: {0}")]
    UnknownComponent(String),

    #[error("Invalid vector input: {0}")]
    InvalidInput(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for vecta operations
pub type Result<T> = std::result::Result<T, VectaError>;
