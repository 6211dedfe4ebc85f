//! Constants module for vector calculations

use std::f64::consts::PI;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;
/// Default elevation angle of a polar input without `theta` (the XY plane)
pub const PLANAR_THETA: f64 = PI / 2.0;
/// Default elevation angle in degrees
pub const PLANAR_THETA_DEG: f64 = 90.0;

// Parsing
/// Decimal digits kept on trig-derived components (polar and cylindrical input)
pub const TRIG_PRECISION: i32 = 12;
/// Default magnitude of a polar input
pub const DEFAULT_POLAR_MAGNITUDE: f64 = 1.0;
/// Default radial distance of a cylindrical input
pub const DEFAULT_CYLINDRICAL_RADIUS: f64 = 1.0;

// Clamping
/// Lower bound used by `Vector::clamp_unit`
pub const DEFAULT_CLAMP_MIN: f64 = 0.0;
/// Upper bound used by `Vector::clamp_unit`
pub const DEFAULT_CLAMP_MAX: f64 = 1.0;
