//! Numerical constants for Smith chart calculations
//!
//! Tolerances, sentinels and defaults shared by the transform engine, the
//! component extractor, the synthesizer and the trajectory generator. The
//! tolerances must stay identical across those modules for round trips to
//! hold.

/// Tolerance for zero tests in the transform engine and the component extractor.
/// Used before every division by a reactance, susceptance, frequency or `1 ± Γ`.
pub const EPSILON: f64 = 1e-12;

/// Tolerance for "already matched" and "purely resistive" tests in the synthesizer.
pub const MATCH_TOL: f64 = 1e-10;

/// Smallest physical component value (H or F) accepted as a divisor.
pub const MIN_COMPONENT_VALUE: f64 = 1e-18;

/// Sentinel impedance/admittance magnitude returned instead of dividing by ~0.
pub const HUGE_IMMITTANCE: f64 = 1e12;

/// Sentinel reactance/susceptance returned for a near-zero L or C.
pub const REACTANCE_SENTINEL: f64 = -1e12;

/// VSWR reported for |Γ| >= 1.
pub const VSWR_MAX: f64 = 1e6;

/// Return loss reported for a perfect match (|Γ| below [`EPSILON`]).
pub const RETURN_LOSS_FLOOR_DB: f64 = -200.0;

/// Mismatch loss reported for total reflection.
pub const MISMATCH_LOSS_FLOOR_DB: f64 = -100.0;

/// Speed of light in vacuum (m/s).
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Default reference impedance (Ω).
pub const DEFAULT_Z0: f64 = 50.0;

/// Default design frequency (Hz).
pub const DEFAULT_FREQUENCY: f64 = 1e9;

/// Default loaded Q for Pi and T networks.
pub const DEFAULT_TARGET_Q: f64 = 2.0;

/// Default number of samples per trajectory segment.
pub const DEFAULT_ARC_POINTS: usize = 50;

/// Lower clamp for resistance while interpolating a series resistor (Ω).
pub const RESISTANCE_FLOOR: f64 = 1e-3;

/// Lower clamp for conductance while interpolating a shunt resistor (S).
pub const CONDUCTANCE_FLOOR: f64 = 1e-3;

/// 2π
pub const TWO_PI: f64 = 2.0 * std::f64::consts::PI;
