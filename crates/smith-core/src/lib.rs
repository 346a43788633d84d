//! smith-core: Smith chart impedance-matching engine
//!
//! Coordinate transforms between Γ, Z and Y, component value extraction,
//! matching network synthesis and the impedance trajectories used to check
//! and animate a match.
//!
//! ## Modules
//!
//! - `math` - Γ/Z/Y conversions, VSWR and loss figures, chart circle geometry
//! - `impedance` - Typed impedance, admittance and reflection coefficient
//! - `component` - Component kinds and L/C/R values from reactance or susceptance
//! - `matching` - L-section, Pi, T, single-stub and quarter-wave synthesis
//! - `trace` - Trajectory segments along the chart loci
//! - `sweep` - Measured reflection data for chart overlays
//! - `frequency` - Frequency points, units and wavelength helpers
//!
//! ## Example
//! ```
//! use num_complex::Complex64;
//! use smith_core::{MatchingCalculator, Trajectory};
//!
//! let calc = MatchingCalculator::new(Complex64::new(50.0, 0.0), Complex64::new(200.0, 0.0), 1e9);
//! let solutions = calc.l_section();
//!
//! let mut trace = Trajectory::default();
//! trace.apply_solution(&solutions[0]);
//! assert!((trace.current_impedance().re - 50.0).abs() < 1e-6);
//! ```

pub mod component;
pub mod constants;
pub mod error;
pub mod frequency;
pub mod impedance;
pub mod matching;
pub mod math;
pub mod sweep;
pub mod trace;

pub use component::{ComponentKind, ComponentValue, Connection};
pub use error::SmithError;
pub use frequency::Frequency;
pub use impedance::{Admittance, Impedance, ReflectionCoefficient};
pub use matching::{MatchingCalculator, MatchingElement, MatchingSolution, MatchingTopology};
pub use sweep::GammaSweep;
pub use trace::{Locus, TracePoint, TraceSegment, Trajectory};
