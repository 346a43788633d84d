//! Matching module - impedance matching network synthesis
//!
//! Produces candidate networks (L-section, Pi, T, single stub and
//! quarter-wave transformer) that transform a load impedance into a source
//! impedance at one design frequency. Each topology lives in its own file as
//! an `impl MatchingCalculator` block.

mod core;
mod ladder;
mod lsection;
mod quarter_wave;
mod stub;

pub use self::core::{MatchingCalculator, MatchingElement, MatchingSolution, MatchingTopology};
