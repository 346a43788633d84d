//! Python bindings for smith-core
//!
//! This module exposes the Smith chart matching engine to Python via PyO3.
//!
//! ## Classes
//!
//! - `Frequency` - Frequency grid representation
//! - `MatchingCalculator` - Matching network synthesis
//! - `MatchingSolution` / `MatchingElement` - Synthesized networks
//! - `Trajectory` - Impedance path of a component chain
//! - `GammaSweep` - Measured reflection data
//!
//! ## Functions
//!
//! `impedance_to_gamma`, `gamma_to_impedance`, `gamma_to_vswr`,
//! `gamma_to_return_loss`, `classify_impedance`

use num_complex::Complex64;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use smith_core::component;
use smith_core::constants::DEFAULT_Z0;
use smith_core::math;
use smith_core::SmithError;

mod frequency;
mod matching;
mod sweep;
mod trajectory;

pub use frequency::PyFrequency;
pub use matching::{PyMatchingCalculator, PyMatchingElement, PyMatchingSolution};
pub use sweep::PyGammaSweep;
pub use trajectory::PyTrajectory;

/// Map an engine error onto `ValueError`
pub(crate) fn value_error(e: SmithError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Reflection coefficient of `z` against a real reference `z0`
#[pyfunction]
#[pyo3(signature = (z, z0=DEFAULT_Z0))]
fn impedance_to_gamma(z: Complex64, z0: f64) -> Complex64 {
    math::impedance_to_gamma(z, z0)
}

/// Impedance at `gamma`; the open circuit maps to 1e12 + 0j
#[pyfunction]
#[pyo3(signature = (gamma, z0=DEFAULT_Z0))]
fn gamma_to_impedance(gamma: Complex64, z0: f64) -> Complex64 {
    math::gamma_to_impedance(gamma, z0)
}

/// VSWR from |Γ| (saturates at 1e6)
#[pyfunction]
fn gamma_to_vswr(gamma_mag: f64) -> f64 {
    math::gamma_to_vswr(gamma_mag)
}

/// Return loss in dB (-200 dB at a perfect match)
#[pyfunction]
fn gamma_to_return_loss(gamma: Complex64) -> f64 {
    math::gamma_to_return_loss(gamma)
}

/// Component producing the imaginary part of `z` at `frequency` Hz
///
/// Returns:
///     (kind name, value in base units, formatted value)
#[pyfunction]
fn classify_impedance(z: Complex64, frequency: f64) -> (String, f64, String) {
    let value = component::classify(z, frequency);
    (
        value.kind.name().to_string(),
        value.value,
        value.value_with_unit(),
    )
}

/// smith_python - Python bindings for the Smith chart matching engine
///
/// Example:
///     >>> import smith_python as smith
///     >>> calc = smith.MatchingCalculator(50, 200, 1e9)
///     >>> sol = calc.l_section()[0]
///     >>> print(sol.description)
///     >>> trace = smith.Trajectory(200, 1e9)
///     >>> trace.apply_solution(sol)
///     >>> trace.current_impedance
#[pymodule]
fn smith_python(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Add classes with clean names (no Py prefix in Python)
    m.add_class::<PyFrequency>()?;
    m.add_class::<PyMatchingCalculator>()?;
    m.add_class::<PyMatchingSolution>()?;
    m.add_class::<PyMatchingElement>()?;
    m.add_class::<PyTrajectory>()?;
    m.add_class::<PyGammaSweep>()?;

    m.add_function(wrap_pyfunction!(impedance_to_gamma, m)?)?;
    m.add_function(wrap_pyfunction!(gamma_to_impedance, m)?)?;
    m.add_function(wrap_pyfunction!(gamma_to_vswr, m)?)?;
    m.add_function(wrap_pyfunction!(gamma_to_return_loss, m)?)?;
    m.add_function(wrap_pyfunction!(classify_impedance, m)?)?;

    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
