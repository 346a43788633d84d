//! Python bindings for matching network synthesis

use num_complex::Complex64;
use pyo3::prelude::*;
use smith_core::constants::{DEFAULT_FREQUENCY, DEFAULT_TARGET_Q, DEFAULT_Z0};
use smith_core::{MatchingCalculator, MatchingElement, MatchingSolution};

/// One element of a synthesized network
#[pyclass(name = "MatchingElement")]
#[derive(Clone)]
pub struct PyMatchingElement {
    inner: MatchingElement,
}

#[pymethods]
impl PyMatchingElement {
    /// Component kind ('Resistor', 'Inductor', 'Capacitor', ...)
    #[getter]
    pub fn kind(&self) -> &str {
        self.inner.kind.name()
    }

    /// 'Series' or 'Shunt'
    #[getter]
    pub fn connection(&self) -> &str {
        self.inner.connection.name()
    }

    /// Value in base units (Ω, H, F, or metres for line parts)
    #[getter]
    pub fn value(&self) -> f64 {
        self.inner.value
    }

    /// Characteristic impedance of a line part
    #[getter]
    pub fn line_impedance(&self) -> Option<f64> {
        self.inner.line_impedance
    }

    /// Value with SI prefix, e.g. '3.18 pF'
    #[getter]
    pub fn value_string(&self) -> String {
        self.inner.value_string()
    }

    fn __repr__(&self) -> String {
        format!("MatchingElement({})", self.inner.summary())
    }
}

/// A synthesized matching network, elements source side first
#[pyclass(name = "MatchingSolution")]
#[derive(Clone)]
pub struct PyMatchingSolution {
    inner: MatchingSolution,
}

#[pymethods]
impl PyMatchingSolution {
    /// Topology label, e.g. 'Pi-Network'
    #[getter]
    pub fn topology(&self) -> &str {
        self.inner.label()
    }

    #[getter]
    pub fn elements(&self) -> Vec<PyMatchingElement> {
        self.inner
            .elements()
            .iter()
            .map(|&e| PyMatchingElement { inner: e })
            .collect()
    }

    /// Design frequency in Hz
    #[getter]
    pub fn frequency(&self) -> f64 {
        self.inner.frequency()
    }

    #[getter]
    pub fn source_z(&self) -> Complex64 {
        self.inner.source_z()
    }

    #[getter]
    pub fn load_z(&self) -> Complex64 {
        self.inner.load_z()
    }

    /// Reference impedance of the line elements in Ω
    #[getter]
    pub fn z0(&self) -> f64 {
        self.inner.z0()
    }

    /// True when the network reaches its target from the load
    #[getter]
    pub fn valid(&self) -> bool {
        self.inner.is_valid()
    }

    /// Impedance presented at the source end
    #[getter]
    pub fn input_impedance(&self) -> Complex64 {
        self.inner.input_impedance()
    }

    /// Q implied by the termination resistances
    #[getter]
    pub fn network_q(&self) -> f64 {
        self.inner.network_q()
    }

    #[getter]
    pub fn description(&self) -> String {
        self.inner.description()
    }

    /// Component names per element, e.g. ['C1', 'L1', 'C2']
    #[getter]
    pub fn designators(&self) -> Vec<Option<String>> {
        self.inner.designators()
    }

    fn __repr__(&self) -> String {
        format!("MatchingSolution({})", self.inner.description())
    }

    fn __len__(&self) -> usize {
        self.inner.element_count()
    }
}

impl PyMatchingSolution {
    pub fn inner(&self) -> &MatchingSolution {
        &self.inner
    }
}

fn wrap(solutions: Vec<MatchingSolution>) -> Vec<PyMatchingSolution> {
    solutions
        .into_iter()
        .map(|inner| PyMatchingSolution { inner })
        .collect()
}

/// Matching network synthesizer
///
/// Every method returns a (possibly empty) list of candidates.
#[pyclass(name = "MatchingCalculator")]
pub struct PyMatchingCalculator {
    inner: MatchingCalculator,
}

#[pymethods]
impl PyMatchingCalculator {
    /// Create a calculator
    ///
    /// Args:
    ///     source_z: Source impedance in Ω (complex)
    ///     load_z: Load impedance in Ω (complex)
    ///     frequency: Design frequency in Hz
    ///     z0: Reference impedance for the line topologies
    #[new]
    #[pyo3(signature = (source_z, load_z, frequency=DEFAULT_FREQUENCY, z0=DEFAULT_Z0))]
    pub fn new(source_z: Complex64, load_z: Complex64, frequency: f64, z0: f64) -> Self {
        Self {
            inner: MatchingCalculator::new(source_z, load_z, frequency).with_z0(z0),
        }
    }

    #[getter]
    pub fn source_z(&self) -> Complex64 {
        self.inner.source_impedance()
    }

    #[setter]
    pub fn set_source_z(&mut self, zs: Complex64) {
        self.inner.set_source_impedance(zs);
    }

    #[getter]
    pub fn load_z(&self) -> Complex64 {
        self.inner.load_impedance()
    }

    #[setter]
    pub fn set_load_z(&mut self, zl: Complex64) {
        self.inner.set_load_impedance(zl);
    }

    #[getter]
    pub fn frequency(&self) -> f64 {
        self.inner.frequency()
    }

    #[setter]
    pub fn set_frequency(&mut self, freq_hz: f64) {
        self.inner.set_frequency(freq_hz);
    }

    #[getter]
    pub fn z0(&self) -> f64 {
        self.inner.z0()
    }

    #[setter]
    pub fn set_z0(&mut self, z0: f64) {
        self.inner.set_z0(z0);
    }

    /// True when the load already equals the source
    pub fn is_matched(&self) -> bool {
        self.inner.is_matched()
    }

    pub fn l_section(&self) -> Vec<PyMatchingSolution> {
        wrap(self.inner.l_section())
    }

    #[pyo3(signature = (target_q=DEFAULT_TARGET_Q))]
    pub fn pi_network(&self, target_q: f64) -> Vec<PyMatchingSolution> {
        wrap(self.inner.pi_network(target_q))
    }

    #[pyo3(signature = (target_q=DEFAULT_TARGET_Q))]
    pub fn t_network(&self, target_q: f64) -> Vec<PyMatchingSolution> {
        wrap(self.inner.t_network(target_q))
    }

    pub fn single_stub(&self) -> Vec<PyMatchingSolution> {
        wrap(self.inner.single_stub())
    }

    pub fn quarter_wave(&self) -> Vec<PyMatchingSolution> {
        wrap(self.inner.quarter_wave())
    }

    /// L-section, Pi and T candidates
    pub fn calculate_all(&self) -> Vec<PyMatchingSolution> {
        wrap(self.inner.calculate_all())
    }

    fn __repr__(&self) -> String {
        format!(
            "MatchingCalculator(source_z={}, load_z={}, frequency={}, z0={})",
            self.inner.source_impedance(),
            self.inner.load_impedance(),
            self.inner.frequency(),
            self.inner.z0()
        )
    }
}
