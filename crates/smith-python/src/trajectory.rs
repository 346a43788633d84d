//! Python bindings for Trajectory class

use num_complex::Complex64;
use numpy::{PyArray1, ToPyArray};
use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;
use smith_core::constants::{DEFAULT_ARC_POINTS, DEFAULT_FREQUENCY, DEFAULT_Z0};
use smith_core::{ComponentKind, Trajectory};

use crate::matching::PyMatchingSolution;
use crate::value_error;

fn parse_kind(kind: &str) -> PyResult<ComponentKind> {
    kind.parse().map_err(|e| {
        PyValueError::new_err(format!("{}. Use 'R', 'L', 'C', 'TL', 'TLO' or 'TLS'", e))
    })
}

/// Impedance path of a component chain, starting at the load
#[pyclass(name = "Trajectory")]
pub struct PyTrajectory {
    inner: Trajectory,
}

#[pymethods]
impl PyTrajectory {
    /// Create an empty trajectory
    ///
    /// Args:
    ///     load_z: Load impedance in Ω (complex)
    ///     frequency: Frequency in Hz
    ///     z0: Reference impedance in Ω
    ///     arc_points: Samples per segment (at least 2)
    #[new]
    #[pyo3(signature = (load_z, frequency=DEFAULT_FREQUENCY, z0=DEFAULT_Z0, arc_points=DEFAULT_ARC_POINTS))]
    pub fn new(load_z: Complex64, frequency: f64, z0: f64, arc_points: usize) -> PyResult<Self> {
        let mut inner = Trajectory::new(load_z, frequency).with_arc_points(arc_points);
        inner.set_z0(z0).map_err(value_error)?;
        Ok(Self { inner })
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
    pub fn source_z(&self) -> Complex64 {
        self.inner.source_impedance()
    }

    #[setter]
    pub fn set_source_z(&mut self, zs: Complex64) {
        self.inner.set_source_impedance(zs);
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
    pub fn set_z0(&mut self, z0: f64) -> PyResult<()> {
        self.inner.set_z0(z0).map_err(value_error)
    }

    /// Append a series component ('R', 'L' or 'C'; value in Ω, H or F)
    pub fn add_series(&mut self, kind: &str, value: f64) -> PyResult<()> {
        self.inner.add_series(parse_kind(kind)?, value);
        Ok(())
    }

    /// Append a shunt component ('R', 'L' or 'C'; value in Ω, H or F)
    pub fn add_shunt(&mut self, kind: &str, value: f64) -> PyResult<()> {
        self.inner.add_shunt(parse_kind(kind)?, value);
        Ok(())
    }

    /// Change the value of segment `index` and recompute the rest of the path
    pub fn update_segment_value(&mut self, index: usize, value: f64) -> PyResult<()> {
        self.inner
            .update_segment_value(index, value)
            .map_err(|e| PyIndexError::new_err(e.to_string()))
    }

    /// Remove the last segment; returns False when empty
    pub fn remove_last_segment(&mut self) -> bool {
        self.inner.remove_last_segment().is_some()
    }

    pub fn remove_segment(&mut self, index: usize) -> PyResult<()> {
        self.inner
            .remove_segment(index)
            .map(|_| ())
            .map_err(|e| PyIndexError::new_err(e.to_string()))
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Replace the path with a solution replayed from the load
    pub fn apply_solution(&mut self, solution: PyRef<'_, PyMatchingSolution>) {
        self.inner.apply_solution(solution.inner());
    }

    #[getter]
    pub fn current_impedance(&self) -> Complex64 {
        self.inner.current_impedance()
    }

    #[getter]
    pub fn current_gamma(&self) -> Complex64 {
        self.inner.current_gamma()
    }

    #[getter]
    pub fn current_vswr(&self) -> f64 {
        self.inner.current_vswr()
    }

    /// Segment labels, e.g. ['L = 6.89 nH', 'C = 3.18 pF (shunt)']
    #[getter]
    pub fn labels(&self) -> Vec<String> {
        self.inner.segments().iter().map(|s| s.label.clone()).collect()
    }

    /// Γ of every sample of every segment as a complex numpy array
    pub fn gamma_path<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<Complex64>> {
        self.inner.gamma_path().to_pyarray(py)
    }

    /// Γ samples of segment `index`
    pub fn segment_gammas<'py>(
        &self,
        py: Python<'py>,
        index: usize,
    ) -> PyResult<Bound<'py, PyArray1<Complex64>>> {
        let segment = self.inner.segment(index).ok_or_else(|| {
            PyIndexError::new_err(format!("segment index {} out of range", index))
        })?;
        Ok(segment.gammas().to_pyarray(py))
    }

    fn __repr__(&self) -> String {
        format!(
            "Trajectory({} segments, Z = {:.2})",
            self.inner.len(),
            self.inner.current_impedance()
        )
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }
}
