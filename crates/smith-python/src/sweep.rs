//! Python bindings for GammaSweep class

use num_complex::Complex64;
use numpy::{PyArray1, PyReadonlyArray1, ToPyArray};
use pyo3::prelude::*;
use smith_core::constants::DEFAULT_Z0;
use smith_core::GammaSweep;

use crate::frequency::PyFrequency;
use crate::value_error;

/// Measured reflection coefficients over a frequency grid
#[pyclass(name = "GammaSweep")]
pub struct PyGammaSweep {
    inner: GammaSweep,
}

#[pymethods]
impl PyGammaSweep {
    /// Create a sweep
    ///
    /// Args:
    ///     frequency: Frequency grid
    ///     gamma: Complex reflection coefficients, one per point
    ///     z0: Reference impedance in Ω
    #[new]
    #[pyo3(signature = (frequency, gamma, z0=DEFAULT_Z0))]
    pub fn new(
        frequency: PyRef<'_, PyFrequency>,
        gamma: PyReadonlyArray1<'_, Complex64>,
        z0: f64,
    ) -> PyResult<Self> {
        let inner = GammaSweep::new(frequency.inner().clone(), gamma.as_array().to_owned(), z0)
            .map_err(value_error)?;
        Ok(Self { inner })
    }

    #[getter]
    pub fn frequency(&self) -> PyFrequency {
        PyFrequency::from_frequency(self.inner.frequency().clone())
    }

    #[getter]
    pub fn gamma<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<Complex64>> {
        self.inner.gamma().to_pyarray(py)
    }

    /// Γ at `freq_hz`, linearly interpolated; None when empty
    pub fn gamma_at(&self, freq_hz: f64) -> Option<Complex64> {
        self.inner.gamma_at(freq_hz)
    }

    #[getter]
    pub fn impedances<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<Complex64>> {
        self.inner.impedances().to_pyarray(py)
    }

    #[getter]
    pub fn vswr<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.vswr().to_pyarray(py)
    }

    #[getter]
    pub fn return_loss_db<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.return_loss_db().to_pyarray(py)
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }
}
