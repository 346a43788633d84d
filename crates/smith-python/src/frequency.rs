//! Python bindings for Frequency class

use numpy::{PyArray1, ToPyArray};
use pyo3::prelude::*;
use smith_core::frequency::{format_frequency, Frequency, FrequencyUnit};

use crate::value_error;

/// Frequency points of an overlay sweep
#[pyclass(name = "Frequency")]
#[derive(Clone)]
pub struct PyFrequency {
    inner: Frequency,
}

#[pymethods]
impl PyFrequency {
    /// Create from a list of points
    ///
    /// Args:
    ///     f: Frequency points in `unit`
    ///     unit: Frequency unit ('Hz', 'kHz', 'MHz', 'GHz', 'THz')
    #[staticmethod]
    #[pyo3(signature = (f, unit="Hz"))]
    pub fn from_f(f: Vec<f64>, unit: &str) -> PyResult<Self> {
        let unit: FrequencyUnit = unit.parse().map_err(value_error)?;
        Ok(Self {
            inner: Frequency::from_f(f, unit),
        })
    }

    /// A single design frequency in Hz
    #[staticmethod]
    pub fn single(freq_hz: f64) -> Self {
        Self {
            inner: Frequency::single(freq_hz),
        }
    }

    /// Frequency points in Hz
    #[getter]
    pub fn f<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.f().to_pyarray(py)
    }

    /// Free-space wavelength in metres at every point
    #[getter]
    pub fn wavelengths<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.wavelengths().to_pyarray(py)
    }

    /// Index of the point closest to `freq_hz`, or None when empty
    pub fn closest_index(&self, freq_hz: f64) -> Option<usize> {
        self.inner.closest_index(freq_hz)
    }

    fn __repr__(&self) -> String {
        match (self.inner.min(), self.inner.max()) {
            (Some(lo), Some(hi)) => format!(
                "Frequency({} - {}, {} points)",
                format_frequency(lo),
                format_frequency(hi),
                self.inner.npoints()
            ),
            _ => "Frequency(empty)".to_string(),
        }
    }

    fn __len__(&self) -> usize {
        self.inner.npoints()
    }
}

impl PyFrequency {
    pub fn inner(&self) -> &Frequency {
        &self.inner
    }

    pub fn from_frequency(freq: Frequency) -> Self {
        Self { inner: freq }
    }
}
