//! Sweep module - measured reflection data for chart overlays
//!
//! A [`GammaSweep`] holds one-port reflection samples over frequency, as
//! delivered by a file reader, and derives the impedance, VSWR and return
//! loss vectors the chart overlays plot.

use ndarray::Array1;
use num_complex::Complex64;

use crate::error::{Result, SmithError};
use crate::frequency::Frequency;
use crate::math::conversions::{gamma_to_impedance, gamma_to_return_loss, gamma_to_vswr};
use crate::trace::TracePoint;

/// Reflection coefficient samples over a frequency grid
#[derive(Debug, Clone, PartialEq)]
pub struct GammaSweep {
    frequency: Frequency,
    gamma: Array1<Complex64>,
    z0: f64,
}

impl GammaSweep {
    /// Pair a frequency grid with Γ samples referenced to `z0`
    pub fn new(frequency: Frequency, gamma: Array1<Complex64>, z0: f64) -> Result<Self> {
        if frequency.npoints() != gamma.len() {
            return Err(SmithError::LengthMismatch {
                frequencies: frequency.npoints(),
                samples: gamma.len(),
            });
        }
        if !(z0 > 0.0 && z0.is_finite()) {
            return Err(SmithError::InvalidReference(z0));
        }
        Ok(Self {
            frequency,
            gamma,
            z0,
        })
    }

    #[inline]
    pub fn frequency(&self) -> &Frequency {
        &self.frequency
    }

    #[inline]
    pub fn gamma(&self) -> &Array1<Complex64> {
        &self.gamma
    }

    #[inline]
    pub fn z0(&self) -> f64 {
        self.z0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.gamma.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.gamma.is_empty()
    }

    pub fn min_frequency(&self) -> Option<f64> {
        self.frequency.min()
    }

    pub fn max_frequency(&self) -> Option<f64> {
        self.frequency.max()
    }

    pub fn closest_index(&self, freq_hz: f64) -> Option<usize> {
        self.frequency.closest_index(freq_hz)
    }

    /// Γ at `freq_hz`, linearly interpolated between neighbouring samples
    ///
    /// Below the first sample the line through the first two samples is
    /// extrapolated; above the last sample the last value is returned.
    pub fn gamma_at(&self, freq_hz: f64) -> Option<Complex64> {
        let idx = self.closest_index(freq_hz)?;
        let f = self.frequency.f();
        if f.len() == 1 {
            return Some(self.gamma[0]);
        }

        let (lo, hi) = if f[idx] >= freq_hz && idx > 0 {
            (idx - 1, idx)
        } else if idx + 1 < f.len() {
            (idx, idx + 1)
        } else {
            return Some(self.gamma[idx]);
        };

        let span = f[hi] - f[lo];
        if span.abs() < f64::EPSILON {
            return Some(self.gamma[lo]);
        }
        let t = (freq_hz - f[lo]) / span;
        Some(self.gamma[lo] + (self.gamma[hi] - self.gamma[lo]) * t)
    }

    /// Impedance at every sample
    pub fn impedances(&self) -> Array1<Complex64> {
        self.gamma.mapv(|g| gamma_to_impedance(g, self.z0))
    }

    pub fn vswr(&self) -> Array1<f64> {
        self.gamma.mapv(|g| gamma_to_vswr(g.norm()))
    }

    /// Return loss in dB (negative), -200 dB at a perfect match
    pub fn return_loss_db(&self) -> Array1<f64> {
        self.gamma.mapv(gamma_to_return_loss)
    }

    /// Samples as trace points for the chart overlay
    pub fn points(&self) -> Vec<TracePoint> {
        self.frequency
            .f()
            .iter()
            .zip(self.gamma.iter())
            .map(|(&f, &g)| TracePoint::new(g, gamma_to_impedance(g, self.z0), f))
            .collect()
    }
}
