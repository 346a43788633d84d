//! Frequency module - design frequencies and overlay sweep points
//!
//! Frequencies are stored in Hz. Units only affect parsing and display.
//! Also hosts the free-space wavelength helpers used by the line elements.

use std::str::FromStr;

use crate::constants::{EPSILON, SPEED_OF_LIGHT, TWO_PI};
use crate::error::SmithError;

/// Frequency unit enumeration
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrequencyUnit {
    Hz,
    KHz,
    MHz,
    #[default]
    GHz,
    THz,
}

impl FrequencyUnit {
    /// Get the multiplier to convert to Hz
    pub fn multiplier(&self) -> f64 {
        match self {
            FrequencyUnit::Hz => 1.0,
            FrequencyUnit::KHz => 1e3,
            FrequencyUnit::MHz => 1e6,
            FrequencyUnit::GHz => 1e9,
            FrequencyUnit::THz => 1e12,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FrequencyUnit::Hz => "Hz",
            FrequencyUnit::KHz => "kHz",
            FrequencyUnit::MHz => "MHz",
            FrequencyUnit::GHz => "GHz",
            FrequencyUnit::THz => "THz",
        }
    }

    /// Largest unit that keeps `hz` at or above 1
    pub fn for_hz(hz: f64) -> Self {
        let abs = hz.abs();
        if abs >= 1e12 {
            FrequencyUnit::THz
        } else if abs >= 1e9 {
            FrequencyUnit::GHz
        } else if abs >= 1e6 {
            FrequencyUnit::MHz
        } else if abs >= 1e3 {
            FrequencyUnit::KHz
        } else {
            FrequencyUnit::Hz
        }
    }
}

impl FromStr for FrequencyUnit {
    type Err = SmithError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hz" => Ok(FrequencyUnit::Hz),
            "khz" => Ok(FrequencyUnit::KHz),
            "mhz" => Ok(FrequencyUnit::MHz),
            "ghz" => Ok(FrequencyUnit::GHz),
            "thz" => Ok(FrequencyUnit::THz),
            _ => Err(SmithError::UnknownName {
                what: "frequency unit",
                value: s.to_string(),
            }),
        }
    }
}

/// Free-space wavelength λ = c/f in metres, 0 below 1e-12 Hz
pub fn wavelength(freq_hz: f64) -> f64 {
    if freq_hz < EPSILON {
        return 0.0;
    }
    SPEED_OF_LIGHT / freq_hz
}

/// Phase constant β = 2π/λ in rad/m
pub fn phase_constant(freq_hz: f64) -> f64 {
    TWO_PI * freq_hz / SPEED_OF_LIGHT
}

/// Electrical length of `length_m` in degrees at `freq_hz`
pub fn electrical_length_degrees(length_m: f64, freq_hz: f64) -> f64 {
    (phase_constant(freq_hz) * length_m).to_degrees()
}

/// Format a frequency with an automatic unit, e.g. `2.450 GHz`
pub fn format_frequency(freq_hz: f64) -> String {
    let unit = FrequencyUnit::for_hz(freq_hz);
    format!("{:.3} {}", freq_hz / unit.multiplier(), unit.label())
}

/// Frequency points of an overlay sweep, stored in Hz
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Frequency {
    f: Vec<f64>,
}

impl Frequency {
    /// A single design frequency in Hz
    pub fn single(freq_hz: f64) -> Self {
        Self { f: vec![freq_hz] }
    }

    /// Create from points given in `unit`
    ///
    /// # Example
    /// ```
    /// use smith_core::frequency::{Frequency, FrequencyUnit};
    /// let freq = Frequency::from_f(vec![0.9, 2.4, 5.8], FrequencyUnit::GHz);
    /// assert_eq!(freq.npoints(), 3);
    /// assert_eq!(freq.closest_index(2.0e9), Some(1));
    /// ```
    pub fn from_f(f: Vec<f64>, unit: FrequencyUnit) -> Self {
        let mult = unit.multiplier();
        Self {
            f: f.into_iter().map(|x| x * mult).collect(),
        }
    }

    /// Frequency vector in Hz
    #[inline]
    pub fn f(&self) -> &[f64] {
        &self.f
    }

    #[inline]
    pub fn npoints(&self) -> usize {
        self.f.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.f.is_empty()
    }

    /// Smallest point in Hz, independent of ordering
    pub fn min(&self) -> Option<f64> {
        self.f.iter().copied().reduce(f64::min)
    }

    /// Largest point in Hz, independent of ordering
    pub fn max(&self) -> Option<f64> {
        self.f.iter().copied().reduce(f64::max)
    }

    /// Index of the point nearest to `freq_hz`; the first wins on ties
    pub fn closest_index(&self, freq_hz: f64) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &f) in self.f.iter().enumerate() {
            let d = (f - freq_hz).abs();
            match best {
                Some((_, bd)) if bd <= d => {}
                _ => best = Some((i, d)),
            }
        }
        best.map(|(i, _)| i)
    }

    /// Free-space wavelength at every point
    pub fn wavelengths(&self) -> Vec<f64> {
        self.f.iter().map(|&f| wavelength(f)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_f_scales_to_hz() {
        let freq = Frequency::from_f(vec![1.0, 10.0], FrequencyUnit::MHz);
        assert_eq!(freq.f(), &[1e6, 1e7]);
        assert_eq!(freq.min(), Some(1e6));
        assert_eq!(freq.max(), Some(1e7));
    }

    #[test]
    fn test_empty_and_single() {
        let empty = Frequency::from_f(Vec::new(), FrequencyUnit::GHz);
        assert!(empty.is_empty());
        assert_eq!(empty.closest_index(1e9), None);
        assert_eq!(empty.min(), None);

        let single = Frequency::single(2.45e9);
        assert_eq!(single.f(), &[2.45e9]);
        assert_eq!(single.closest_index(0.0), Some(0));
    }

    #[test]
    fn test_closest_index() {
        let freq = Frequency::from_f(vec![1.0, 2.0, 3.0, 4.0], FrequencyUnit::GHz);
        assert_eq!(freq.closest_index(2.2e9), Some(1));
        assert_eq!(freq.closest_index(2.5e9), Some(1));
        assert_eq!(freq.closest_index(9e9), Some(3));
        assert_eq!(freq.closest_index(-1.0), Some(0));
    }

    #[test]
    fn test_wavelength() {
        assert_relative_eq!(wavelength(1e9), 0.299792458, epsilon = 1e-12);
        assert_eq!(wavelength(0.0), 0.0);
        // quarter wave is 90 degrees
        let lambda = wavelength(2.4e9);
        assert_relative_eq!(electrical_length_degrees(lambda / 4.0, 2.4e9), 90.0, epsilon = 1e-9);

        let freq = Frequency::from_f(vec![1.0, 2.0], FrequencyUnit::GHz);
        let lambdas = freq.wavelengths();
        assert_relative_eq!(lambdas[0], 2.0 * lambdas[1], epsilon = 1e-15);
    }

    #[test]
    fn test_format_frequency() {
        assert_eq!(format_frequency(2.45e9), "2.450 GHz");
        assert_eq!(format_frequency(915e6), "915.000 MHz");
        assert_eq!(format_frequency(50.0), "50.000 Hz");
    }

    #[test]
    fn test_frequency_unit_parse() {
        assert_eq!("ghz".parse::<FrequencyUnit>(), Ok(FrequencyUnit::GHz));
        assert_eq!("MHz".parse::<FrequencyUnit>(), Ok(FrequencyUnit::MHz));
        let err = "invalid".parse::<FrequencyUnit>().unwrap_err();
        assert_eq!(err.to_string(), "unknown frequency unit: \"invalid\"");
    }
}
