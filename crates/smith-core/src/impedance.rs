//! Impedance, admittance and reflection coefficient value types
//!
//! Thin typed wrappers over `Complex64` that carry their reference
//! impedance/admittance. The reference must be positive; the checked
//! constructors return [`SmithError::InvalidReference`] otherwise.

use std::fmt;

use num_complex::Complex64;

use crate::constants::{DEFAULT_Z0, HUGE_IMMITTANCE};
use crate::error::{Result, SmithError};
use crate::math::conversions::{
    admittance_to_gamma, admittance_to_impedance, gamma_phase_degrees, gamma_to_admittance,
    gamma_to_impedance, gamma_to_return_loss, gamma_to_vswr, impedance_to_admittance,
    impedance_to_gamma, mismatch_loss_db,
};

fn check_reference(reference: f64) -> Result<f64> {
    if reference > 0.0 && reference.is_finite() {
        Ok(reference)
    } else {
        Err(SmithError::InvalidReference(reference))
    }
}

fn fmt_rect(f: &mut fmt::Formatter<'_>, value: Complex64, precision: usize) -> fmt::Result {
    let sign = if value.im >= 0.0 { '+' } else { '-' };
    write!(
        f,
        "{:.*} {} j{:.*}",
        precision,
        value.re,
        sign,
        precision,
        value.im.abs()
    )
}

/// Complex impedance Z = R + jX with its reference impedance
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impedance {
    pub value: Complex64,
    z0: f64,
}

impl Impedance {
    /// Impedance referenced to 50 Ω
    pub fn new(r: f64, x: f64) -> Self {
        Self {
            value: Complex64::new(r, x),
            z0: DEFAULT_Z0,
        }
    }

    /// Impedance with an explicit reference (must be > 0)
    pub fn with_reference(value: Complex64, z0: f64) -> Result<Self> {
        Ok(Self {
            value,
            z0: check_reference(z0)?,
        })
    }

    #[inline]
    pub fn z0(&self) -> f64 {
        self.z0
    }

    #[inline]
    pub fn resistance(&self) -> f64 {
        self.value.re
    }

    #[inline]
    pub fn reactance(&self) -> f64 {
        self.value.im
    }

    /// Z / Z0
    pub fn normalized(&self) -> Complex64 {
        self.value / self.z0
    }

    pub fn magnitude(&self) -> f64 {
        self.value.norm()
    }

    pub fn phase_degrees(&self) -> f64 {
        self.value.arg().to_degrees()
    }

    /// 1/Z with reference 1/Z0
    pub fn to_admittance(&self) -> Admittance {
        Admittance {
            value: impedance_to_admittance(self.value),
            y0: 1.0 / self.z0,
        }
    }

    pub fn to_gamma(&self) -> ReflectionCoefficient {
        ReflectionCoefficient {
            gamma: impedance_to_gamma(self.value, self.z0),
            z0: self.z0,
        }
    }

    /// Normalized form, e.g. `1.000 + j0.500`
    pub fn to_normalized_string(&self) -> String {
        let zn = self.normalized();
        let sign = if zn.im >= 0.0 { '+' } else { '-' };
        format!("{:.3} {} j{:.3}", zn.re, sign, zn.im.abs())
    }
}

impl Default for Impedance {
    fn default() -> Self {
        Self::new(DEFAULT_Z0, 0.0)
    }
}

impl fmt::Display for Impedance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_rect(f, self.value, 2)?;
        write!(f, " Ω")
    }
}

/// Complex admittance Y = G + jB with its reference admittance
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Admittance {
    pub value: Complex64,
    y0: f64,
}

impl Admittance {
    /// Admittance referenced to 20 mS (50 Ω)
    pub fn new(g: f64, b: f64) -> Self {
        Self {
            value: Complex64::new(g, b),
            y0: 1.0 / DEFAULT_Z0,
        }
    }

    /// Admittance with an explicit reference (must be > 0)
    pub fn with_reference(value: Complex64, y0: f64) -> Result<Self> {
        Ok(Self {
            value,
            y0: check_reference(y0)?,
        })
    }

    #[inline]
    pub fn y0(&self) -> f64 {
        self.y0
    }

    #[inline]
    pub fn conductance(&self) -> f64 {
        self.value.re
    }

    #[inline]
    pub fn susceptance(&self) -> f64 {
        self.value.im
    }

    /// Y / Y0
    pub fn normalized(&self) -> Complex64 {
        self.value / self.y0
    }

    pub fn to_impedance(&self) -> Impedance {
        Impedance {
            value: admittance_to_impedance(self.value),
            z0: 1.0 / self.y0,
        }
    }

    pub fn to_gamma(&self) -> ReflectionCoefficient {
        ReflectionCoefficient {
            gamma: admittance_to_gamma(self.value, self.y0),
            z0: 1.0 / self.y0,
        }
    }
}

impl fmt::Display for Admittance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.value.im >= 0.0 { '+' } else { '-' };
        write!(
            f,
            "{:.3e} {} j{:.3e} S",
            self.value.re,
            sign,
            self.value.im.abs()
        )
    }
}

/// Reflection coefficient Γ with its reference impedance
///
/// Passivity (|Γ| <= 1) is not enforced; callers may check [`Self::is_passive`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReflectionCoefficient {
    pub gamma: Complex64,
    z0: f64,
}

impl ReflectionCoefficient {
    /// Γ referenced to 50 Ω
    pub fn new(re: f64, im: f64) -> Self {
        Self {
            gamma: Complex64::new(re, im),
            z0: DEFAULT_Z0,
        }
    }

    pub fn with_reference(gamma: Complex64, z0: f64) -> Result<Self> {
        Ok(Self {
            gamma,
            z0: check_reference(z0)?,
        })
    }

    #[inline]
    pub fn z0(&self) -> f64 {
        self.z0
    }

    pub fn magnitude(&self) -> f64 {
        self.gamma.norm()
    }

    pub fn phase_degrees(&self) -> f64 {
        gamma_phase_degrees(self.gamma)
    }

    pub fn vswr(&self) -> f64 {
        gamma_to_vswr(self.magnitude())
    }

    pub fn return_loss_db(&self) -> f64 {
        gamma_to_return_loss(self.gamma)
    }

    pub fn mismatch_loss_db(&self) -> f64 {
        mismatch_loss_db(self.gamma)
    }

    pub fn is_passive(&self) -> bool {
        self.magnitude() <= 1.0
    }

    /// Impedance at this Γ; the open circuit maps to `1e12 + j0`
    pub fn to_impedance(&self) -> Impedance {
        Impedance {
            value: gamma_to_impedance(self.gamma, self.z0),
            z0: self.z0,
        }
    }

    /// Admittance at this Γ; the short circuit maps to `1e12 + j0`
    pub fn to_admittance(&self) -> Admittance {
        Admittance {
            value: gamma_to_admittance(self.gamma, 1.0 / self.z0),
            y0: 1.0 / self.z0,
        }
    }

    /// Rectangular form, e.g. `Γ = 0.3333 + j0.0000`
    pub fn to_rect_string(&self) -> String {
        let sign = if self.gamma.im >= 0.0 { '+' } else { '-' };
        format!("Γ = {:.4} {} j{:.4}", self.gamma.re, sign, self.gamma.im.abs())
    }

    /// Polar form, e.g. `|Γ| = 0.3333  ∠0.0°`
    pub fn to_polar_string(&self) -> String {
        format!(
            "|Γ| = {:.4}  ∠{:.1}°",
            self.magnitude(),
            self.phase_degrees()
        )
    }

    /// True when Γ sits on the open-circuit sentinel
    pub fn is_open_circuit(&self) -> bool {
        self.to_impedance().value.re >= HUGE_IMMITTANCE
    }
}

impl fmt::Display for ReflectionCoefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rect_string())
    }
}
