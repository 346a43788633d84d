//! Reflection coefficient, impedance and admittance conversions
//!
//! All functions are pure. Divisions that can blow up return the documented
//! sentinels from [`crate::constants`] instead of infinities or NaN.

use num_complex::Complex64;
use std::f64::consts::PI;

use crate::constants::{
    EPSILON, HUGE_IMMITTANCE, MISMATCH_LOSS_FLOOR_DB, RETURN_LOSS_FLOOR_DB, VSWR_MAX,
};

const ONE: Complex64 = Complex64::new(1.0, 0.0);

#[inline]
fn huge() -> Complex64 {
    Complex64::new(HUGE_IMMITTANCE, 0.0)
}

/// Convert impedance to reflection coefficient
///
/// Γ = (Z - Z0) / (Z + Z0)
pub fn impedance_to_gamma(z: Complex64, z0: f64) -> Complex64 {
    (z - z0) / (z + z0)
}

/// Convert reflection coefficient to impedance
///
/// Z = Z0 (1 + Γ) / (1 - Γ), or `1e12 + j0` when |1 - Γ| < 1e-12.
pub fn gamma_to_impedance(gamma: Complex64, z0: f64) -> Complex64 {
    let den = ONE - gamma;
    if den.norm() < EPSILON {
        return huge();
    }
    z0 * (ONE + gamma) / den
}

/// Convert admittance to reflection coefficient
///
/// Γ = (Y0 - Y) / (Y0 + Y)
pub fn admittance_to_gamma(y: Complex64, y0: f64) -> Complex64 {
    (y0 - y) / (y0 + y)
}

/// Convert reflection coefficient to admittance
///
/// Y = Y0 (1 - Γ) / (1 + Γ), or `1e12 + j0` when |1 + Γ| < 1e-12.
pub fn gamma_to_admittance(gamma: Complex64, y0: f64) -> Complex64 {
    let den = ONE + gamma;
    if den.norm() < EPSILON {
        return huge();
    }
    y0 * (ONE - gamma) / den
}

/// Convert normalized impedance (Z/Z0) to Γ
pub fn normalized_z_to_gamma(zn: Complex64) -> Complex64 {
    impedance_to_gamma(zn, 1.0)
}

/// Convert Γ to normalized impedance (Z/Z0)
pub fn gamma_to_normalized_z(gamma: Complex64) -> Complex64 {
    gamma_to_impedance(gamma, 1.0)
}

/// Convert normalized admittance (Y/Y0) to Γ
pub fn normalized_y_to_gamma(yn: Complex64) -> Complex64 {
    admittance_to_gamma(yn, 1.0)
}

/// Convert Γ to normalized admittance (Y/Y0)
pub fn gamma_to_normalized_y(gamma: Complex64) -> Complex64 {
    gamma_to_admittance(gamma, 1.0)
}

/// Reciprocal of an impedance, `1e12 + j0` for |Z| < 1e-12
pub fn impedance_to_admittance(z: Complex64) -> Complex64 {
    if z.norm() < EPSILON {
        return huge();
    }
    ONE / z
}

/// Reciprocal of an admittance, `1e12 + j0` for |Y| < 1e-12
pub fn admittance_to_impedance(y: Complex64) -> Complex64 {
    if y.norm() < EPSILON {
        return huge();
    }
    ONE / y
}

/// VSWR from |Γ|
///
/// Saturates to 1e6 for |Γ| >= 1; negative magnitudes are treated as 0.
pub fn gamma_to_vswr(gamma_mag: f64) -> f64 {
    if gamma_mag >= 1.0 {
        return VSWR_MAX;
    }
    let mag = gamma_mag.max(0.0);
    (1.0 + mag) / (1.0 - mag)
}

/// |Γ| from VSWR (values below 1 are clamped to 1)
pub fn vswr_to_gamma(vswr: f64) -> f64 {
    let vswr = vswr.max(1.0);
    (vswr - 1.0) / (vswr + 1.0)
}

/// Return loss in dB, 20·log10|Γ| (negative), or -200 dB for |Γ| < 1e-12
pub fn gamma_to_return_loss(gamma: Complex64) -> f64 {
    let mag = gamma.norm();
    if mag < EPSILON {
        return RETURN_LOSS_FLOOR_DB;
    }
    mag_2_db(mag)
}

/// Mismatch loss in dB, 10·log10(1 - |Γ|²), or -100 dB for |Γ| >= 1
pub fn mismatch_loss_db(gamma: Complex64) -> f64 {
    let mag2 = gamma.norm_sqr();
    if mag2 >= 1.0 {
        return MISMATCH_LOSS_FLOOR_DB;
    }
    10.0 * (1.0 - mag2).log10()
}

/// True when |Γ| <= 1
pub fn is_inside_unit_circle(gamma: Complex64) -> bool {
    gamma.norm() <= 1.0
}

/// Phase of Γ in degrees
pub fn gamma_phase_degrees(gamma: Complex64) -> f64 {
    radian_2_degree(gamma.arg())
}

/// Convert magnitude to dB (20*log10(mag))
pub fn mag_2_db(mag: f64) -> f64 {
    20.0 * mag.log10()
}

/// Convert radians to degrees
pub fn radian_2_degree(rad: f64) -> f64 {
    rad * 180.0 / PI
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_matched_load_is_origin() {
        let g = impedance_to_gamma(Complex64::new(50.0, 0.0), 50.0);
        assert_relative_eq!(g.norm(), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_short_and_open() {
        let short = impedance_to_gamma(Complex64::new(0.0, 0.0), 50.0);
        assert_relative_eq!(short.re, -1.0, epsilon = 1e-15);

        // Γ = 1 is the open circuit; the inverse returns the sentinel
        let z = gamma_to_impedance(Complex64::new(1.0, 0.0), 50.0);
        assert_eq!(z, Complex64::new(HUGE_IMMITTANCE, 0.0));
    }

    #[test]
    fn test_admittance_mirror() {
        // 100 Ω in a 50 Ω system: Γ = 1/3 from either side
        let g_z = impedance_to_gamma(Complex64::new(100.0, 0.0), 50.0);
        let g_y = admittance_to_gamma(Complex64::new(0.01, 0.0), 0.02);
        assert_relative_eq!(g_z.re, g_y.re, epsilon = 1e-12);
        assert_relative_eq!(g_z.re, 1.0 / 3.0, epsilon = 1e-12);

        let y = gamma_to_admittance(g_y, 0.02);
        assert_relative_eq!(y.re, 0.01, epsilon = 1e-15);

        let sentinel = gamma_to_admittance(Complex64::new(-1.0, 0.0), 0.02);
        assert_eq!(sentinel.re, HUGE_IMMITTANCE);
    }

    #[test]
    fn test_normalized_forms() {
        let zn = Complex64::new(2.0, -1.0);
        let back = gamma_to_normalized_z(normalized_z_to_gamma(zn));
        assert_relative_eq!(back.re, 2.0, epsilon = 1e-12);
        assert_relative_eq!(back.im, -1.0, epsilon = 1e-12);

        let yn = Complex64::new(0.5, 0.5);
        let back = gamma_to_normalized_y(normalized_y_to_gamma(yn));
        assert_relative_eq!(back.re, 0.5, epsilon = 1e-12);
        assert_relative_eq!(back.im, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_reciprocal_guard() {
        let y = impedance_to_admittance(Complex64::new(0.0, 0.0));
        assert_eq!(y.re, HUGE_IMMITTANCE);
        let z = admittance_to_impedance(Complex64::new(0.0, 0.02));
        assert_relative_eq!(z.im, -50.0, epsilon = 1e-12);
    }

    #[test]
    fn test_vswr() {
        assert_relative_eq!(gamma_to_vswr(0.0), 1.0);
        assert_relative_eq!(gamma_to_vswr(1.0 / 3.0), 2.0, epsilon = 1e-12);
        assert_eq!(gamma_to_vswr(1.0), VSWR_MAX);
        assert_eq!(gamma_to_vswr(-0.5), 1.0);

        assert_relative_eq!(vswr_to_gamma(2.0), 1.0 / 3.0, epsilon = 1e-12);
        assert_eq!(vswr_to_gamma(0.5), 0.0);
    }

    #[test]
    fn test_return_loss() {
        assert_eq!(gamma_to_return_loss(Complex64::new(0.0, 0.0)), RETURN_LOSS_FLOOR_DB);
        assert_relative_eq!(
            gamma_to_return_loss(Complex64::new(0.1, 0.0)),
            -20.0,
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_mismatch_loss() {
        // |Γ| = 0.5 -> 10*log10(0.75)
        let ml = mismatch_loss_db(Complex64::new(0.0, 0.5));
        assert_relative_eq!(ml, 10.0 * 0.75_f64.log10(), epsilon = 1e-12);
        assert_eq!(mismatch_loss_db(Complex64::new(1.0, 0.0)), MISMATCH_LOSS_FLOOR_DB);
    }

    #[test]
    fn test_phase_and_unit_circle() {
        assert_relative_eq!(gamma_phase_degrees(Complex64::new(0.0, 0.5)), 90.0, epsilon = 1e-10);
        assert!(is_inside_unit_circle(Complex64::new(0.6, 0.7)));
        assert!(!is_inside_unit_circle(Complex64::new(0.9, 0.9)));
    }
}
