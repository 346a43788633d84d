//! Arc sampling along the Smith chart loci
//!
//! Every generator returns `points` samples. Sample 0 is the start impedance
//! itself, untouched, so consecutive segments chain exactly; sample `i` for
//! `i > 0` is evaluated at `t = i / (points - 1)`.

use num_complex::Complex64;

use super::TracePoint;
use crate::constants::{CONDUCTANCE_FLOOR, EPSILON, HUGE_IMMITTANCE, RESISTANCE_FLOOR};
use crate::frequency::phase_constant;
use crate::math::conversions::{admittance_to_impedance, impedance_to_admittance, impedance_to_gamma};

/// Samples loci in a fixed reference system at one frequency
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSampler {
    pub z0: f64,
    pub frequency: f64,
    pub points: usize,
}

impl ArcSampler {
    /// `points` is raised to at least 2
    pub fn new(z0: f64, frequency: f64, points: usize) -> Self {
        Self {
            z0,
            frequency,
            points: points.max(2),
        }
    }

    fn point(&self, z: Complex64) -> TracePoint {
        TracePoint::new(impedance_to_gamma(z, self.z0), z, self.frequency)
    }

    /// Sample 0 is `start`; the rest come from `f(t)`
    fn sample<F>(&self, start: Complex64, f: F) -> Vec<TracePoint>
    where
        F: Fn(f64) -> Complex64,
    {
        let n = self.points;
        let mut out = Vec::with_capacity(n);
        out.push(self.point(start));
        for i in 1..n {
            let t = i as f64 / (n - 1) as f64;
            out.push(self.point(f(t)));
        }
        out
    }

    /// Series reactance step: R fixed, X from X0 to X0 + ΔX
    pub fn constant_r(&self, start: Complex64, delta_x: f64) -> Vec<TracePoint> {
        let (r, x0) = (start.re, start.im);
        self.sample(start, |t| Complex64::new(r, x0 + t * delta_x))
    }

    /// Series resistance step: X fixed, R from R0 to R0 + ΔR (floored at 1e-3 Ω)
    pub fn constant_x(&self, start: Complex64, delta_r: f64) -> Vec<TracePoint> {
        let (r0, x) = (start.re, start.im);
        self.sample(start, |t| {
            Complex64::new((r0 + t * delta_r).max(RESISTANCE_FLOOR), x)
        })
    }

    /// Shunt susceptance step: G fixed, B from B0 to B0 + ΔB
    pub fn constant_g(&self, start: Complex64, delta_b: f64) -> Vec<TracePoint> {
        let y = impedance_to_admittance(start);
        let (g, b0) = (y.re, y.im);
        self.sample(start, |t| {
            admittance_to_impedance(Complex64::new(g, b0 + t * delta_b))
        })
    }

    /// Shunt conductance step: B fixed, G from G0 to G0 + ΔG (floored at 1e-3 S)
    pub fn constant_b(&self, start: Complex64, delta_g: f64) -> Vec<TracePoint> {
        let y = impedance_to_admittance(start);
        let (g0, b) = (y.re, y.im);
        self.sample(start, |t| {
            admittance_to_impedance(Complex64::new((g0 + t * delta_g).max(CONDUCTANCE_FLOOR), b))
        })
    }

    /// Lossless line of impedance `zc` and `length` metres, sampled along
    /// its length
    pub fn line(&self, start: Complex64, zc: f64, length: f64) -> Vec<TracePoint> {
        let beta = phase_constant(self.frequency);
        let j = Complex64::i();
        self.sample(start, |t| {
            let tan = (beta * length * t).tan();
            let den = zc + j * start * tan;
            if den.norm() < EPSILON {
                return Complex64::new(HUGE_IMMITTANCE, 0.0);
            }
            zc * (start + j * zc * tan) / den
        })
    }

    /// All samples at `start`
    pub fn stationary(&self, start: Complex64) -> Vec<TracePoint> {
        vec![self.point(start); self.points]
    }
}
