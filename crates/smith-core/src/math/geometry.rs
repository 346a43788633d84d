//! Smith chart loci and the chart-plane coordinate convention
//!
//! Constant-R/X circles live in the impedance chart, constant-G/B circles in
//! the admittance chart (the impedance chart mirrored through the origin).
//! Every circle is expressed in the Γ-plane.

use num_complex::Complex64;

use crate::constants::{EPSILON, HUGE_IMMITTANCE};

/// A circle in the Γ-plane
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Complex64,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Complex64, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Point on the circle at `angle` radians (counter-clockwise from +re)
    pub fn point_at(&self, angle: f64) -> Complex64 {
        self.center + Complex64::from_polar(self.radius, angle)
    }

    /// Distance of `gamma` from the circle itself (0 when on it)
    pub fn distance(&self, gamma: Complex64) -> f64 {
        ((gamma - self.center).norm() - self.radius).abs()
    }
}

/// Constant normalized resistance circle: center (r/(r+1), 0), radius 1/(r+1)
pub fn constant_r_circle(r: f64) -> Circle {
    Circle::new(Complex64::new(r / (r + 1.0), 0.0), 1.0 / (r + 1.0))
}

/// Constant normalized reactance arc: center (1, 1/x), radius 1/|x|
///
/// For |x| < 1e-12 the arc is the real axis; it is returned as a circle of
/// radius 1e12 centred at (1, 1e12), which passes through the open-circuit
/// point like every other reactance arc.
pub fn constant_x_arc(x: f64) -> Circle {
    if x.abs() < EPSILON {
        return Circle::new(Complex64::new(1.0, HUGE_IMMITTANCE), HUGE_IMMITTANCE);
    }
    Circle::new(Complex64::new(1.0, 1.0 / x), 1.0 / x.abs())
}

/// Constant normalized conductance circle: center (-g/(g+1), 0), radius 1/(g+1)
pub fn constant_g_circle(g: f64) -> Circle {
    Circle::new(Complex64::new(-g / (g + 1.0), 0.0), 1.0 / (g + 1.0))
}

/// Constant normalized susceptance arc: center (-1, -1/b), radius 1/|b|
///
/// Degenerates to the real axis for |b| < 1e-12 (same sentinel as
/// [`constant_x_arc`], mirrored onto the short-circuit point).
pub fn constant_b_arc(b: f64) -> Circle {
    if b.abs() < EPSILON {
        return Circle::new(Complex64::new(-1.0, -HUGE_IMMITTANCE), HUGE_IMMITTANCE);
    }
    Circle::new(Complex64::new(-1.0, -1.0 / b), 1.0 / b.abs())
}

/// Constant-Q circle pair for Q = |X|/R, returned as (inductive, capacitive)
///
/// The inductive locus (X > 0, upper half of the chart) lies on the circle
/// centred at (0, -1/Q); the capacitive one on the circle centred at (0, 1/Q).
/// Both have radius sqrt(1 + 1/Q²) and pass through Γ = ±1.
pub fn constant_q_circles(q: f64) -> (Circle, Circle) {
    let inv_q = 1.0 / q;
    let radius = (1.0 + inv_q * inv_q).sqrt();
    (
        Circle::new(Complex64::new(0.0, -inv_q), radius),
        Circle::new(Complex64::new(0.0, inv_q), radius),
    )
}

/// Affine mapping between the Γ-plane and a drawing plane
///
/// The imaginary axis is flipped (plane y grows downward), so
/// `(re, im) -> (cx + R*re, cy - R*im)`. Arc generation and rendering share
/// this convention.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
}

impl ChartFrame {
    pub fn new(center_x: f64, center_y: f64, radius: f64) -> Self {
        Self {
            center_x,
            center_y,
            radius,
        }
    }

    /// Γ -> plane coordinates
    pub fn gamma_to_plane(&self, gamma: Complex64) -> (f64, f64) {
        (
            self.center_x + gamma.re * self.radius,
            self.center_y - gamma.im * self.radius,
        )
    }

    /// Plane coordinates -> Γ
    pub fn plane_to_gamma(&self, x: f64, y: f64) -> Complex64 {
        Complex64::new(
            (x - self.center_x) / self.radius,
            -(y - self.center_y) / self.radius,
        )
    }

    /// Map a circle into the plane as (center_x, center_y, radius)
    pub fn circle_to_plane(&self, circle: &Circle) -> (f64, f64, f64) {
        let (cx, cy) = self.gamma_to_plane(circle.center);
        (cx, cy, circle.radius * self.radius)
    }
}
