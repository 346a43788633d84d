//! Trace module - impedance trajectories on the Smith chart
//!
//! A [`Trajectory`] starts at the load impedance and appends one
//! [`TraceSegment`] per element. Each segment samples the locus the element
//! moves the impedance along (constant R, X, G or B, or a line rotation).

mod arc;
mod trajectory;

use std::fmt;

use num_complex::Complex64;

use crate::matching::MatchingElement;

pub use arc::ArcSampler;
pub use trajectory::Trajectory;

/// One sample of a trajectory
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TracePoint {
    pub gamma: Complex64,
    pub impedance: Complex64,
    pub frequency: f64,
}

impl TracePoint {
    pub fn new(gamma: Complex64, impedance: Complex64, frequency: f64) -> Self {
        Self {
            gamma,
            impedance,
            frequency,
        }
    }
}

/// The constant-parameter curve a segment follows
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locus {
    ConstantR,
    ConstantX,
    ConstantG,
    ConstantB,
    Other,
}

impl fmt::Display for Locus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Locus::ConstantR => "constant R",
            Locus::ConstantX => "constant X",
            Locus::ConstantG => "constant G",
            Locus::ConstantB => "constant B",
            Locus::Other => "other",
        };
        f.write_str(name)
    }
}

/// The path traced by adding one element
///
/// `index` is the segment's position in its trajectory; renderers key their
/// palette on it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct TraceSegment {
    pub points: Vec<TracePoint>,
    pub locus: Locus,
    pub element: MatchingElement,
    pub index: usize,
    pub label: String,
}

impl TraceSegment {
    pub fn start_point(&self) -> Option<&TracePoint> {
        self.points.first()
    }

    pub fn end_point(&self) -> Option<&TracePoint> {
        self.points.last()
    }

    /// Γ of every sample, in order
    pub fn gammas(&self) -> Vec<Complex64> {
        self.points.iter().map(|p| p.gamma).collect()
    }
}

/// Segment label, e.g. `L = 6.89 nH` or `C = 3.18 pF (shunt)`
pub fn segment_label(element: &MatchingElement) -> String {
    use crate::component::Connection;

    let Some(prefix) = element.kind.designator_prefix() else {
        return "None".to_string();
    };
    match element.connection {
        Connection::Series => format!("{} = {}", prefix, element.value_string()),
        Connection::Shunt => format!("{} = {} (shunt)", prefix, element.value_string()),
    }
}
