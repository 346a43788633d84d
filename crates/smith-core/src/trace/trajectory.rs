//! Stepwise impedance trajectory from the load towards the source

use num_complex::Complex64;

use super::arc::ArcSampler;
use super::{segment_label, Locus, TracePoint, TraceSegment};
use crate::component::{
    capacitor_reactance, capacitor_susceptance, inductor_reactance, inductor_susceptance,
    open_stub_susceptance, short_stub_susceptance, ComponentKind, Connection,
};
use crate::constants::{
    DEFAULT_ARC_POINTS, DEFAULT_FREQUENCY, DEFAULT_Z0, EPSILON, MIN_COMPONENT_VALUE,
};
use crate::error::{Result, SmithError};
use crate::math::conversions::{gamma_to_vswr, impedance_to_gamma};
use crate::matching::{MatchingElement, MatchingSolution};

/// An ordered chain of trace segments starting at the load
///
/// The first point of segment `k` is the last point of segment `k - 1`
/// (the load impedance for `k = 0`). Every edit recomputes the affected
/// segment and everything after it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    segments: Vec<TraceSegment>,
    source_z: Complex64,
    load_z: Complex64,
    z0: f64,
    frequency: f64,
    arc_points: usize,
}

impl Default for Trajectory {
    fn default() -> Self {
        Self {
            segments: Vec::new(),
            source_z: Complex64::new(DEFAULT_Z0, 0.0),
            load_z: Complex64::new(DEFAULT_Z0, 0.0),
            z0: DEFAULT_Z0,
            frequency: DEFAULT_FREQUENCY,
            arc_points: DEFAULT_ARC_POINTS,
        }
    }
}

impl Trajectory {
    /// Empty trajectory from `load_z` at `frequency` Hz, 50 Ω reference
    pub fn new(load_z: Complex64, frequency: f64) -> Self {
        Self {
            load_z,
            frequency,
            ..Self::default()
        }
    }

    /// Samples per segment (at least 2)
    pub fn with_arc_points(mut self, points: usize) -> Self {
        self.arc_points = points.max(2);
        self.recompute_from(0);
        self
    }

    #[inline]
    pub fn source_impedance(&self) -> Complex64 {
        self.source_z
    }

    #[inline]
    pub fn load_impedance(&self) -> Complex64 {
        self.load_z
    }

    #[inline]
    pub fn z0(&self) -> f64 {
        self.z0
    }

    #[inline]
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    #[inline]
    pub fn arc_points(&self) -> usize {
        self.arc_points
    }

    /// Target impedance; does not move the trace
    pub fn set_source_impedance(&mut self, zs: Complex64) {
        self.source_z = zs;
    }

    pub fn set_load_impedance(&mut self, zl: Complex64) {
        self.load_z = zl;
        self.recompute_from(0);
    }

    pub fn set_frequency(&mut self, freq_hz: f64) {
        self.frequency = freq_hz;
        self.recompute_from(0);
    }

    /// Change the reference impedance; rejects z0 <= 0
    pub fn set_z0(&mut self, z0: f64) -> Result<()> {
        if !(z0 > 0.0 && z0.is_finite()) {
            return Err(SmithError::InvalidReference(z0));
        }
        self.z0 = z0;
        self.recompute_from(0);
        Ok(())
    }

    #[inline]
    pub fn segments(&self) -> &[TraceSegment] {
        &self.segments
    }

    pub fn segment(&self, index: usize) -> Option<&TraceSegment> {
        self.segments.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// End of the last segment, or the load when empty
    pub fn current_impedance(&self) -> Complex64 {
        self.segments
            .last()
            .and_then(|s| s.end_point())
            .map(|p| p.impedance)
            .unwrap_or(self.load_z)
    }

    pub fn current_gamma(&self) -> Complex64 {
        impedance_to_gamma(self.current_impedance(), self.z0)
    }

    pub fn current_vswr(&self) -> f64 {
        gamma_to_vswr(self.current_gamma().norm())
    }

    /// Append the segment for `element` and return it
    pub fn add_element(&mut self, element: MatchingElement) -> &TraceSegment {
        let segment = self.build_segment(element, self.current_impedance(), self.segments.len());
        self.segments.push(segment);
        &self.segments[self.segments.len() - 1]
    }

    pub fn add_series(&mut self, kind: ComponentKind, value: f64) -> &TraceSegment {
        self.add_element(MatchingElement::series(kind, value))
    }

    pub fn add_shunt(&mut self, kind: ComponentKind, value: f64) -> &TraceSegment {
        self.add_element(MatchingElement::shunt(kind, value))
    }

    /// The segment `element` would add, without adding it
    pub fn preview_element(&self, element: MatchingElement) -> TraceSegment {
        self.build_segment(element, self.current_impedance(), self.segments.len())
    }

    /// Set the value of segment `index` and recompute it and every later
    /// segment in order
    pub fn update_segment_value(&mut self, index: usize, value: f64) -> Result<()> {
        let len = self.segments.len();
        let segment = self
            .segments
            .get_mut(index)
            .ok_or(SmithError::SegmentIndex { index, len })?;
        segment.element.value = value;
        self.recompute_from(index);
        Ok(())
    }

    pub fn remove_last_segment(&mut self) -> Option<TraceSegment> {
        self.segments.pop()
    }

    /// Remove segment `index` and replay the later elements from its start
    pub fn remove_segment(&mut self, index: usize) -> Result<TraceSegment> {
        let len = self.segments.len();
        if index >= len {
            return Err(SmithError::SegmentIndex { index, len });
        }
        let removed = self.segments.remove(index);
        self.recompute_from(index);
        Ok(removed)
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Replace the trace with `solution`'s network, replayed from the load
    ///
    /// Terminations, frequency and reference impedance all come from the
    /// solution. A non-positive solution z0 leaves the current one in place.
    pub fn apply_solution(&mut self, solution: &MatchingSolution) {
        self.clear();
        self.source_z = solution.source_z();
        self.load_z = solution.load_z();
        self.frequency = solution.frequency();
        let z0 = solution.z0();
        if z0 > 0.0 && z0.is_finite() {
            self.z0 = z0;
        } else {
            log::warn!("solution reference {} Ω ignored, keeping {} Ω", z0, self.z0);
        }
        for element in solution.elements().iter().rev() {
            self.add_element(*element);
        }
    }

    /// (kind, connection, value) of every segment, in trace order
    pub fn elements(&self) -> Vec<(ComponentKind, Connection, f64)> {
        self.segments
            .iter()
            .map(|s| (s.element.kind, s.element.connection, s.element.value))
            .collect()
    }

    /// Γ of every sample of every segment, in order
    pub fn gamma_path(&self) -> Vec<Complex64> {
        self.segments
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.gamma))
            .collect()
    }

    fn sampler(&self) -> ArcSampler {
        ArcSampler::new(self.z0, self.frequency, self.arc_points)
    }

    fn recompute_from(&mut self, index: usize) {
        for k in index..self.segments.len() {
            let start = if k == 0 {
                self.load_z
            } else {
                self.segments[k - 1]
                    .end_point()
                    .map(|p| p.impedance)
                    .unwrap_or(self.load_z)
            };
            let segment = self.build_segment(self.segments[k].element, start, k);
            self.segments[k] = segment;
            log::trace!("recomputed segment {} ({})", k, self.segments[k].label);
        }
    }

    fn build_segment(&self, element: MatchingElement, start: Complex64, index: usize) -> TraceSegment {
        let sampler = self.sampler();
        let f = self.frequency;
        let v = element.value;

        let (locus, points): (Locus, Vec<TracePoint>) = match (element.kind, element.connection) {
            (ComponentKind::Inductor, Connection::Series) => {
                (Locus::ConstantR, sampler.constant_r(start, inductor_reactance(v, f)))
            }
            (ComponentKind::Capacitor, Connection::Series) => {
                let dx = if v > MIN_COMPONENT_VALUE && f > EPSILON {
                    capacitor_reactance(v, f)
                } else {
                    0.0
                };
                (Locus::ConstantR, sampler.constant_r(start, dx))
            }
            (ComponentKind::Resistor, Connection::Series) => {
                (Locus::ConstantX, sampler.constant_x(start, v))
            }
            (ComponentKind::Capacitor, Connection::Shunt) => {
                (Locus::ConstantG, sampler.constant_g(start, capacitor_susceptance(v, f)))
            }
            (ComponentKind::Inductor, Connection::Shunt) => {
                let db = if v > MIN_COMPONENT_VALUE && f > EPSILON {
                    inductor_susceptance(v, f)
                } else {
                    0.0
                };
                (Locus::ConstantG, sampler.constant_g(start, db))
            }
            (ComponentKind::Resistor, Connection::Shunt) => {
                let dg = if v > MIN_COMPONENT_VALUE { 1.0 / v } else { 0.0 };
                (Locus::ConstantB, sampler.constant_b(start, dg))
            }
            (ComponentKind::TransmissionLine, _) => {
                let zc = element.line_impedance_or(self.z0);
                (Locus::Other, sampler.line(start, zc, v))
            }
            (ComponentKind::OpenStub, _) => {
                let zc = element.line_impedance_or(self.z0);
                (Locus::ConstantG, sampler.constant_g(start, open_stub_susceptance(v, zc, f)))
            }
            (ComponentKind::ShortStub, _) => {
                let zc = element.line_impedance_or(self.z0);
                (Locus::ConstantG, sampler.constant_g(start, short_stub_susceptance(v, zc, f)))
            }
            (ComponentKind::None, _) => {
                log::warn!("segment {} has no component; trace stays in place", index);
                (Locus::Other, sampler.stationary(start))
            }
        };

        TraceSegment {
            points,
            locus,
            element,
            index,
            label: segment_label(&element),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn trajectory() -> Trajectory {
        Trajectory::new(Complex64::new(25.0, 0.0), 1e9).with_arc_points(21)
    }

    #[test]
    fn test_empty_trajectory() {
        let t = trajectory();
        assert!(t.is_empty());
        assert_eq!(t.current_impedance(), Complex64::new(25.0, 0.0));
        assert_relative_eq!(t.current_gamma().re, -1.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_series_inductor() {
        let mut t = trajectory();
        let l = 25.0 / (2.0 * PI * 1e9);
        let seg = t.add_series(ComponentKind::Inductor, l);
        assert_eq!(seg.locus, Locus::ConstantR);
        assert_eq!(seg.points.len(), 21);
        assert_eq!(seg.index, 0);
        let z = t.current_impedance();
        assert_relative_eq!(z.re, 25.0);
        assert_relative_eq!(z.im, 25.0, epsilon = 1e-9);
    }

    #[test]
    fn test_chaining_is_exact() {
        let mut t = trajectory();
        t.add_series(ComponentKind::Inductor, 4e-9);
        t.add_shunt(ComponentKind::Capacitor, 2e-12);
        t.add_series(ComponentKind::Resistor, 10.0);
        t.add_shunt(ComponentKind::Resistor, 500.0);
        let segs = t.segments();
        assert_eq!(segs[0].points[0].impedance, t.load_impedance());
        for pair in segs.windows(2) {
            let end = pair[0].points.last().map(|p| p.impedance);
            assert_eq!(Some(pair[1].points[0].impedance), end);
        }
        assert_eq!(segs[2].locus, Locus::ConstantX);
        assert_eq!(segs[3].locus, Locus::ConstantB);
    }

    #[test]
    fn test_degenerate_capacitor_is_stationary() {
        let mut t = trajectory();
        t.add_series(ComponentKind::Capacitor, 0.0);
        assert_eq!(t.current_impedance(), Complex64::new(25.0, 0.0));
    }

    #[test]
    fn test_none_element() {
        let mut t = trajectory();
        let seg = t.add_series(ComponentKind::None, 1.0);
        assert_eq!(seg.locus, Locus::Other);
        assert!(seg.points.iter().all(|p| p.impedance == Complex64::new(25.0, 0.0)));
    }

    #[test]
    fn test_update_cascades() {
        let mut t = trajectory();
        t.add_series(ComponentKind::Inductor, 4e-9);
        t.add_shunt(ComponentKind::Capacitor, 2e-12);
        t.update_segment_value(0, 6e-9).unwrap();

        let mut fresh = trajectory();
        fresh.add_series(ComponentKind::Inductor, 6e-9);
        fresh.add_shunt(ComponentKind::Capacitor, 2e-12);
        assert_eq!(t.segments(), fresh.segments());

        assert_eq!(
            t.update_segment_value(5, 1.0),
            Err(SmithError::SegmentIndex { index: 5, len: 2 })
        );
    }

    #[test]
    fn test_remove_segment_replays() {
        let mut t = trajectory();
        t.add_series(ComponentKind::Inductor, 4e-9);
        t.add_shunt(ComponentKind::Capacitor, 2e-12);
        t.add_series(ComponentKind::Capacitor, 5e-12);
        let removed = t.remove_segment(1).unwrap();
        assert_eq!(removed.element.kind, ComponentKind::Capacitor);

        let mut fresh = trajectory();
        fresh.add_series(ComponentKind::Inductor, 4e-9);
        fresh.add_series(ComponentKind::Capacitor, 5e-12);
        assert_eq!(t.segments(), fresh.segments());
        assert_eq!(t.segments()[1].index, 1);

        assert!(t.remove_last_segment().is_some());
        assert_eq!(t.len(), 1);
        assert!(t.remove_segment(3).is_err());
    }

    #[test]
    fn test_preview_does_not_push() {
        let t = trajectory();
        let seg = t.preview_element(MatchingElement::shunt(ComponentKind::Inductor, 10e-9));
        assert_eq!(seg.locus, Locus::ConstantG);
        assert!(t.is_empty());
    }

    #[test]
    fn test_setters_recompute() {
        let mut t = trajectory();
        t.add_series(ComponentKind::Inductor, 4e-9);
        let before = t.current_impedance();
        t.set_frequency(2e9);
        assert_relative_eq!(t.current_impedance().im, 2.0 * before.im, epsilon = 1e-9);

        t.set_load_impedance(Complex64::new(75.0, 0.0));
        assert_eq!(t.segments()[0].points[0].impedance, Complex64::new(75.0, 0.0));

        let g_before = t.current_gamma();
        t.set_z0(75.0).unwrap();
        assert!(t.current_gamma() != g_before);
        assert!(t.set_z0(0.0).is_err());
    }

    #[test]
    fn test_elements_listing() {
        let mut t = trajectory();
        t.add_series(ComponentKind::Inductor, 4e-9);
        t.add_shunt(ComponentKind::Capacitor, 2e-12);
        assert_eq!(
            t.elements(),
            vec![
                (ComponentKind::Inductor, Connection::Series, 4e-9),
                (ComponentKind::Capacitor, Connection::Shunt, 2e-12),
            ]
        );
        assert_eq!(t.gamma_path().len(), 42);
    }
}
