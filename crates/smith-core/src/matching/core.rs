//! Matching network data types and the calculator front end

use std::collections::HashMap;
use std::fmt;

use num_complex::Complex64;

use crate::component::{
    capacitor_reactance, capacitor_susceptance, format_value, inductor_reactance,
    inductor_susceptance, kind_from_reactance, kind_from_susceptance, open_stub_susceptance,
    reactance_to_capacitance, reactance_to_inductance, short_stub_susceptance,
    susceptance_to_capacitance, susceptance_to_inductance, ComponentKind, Connection,
};
use crate::constants::{
    DEFAULT_FREQUENCY, DEFAULT_TARGET_Q, DEFAULT_Z0, EPSILON, HUGE_IMMITTANCE,
    MIN_COMPONENT_VALUE, REACTANCE_SENTINEL,
};
use crate::frequency::phase_constant;
use crate::math::{admittance_to_impedance, impedance_to_admittance};

/// Relative distance from the target below which a candidate counts as closed
const CLOSURE_TOL: f64 = 1e-6;

/// Matching network topology
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchingTopology {
    /// Shunt element on the source side, series element on the load side
    LSection,
    /// Series element on the source side, shunt element on the load side
    LSectionReversed,
    PiNetwork,
    TNetwork,
    SingleStubOpen,
    SingleStubShort,
    QuarterWave,
}

impl MatchingTopology {
    pub fn label(&self) -> &'static str {
        match self {
            MatchingTopology::LSection => "L-Section",
            MatchingTopology::LSectionReversed => "L-Section (Reversed)",
            MatchingTopology::PiNetwork => "Pi-Network",
            MatchingTopology::TNetwork => "T-Network",
            MatchingTopology::SingleStubOpen => "Single Stub (Open)",
            MatchingTopology::SingleStubShort => "Single Stub (Short)",
            MatchingTopology::QuarterWave => "Quarter-Wave",
        }
    }
}

impl fmt::Display for MatchingTopology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One element of a matching network
///
/// `value` is in base units: Ω, H or F for lumped parts and the physical
/// length in metres for line parts, whose characteristic impedance is
/// carried in `line_impedance`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchingElement {
    pub kind: ComponentKind,
    pub connection: Connection,
    pub value: f64,
    pub line_impedance: Option<f64>,
}

impl MatchingElement {
    /// A lumped element
    pub fn new(kind: ComponentKind, connection: Connection, value: f64) -> Self {
        Self {
            kind,
            connection,
            value,
            line_impedance: None,
        }
    }

    pub fn series(kind: ComponentKind, value: f64) -> Self {
        Self::new(kind, Connection::Series, value)
    }

    pub fn shunt(kind: ComponentKind, value: f64) -> Self {
        Self::new(kind, Connection::Shunt, value)
    }

    /// A line element of `length` metres and characteristic impedance `zc`
    pub fn line(kind: ComponentKind, connection: Connection, length: f64, zc: f64) -> Self {
        Self {
            kind,
            connection,
            value: length,
            line_impedance: Some(zc),
        }
    }

    /// Series inductor or capacitor presenting reactance `x` at `freq_hz`
    ///
    /// A reactance below 1e-12 Ω gives a `None` element.
    pub fn from_reactance(x: f64, freq_hz: f64) -> Self {
        match kind_from_reactance(x) {
            ComponentKind::Inductor => {
                Self::series(ComponentKind::Inductor, reactance_to_inductance(x, freq_hz))
            }
            ComponentKind::Capacitor => {
                Self::series(ComponentKind::Capacitor, reactance_to_capacitance(x, freq_hz))
            }
            ComponentKind::Resistor
            | ComponentKind::TransmissionLine
            | ComponentKind::OpenStub
            | ComponentKind::ShortStub
            | ComponentKind::None => Self::series(ComponentKind::None, 0.0),
        }
    }

    /// Shunt capacitor or inductor presenting susceptance `b` at `freq_hz`
    pub fn from_susceptance(b: f64, freq_hz: f64) -> Self {
        match kind_from_susceptance(b) {
            ComponentKind::Capacitor => {
                Self::shunt(ComponentKind::Capacitor, susceptance_to_capacitance(b, freq_hz))
            }
            ComponentKind::Inductor => {
                Self::shunt(ComponentKind::Inductor, susceptance_to_inductance(b, freq_hz))
            }
            ComponentKind::Resistor
            | ComponentKind::TransmissionLine
            | ComponentKind::OpenStub
            | ComponentKind::ShortStub
            | ComponentKind::None => Self::shunt(ComponentKind::None, 0.0),
        }
    }

    /// Characteristic impedance of a line element, `z0` when unset
    pub fn line_impedance_or(&self, z0: f64) -> f64 {
        self.line_impedance.unwrap_or(z0)
    }

    /// Reactance presented by the element at `freq_hz`
    ///
    /// Stubs report their input reactance; resistors and through-lines have
    /// none.
    pub fn reactance(&self, freq_hz: f64) -> f64 {
        match self.kind {
            ComponentKind::Inductor => inductor_reactance(self.value, freq_hz),
            ComponentKind::Capacitor => capacitor_reactance(self.value, freq_hz),
            ComponentKind::OpenStub => {
                let susceptance = self.susceptance(freq_hz);
                if susceptance.abs() < EPSILON {
                    return -REACTANCE_SENTINEL;
                }
                -1.0 / susceptance
            }
            ComponentKind::ShortStub => {
                let zc = self.line_impedance_or(DEFAULT_Z0);
                zc * (phase_constant(freq_hz) * self.value).tan()
            }
            ComponentKind::Resistor | ComponentKind::TransmissionLine | ComponentKind::None => 0.0,
        }
    }

    /// Susceptance presented by the element at `freq_hz`
    pub fn susceptance(&self, freq_hz: f64) -> f64 {
        match self.kind {
            ComponentKind::Inductor => inductor_susceptance(self.value, freq_hz),
            ComponentKind::Capacitor => capacitor_susceptance(self.value, freq_hz),
            ComponentKind::Resistor => {
                if self.value < MIN_COMPONENT_VALUE {
                    0.0
                } else {
                    1.0 / self.value
                }
            }
            ComponentKind::OpenStub => {
                open_stub_susceptance(self.value, self.line_impedance_or(DEFAULT_Z0), freq_hz)
            }
            ComponentKind::ShortStub => {
                short_stub_susceptance(self.value, self.line_impedance_or(DEFAULT_Z0), freq_hz)
            }
            ComponentKind::TransmissionLine | ComponentKind::None => 0.0,
        }
    }

    /// Impedance seen looking into the element with `z` behind it
    pub fn apply_to(&self, z: Complex64, freq_hz: f64) -> Complex64 {
        match (self.kind, self.connection) {
            (ComponentKind::None, _) => z,
            (ComponentKind::Resistor, Connection::Series) => z + self.value,
            (ComponentKind::TransmissionLine, Connection::Series) => {
                let zc = self.line_impedance_or(DEFAULT_Z0);
                let tan = (phase_constant(freq_hz) * self.value).tan();
                let j = Complex64::i();
                let den = zc + j * z * tan;
                if den.norm() < EPSILON {
                    return Complex64::new(HUGE_IMMITTANCE, 0.0);
                }
                zc * (z + j * zc * tan) / den
            }
            (_, Connection::Series) => z + Complex64::new(0.0, self.reactance(freq_hz)),
            (ComponentKind::Resistor, Connection::Shunt) => {
                admittance_to_impedance(impedance_to_admittance(z) + self.susceptance(freq_hz))
            }
            (_, Connection::Shunt) => admittance_to_impedance(
                impedance_to_admittance(z) + Complex64::new(0.0, self.susceptance(freq_hz)),
            ),
        }
    }

    /// Value with SI prefix, e.g. `3.18 pF` or `12.34 mm`
    pub fn value_string(&self) -> String {
        format_value(self.kind, self.value, 2)
    }

    /// Connection, kind (for lines) and value, e.g. `Shunt 3.18 pF`
    pub fn summary(&self) -> String {
        if self.kind.is_line() {
            format!(
                "{} {} {}",
                self.connection.name(),
                self.kind.name(),
                self.value_string()
            )
        } else {
            format!("{} {}", self.connection.name(), self.value_string())
        }
    }

    /// Component name at a 1-based position, e.g. `C1`
    pub fn designator(&self, position: usize) -> Option<String> {
        self.kind.designator(position)
    }

    /// Base value in netlist notation, e.g. `3.183099e-12`
    pub fn netlist_value(&self) -> String {
        format!("{:.6e}", self.value)
    }
}

impl fmt::Display for MatchingElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

/// A synthesized matching network
///
/// Elements are in signal-path order, source side first. Immutable once
/// produced.
///
/// A solution is valid when its elements, applied from the load, reach the
/// target within 1e-6 relative: `z0` for the stub topologies and the source
/// impedance for all others.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct MatchingSolution {
    topology: MatchingTopology,
    elements: Vec<MatchingElement>,
    frequency: f64,
    source_z: Complex64,
    load_z: Complex64,
    z0: f64,
    valid: bool,
}

impl MatchingSolution {
    pub(crate) fn new(
        topology: MatchingTopology,
        elements: Vec<MatchingElement>,
        frequency: f64,
        source_z: Complex64,
        load_z: Complex64,
        z0: f64,
    ) -> Self {
        let mut solution = Self {
            topology,
            elements,
            frequency,
            source_z,
            load_z,
            z0,
            valid: false,
        };
        solution.valid = solution.closes();
        if !solution.valid {
            log::debug!(
                "{} does not close: lands on {} instead of {}",
                topology,
                solution.input_impedance(),
                solution.target_impedance()
            );
        }
        solution
    }

    fn closes(&self) -> bool {
        let target = self.target_impedance();
        (self.input_impedance() - target).norm() <= CLOSURE_TOL * target.norm()
    }

    #[inline]
    pub fn topology(&self) -> MatchingTopology {
        self.topology
    }

    #[inline]
    pub fn elements(&self) -> &[MatchingElement] {
        &self.elements
    }

    #[inline]
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    #[inline]
    pub fn source_z(&self) -> Complex64 {
        self.source_z
    }

    #[inline]
    pub fn load_z(&self) -> Complex64 {
        self.load_z
    }

    /// Reference impedance the line elements were designed against
    #[inline]
    pub fn z0(&self) -> f64 {
        self.z0
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Impedance the network presents at its source end
    pub fn input_impedance(&self) -> Complex64 {
        self.elements
            .iter()
            .rev()
            .fold(self.load_z, |z, elem| elem.apply_to(z, self.frequency))
    }

    /// Impedance the network is meant to present at its source end
    pub fn target_impedance(&self) -> Complex64 {
        match self.topology {
            MatchingTopology::SingleStubOpen | MatchingTopology::SingleStubShort => {
                Complex64::new(self.z0, 0.0)
            }
            MatchingTopology::LSection
            | MatchingTopology::LSectionReversed
            | MatchingTopology::PiNetwork
            | MatchingTopology::TNetwork
            | MatchingTopology::QuarterWave => self.source_z,
        }
    }

    #[inline]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn label(&self) -> &'static str {
        self.topology.label()
    }

    /// Q implied by the resistance ratio, sqrt(Rmax/Rmin - 1)
    pub fn network_q(&self) -> f64 {
        let rs = self.source_z.re;
        let rl = self.load_z.re;
        if rs <= 0.0 || rl <= 0.0 {
            return 0.0;
        }
        (rs.max(rl) / rs.min(rl) - 1.0).sqrt()
    }

    /// e.g. `Pi-Network: Shunt 3.18 pF → Series 6.89 nH → Shunt 1.59 pF`
    pub fn description(&self) -> String {
        if !self.valid {
            return "Invalid solution".to_string();
        }
        let parts: Vec<String> = self.elements.iter().map(|e| e.summary()).collect();
        format!("{}: {}", self.label(), parts.join(" → "))
    }

    /// Component names in signal-path order, numbered per kind (`C1`, `L1`,
    /// `C2`, ...); `None` for elements without a designator
    pub fn designators(&self) -> Vec<Option<String>> {
        let mut counts: HashMap<ComponentKind, usize> = HashMap::new();
        self.elements
            .iter()
            .map(|elem| {
                elem.kind.designator_prefix()?;
                let n = counts.entry(elem.kind).or_insert(0);
                *n += 1;
                elem.designator(*n)
            })
            .collect()
    }
}

impl fmt::Display for MatchingSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

/// Synthesizes matching networks between a source and a load impedance
///
/// Every topology yields an empty list rather than an error when either
/// termination has a non-positive resistance.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchingCalculator {
    pub(crate) source_z: Complex64,
    pub(crate) load_z: Complex64,
    pub(crate) frequency: f64,
    pub(crate) z0: f64,
}

impl Default for MatchingCalculator {
    fn default() -> Self {
        Self {
            source_z: Complex64::new(DEFAULT_Z0, 0.0),
            load_z: Complex64::new(DEFAULT_Z0, 0.0),
            frequency: DEFAULT_FREQUENCY,
            z0: DEFAULT_Z0,
        }
    }
}

impl MatchingCalculator {
    /// Calculator for `source_z` to `load_z` at `frequency` Hz, 50 Ω reference
    pub fn new(source_z: Complex64, load_z: Complex64, frequency: f64) -> Self {
        Self {
            source_z,
            load_z,
            frequency,
            ..Self::default()
        }
    }

    /// Builder-style reference impedance for the line topologies
    pub fn with_z0(mut self, z0: f64) -> Self {
        self.z0 = z0;
        self
    }

    pub fn set_source_impedance(&mut self, zs: Complex64) {
        self.source_z = zs;
    }

    pub fn set_load_impedance(&mut self, zl: Complex64) {
        self.load_z = zl;
    }

    pub fn set_frequency(&mut self, freq_hz: f64) {
        self.frequency = freq_hz;
    }

    pub fn set_z0(&mut self, z0: f64) {
        self.z0 = z0;
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
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    #[inline]
    pub fn z0(&self) -> f64 {
        self.z0
    }

    /// L-section plus Pi and T networks at the default target Q
    pub fn calculate_all(&self) -> Vec<MatchingSolution> {
        let mut solutions = self.l_section();
        solutions.extend(self.pi_network(DEFAULT_TARGET_Q));
        solutions.extend(self.t_network(DEFAULT_TARGET_Q));
        log::debug!("calculate_all: {} candidate(s)", solutions.len());
        solutions
    }

    pub(crate) fn has_resistive_terminations(&self) -> bool {
        self.source_z.re > 0.0 && self.load_z.re > 0.0
    }

    pub(crate) fn solution(
        &self,
        topology: MatchingTopology,
        elements: Vec<MatchingElement>,
    ) -> MatchingSolution {
        MatchingSolution::new(
            topology,
            elements,
            self.frequency,
            self.source_z,
            self.load_z,
            self.z0,
        )
    }
}
