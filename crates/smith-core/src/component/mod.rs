//! Component value extraction
//!
//! Physical component kinds, connections and values, the conversions between
//! reactance/susceptance and L/C at a frequency, and the derived presentation
//! of values with SI prefixes.
//!
//! Values are always stored in base units (Ω, H, F, or metres for line
//! elements). Prefix scaling is computed on demand for display and never
//! feeds back into computation.

mod extract;

use std::fmt;
use std::str::FromStr;

use crate::error::SmithError;

pub use extract::*;

/// Kind of element in a matching network or trajectory
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ComponentKind {
    Resistor,
    Inductor,
    Capacitor,
    TransmissionLine,
    OpenStub,
    ShortStub,
    #[default]
    None,
}

impl ComponentKind {
    /// Designator prefix used for component names ("R", "L", "C", ...)
    pub fn designator_prefix(&self) -> Option<&'static str> {
        match self {
            ComponentKind::Resistor => Some("R"),
            ComponentKind::Inductor => Some("L"),
            ComponentKind::Capacitor => Some("C"),
            ComponentKind::TransmissionLine => Some("TL"),
            ComponentKind::OpenStub => Some("TLO"),
            ComponentKind::ShortStub => Some("TLS"),
            ComponentKind::None => None,
        }
    }

    /// Component name at a 1-based position, e.g. `L1`
    pub fn designator(&self, position: usize) -> Option<String> {
        self.designator_prefix()
            .map(|prefix| format!("{}{}", prefix, position))
    }

    /// Base unit symbol
    pub fn unit_symbol(&self) -> &'static str {
        match self {
            ComponentKind::Resistor => "Ω",
            ComponentKind::Inductor => "H",
            ComponentKind::Capacitor => "F",
            ComponentKind::TransmissionLine | ComponentKind::OpenStub | ComponentKind::ShortStub => {
                "m"
            }
            ComponentKind::None => "",
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            ComponentKind::Resistor => "Resistor",
            ComponentKind::Inductor => "Inductor",
            ComponentKind::Capacitor => "Capacitor",
            ComponentKind::TransmissionLine => "Transmission Line",
            ComponentKind::OpenStub => "Open Stub",
            ComponentKind::ShortStub => "Short Stub",
            ComponentKind::None => "None",
        }
    }

    /// True for elements described by a length and a characteristic impedance
    pub fn is_line(&self) -> bool {
        match self {
            ComponentKind::TransmissionLine | ComponentKind::OpenStub | ComponentKind::ShortStub => {
                true
            }
            ComponentKind::Resistor
            | ComponentKind::Inductor
            | ComponentKind::Capacitor
            | ComponentKind::None => false,
        }
    }
}

/// Parses a designator prefix or name, case-insensitive
impl FromStr for ComponentKind {
    type Err = SmithError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "r" | "resistor" => Ok(ComponentKind::Resistor),
            "l" | "inductor" => Ok(ComponentKind::Inductor),
            "c" | "capacitor" => Ok(ComponentKind::Capacitor),
            "tl" | "line" | "transmissionline" => Ok(ComponentKind::TransmissionLine),
            "tlo" | "openstub" => Ok(ComponentKind::OpenStub),
            "tls" | "shortstub" => Ok(ComponentKind::ShortStub),
            "none" => Ok(ComponentKind::None),
            _ => Err(SmithError::UnknownName {
                what: "component kind",
                value: s.to_string(),
            }),
        }
    }
}

/// How an element is inserted into the signal path
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Connection {
    #[default]
    Series,
    Shunt,
}

impl Connection {
    pub fn name(&self) -> &'static str {
        match self {
            Connection::Series => "Series",
            Connection::Shunt => "Shunt",
        }
    }
}

impl FromStr for Connection {
    type Err = SmithError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "series" => Ok(Connection::Series),
            "shunt" | "parallel" => Ok(Connection::Shunt),
            _ => Err(SmithError::UnknownName {
                what: "connection",
                value: s.to_string(),
            }),
        }
    }
}

/// A physical component value at a frequency
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentValue {
    pub kind: ComponentKind,
    /// Value in base units (Ω, H, F)
    pub value: f64,
    /// Frequency in Hz the value was extracted at
    pub frequency: f64,
}

impl ComponentValue {
    pub fn new(kind: ComponentKind, value: f64, frequency: f64) -> Self {
        Self {
            kind,
            value,
            frequency,
        }
    }

    /// "No component needed"
    pub fn none() -> Self {
        Self::new(ComponentKind::None, 0.0, 0.0)
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        self.kind == ComponentKind::None
    }

    /// Value scaled to its display prefix
    pub fn scaled_value(&self) -> f64 {
        scale_for(self.kind, self.value).0
    }

    /// SI prefix matching [`Self::scaled_value`]
    pub fn unit_prefix(&self) -> &'static str {
        scale_for(self.kind, self.value).1
    }

    pub fn unit_symbol(&self) -> &'static str {
        self.kind.unit_symbol()
    }

    /// e.g. `2.757 nH`
    pub fn value_with_unit(&self) -> String {
        format_value(self.kind, self.value, 3)
    }
}

impl Default for ComponentValue {
    fn default() -> Self {
        Self::none()
    }
}

impl fmt::Display for ComponentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value_with_unit())
    }
}

/// Scale a base value to (scaled, prefix) for its kind
///
/// Resistors use k/M, inductors m/µ/n/p, capacitors µ/n/p/f, line lengths mm.
pub fn scale_for(kind: ComponentKind, value: f64) -> (f64, &'static str) {
    let abs = value.abs();
    match kind {
        ComponentKind::Resistor => {
            if abs >= 1e6 {
                (value / 1e6, "M")
            } else if abs >= 1e3 {
                (value / 1e3, "k")
            } else {
                (value, "")
            }
        }
        ComponentKind::Inductor => {
            if abs >= 1e-3 {
                (value * 1e3, "m")
            } else if abs >= 1e-6 {
                (value * 1e6, "µ")
            } else if abs >= 1e-9 {
                (value * 1e9, "n")
            } else {
                (value * 1e12, "p")
            }
        }
        ComponentKind::Capacitor => {
            if abs >= 1e-6 {
                (value * 1e6, "µ")
            } else if abs >= 1e-9 {
                (value * 1e9, "n")
            } else if abs >= 1e-12 {
                (value * 1e12, "p")
            } else {
                (value * 1e15, "f")
            }
        }
        ComponentKind::TransmissionLine | ComponentKind::OpenStub | ComponentKind::ShortStub => {
            (value * 1e3, "m")
        }
        ComponentKind::None => (value, ""),
    }
}

/// Format a base value with its prefix and unit, e.g. `1.59 pF`
pub fn format_value(kind: ComponentKind, value: f64, precision: usize) -> String {
    let (scaled, prefix) = scale_for(kind, value);
    let unit = kind.unit_symbol();
    if unit.is_empty() {
        format!("{:.*}", precision, scaled)
    } else {
        format!("{:.*} {}{}", precision, scaled, prefix, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_designators() {
        assert_eq!(ComponentKind::Resistor.designator(3).as_deref(), Some("R3"));
        assert_eq!(ComponentKind::Inductor.designator(1).as_deref(), Some("L1"));
        assert_eq!(ComponentKind::OpenStub.designator(2).as_deref(), Some("TLO2"));
        assert_eq!(ComponentKind::None.designator(1), None);
    }

    #[test]
    fn test_prefix_scaling() {
        let l = ComponentValue::new(ComponentKind::Inductor, 2.757e-9, 1e9);
        assert_relative_eq!(l.scaled_value(), 2.757, epsilon = 1e-9);
        assert_eq!(l.unit_prefix(), "n");
        assert_eq!(l.value_with_unit(), "2.757 nH");

        let c = ComponentValue::new(ComponentKind::Capacitor, 4.7e-15, 1e9);
        assert_eq!(c.unit_prefix(), "f");

        let r = ComponentValue::new(ComponentKind::Resistor, 4700.0, 0.0);
        assert_eq!(r.to_string(), "4.700 kΩ");

        assert_eq!(format_value(ComponentKind::TransmissionLine, 0.0125, 2), "12.50 mm");
    }

    #[test]
    fn test_scaling_does_not_touch_base_value() {
        let c = ComponentValue::new(ComponentKind::Capacitor, 1.5e-12, 1e9);
        let _ = c.value_with_unit();
        assert_eq!(c.value, 1.5e-12);
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("L".parse::<ComponentKind>(), Ok(ComponentKind::Inductor));
        assert_eq!("shortstub".parse::<ComponentKind>(), Ok(ComponentKind::ShortStub));
        assert_eq!("Parallel".parse::<Connection>(), Ok(Connection::Shunt));
        assert_eq!(
            "x".parse::<ComponentKind>(),
            Err(SmithError::UnknownName {
                what: "component kind",
                value: "x".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_error_message() {
        let err = "diagonal".parse::<Connection>().unwrap_err();
        assert_eq!(err.to_string(), "unknown connection: \"diagonal\"");
    }
}
