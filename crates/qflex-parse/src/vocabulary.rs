//! The fixed gate vocabulary of the circuit text format.

use std::fmt;

use qflex_ir::{Gate, StandardGate};

use crate::error::{ParseError, ParseResult};

/// A gate name accepted by the circuit format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateName {
    H,
    X,
    Z,
    T,
    X12,
    Y12,
    H12,
    CZ,
    CX,
    Rz,
}

/// How a vocabulary entry builds its gate.
#[derive(Debug, Clone, Copy)]
pub enum Constructor {
    /// A fixed gate, takes no parameters.
    Fixed(StandardGate),
    /// A gate built from exactly `arity` parameters.
    Parameterized {
        /// Number of parameters.
        arity: usize,
        /// Builder from the parameter list.
        build: fn(&[f64]) -> StandardGate,
    },
}

impl GateName {
    /// Every entry of the vocabulary.
    pub const ALL: [GateName; 10] = [
        GateName::H,
        GateName::X,
        GateName::Z,
        GateName::T,
        GateName::X12,
        GateName::Y12,
        GateName::H12,
        GateName::CZ,
        GateName::CX,
        GateName::Rz,
    ];

    /// Look up a gate by its case-sensitive name.
    pub fn from_name(name: &str) -> Option<Self> {
        let gate = match name {
            "h" => GateName::H,
            "x" => GateName::X,
            "z" => GateName::Z,
            "t" => GateName::T,
            "x_1_2" => GateName::X12,
            "y_1_2" => GateName::Y12,
            "h_1_2" => GateName::H12,
            "cz" => GateName::CZ,
            "cx" => GateName::CX,
            "rz" => GateName::Rz,
            _ => return None,
        };
        Some(gate)
    }

    /// Look up a gate, failing for names outside the vocabulary.
    pub fn lookup(name: &str) -> ParseResult<Self> {
        Self::from_name(name).ok_or_else(|| ParseError::UnsupportedGate {
            name: name.to_string(),
        })
    }

    /// The canonical name.
    pub fn as_str(self) -> &'static str {
        match self {
            GateName::H => "h",
            GateName::X => "x",
            GateName::Z => "z",
            GateName::T => "t",
            GateName::X12 => "x_1_2",
            GateName::Y12 => "y_1_2",
            GateName::H12 => "h_1_2",
            GateName::CZ => "cz",
            GateName::CX => "cx",
            GateName::Rz => "rz",
        }
    }

    /// The constructor behind this name.
    pub fn constructor(self) -> Constructor {
        match self {
            GateName::H => Constructor::Fixed(StandardGate::H),
            GateName::X => Constructor::Fixed(StandardGate::X),
            GateName::Z => Constructor::Fixed(StandardGate::Z),
            GateName::T => Constructor::Fixed(StandardGate::T),
            GateName::X12 => Constructor::Fixed(StandardGate::SqrtX),
            GateName::Y12 => Constructor::Fixed(StandardGate::SqrtY),
            GateName::H12 => Constructor::Fixed(StandardGate::SqrtH),
            GateName::CZ => Constructor::Fixed(StandardGate::CZ),
            GateName::CX => Constructor::Fixed(StandardGate::CX),
            GateName::Rz => Constructor::Parameterized {
                arity: 1,
                build: |p| StandardGate::Rz(p[0]),
            },
        }
    }

    /// Whether the gate is written with a parameter list.
    pub fn expects_params(self) -> bool {
        matches!(self.constructor(), Constructor::Parameterized { .. })
    }

    /// Build the gate from an optional parameter list.
    ///
    /// An empty list counts as no parameters.
    pub fn build(self, params: Option<&[f64]>) -> ParseResult<Gate> {
        let params = params.unwrap_or_default();
        let gate = match self.constructor() {
            Constructor::Fixed(gate) if params.is_empty() => gate,
            Constructor::Fixed(_) => return Err(self.wrong_count(0, params.len())),
            Constructor::Parameterized { arity, build } if params.len() == arity => build(params),
            Constructor::Parameterized { arity, .. } => {
                return Err(self.wrong_count(arity, params.len()));
            }
        };
        Ok(Gate::standard(gate))
    }

    fn wrong_count(self, expected: usize, got: usize) -> ParseError {
        ParseError::WrongParameterCount {
            gate: self.as_str().to_string(),
            expected,
            got,
        }
    }
}

impl fmt::Display for GateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
