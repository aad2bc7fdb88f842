//! Parser for single circuit instruction lines.
//!
//! After sanitization a line must read
//!
//! ```text
//! <timestep> <gate>[(<p1>[,<p2>...])] <q1> [<q2> ...]
//! ```

use tracing::trace;

use crate::error::{ParseError, ParseResult};
use crate::sanitize::sanitize;
use crate::vocabulary::GateName;

/// One parsed instruction line, before qubit resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct GateSpec {
    /// Timestep label. Informational only.
    pub timestep: i64,
    /// The vocabulary entry.
    pub gate: GateName,
    /// Parameter list, `None` when the gate was written without one.
    pub params: Option<Vec<f64>>,
    /// Linear grid indices of the operands, in written order.
    pub target_indices: Vec<usize>,
}

impl GateSpec {
    /// Canonical gate name.
    pub fn name(&self) -> &'static str {
        self.gate.as_str()
    }
}

/// Sanitize and parse one raw instruction line.
pub fn parse_gate_line(line: &str) -> ParseResult<GateSpec> {
    let clean = sanitize(line);
    trace!("sanitized '{}' -> '{}'", line.trim_end(), clean);
    parse_sanitized(&clean)
}

/// Parse a line that has already been through [`sanitize`].
pub(crate) fn parse_sanitized(line: &str) -> ParseResult<GateSpec> {
    check_parentheses(line)?;

    let mut tokens = line.split_whitespace();
    let (Some(timestep), Some(gate_token)) = (tokens.next(), tokens.next()) else {
        return Err(ParseError::syntax(format!(
            "expected '<timestep> <gate> <qubit>...', found '{line}'"
        )));
    };

    let timestep = timestep
        .parse::<i64>()
        .map_err(|_| ParseError::syntax(format!("invalid timestep '{timestep}'")))?;

    let target_indices = tokens
        .map(|tok| {
            tok.parse::<usize>()
                .map_err(|_| ParseError::syntax(format!("invalid qubit index '{tok}'")))
        })
        .collect::<ParseResult<Vec<_>>>()?;
    if target_indices.is_empty() {
        return Err(ParseError::syntax(format!(
            "gate '{gate_token}' has no qubits"
        )));
    }

    let (name, params) = split_gate_token(gate_token)?;
    let gate = GateName::lookup(name)?;

    Ok(GateSpec {
        timestep,
        gate,
        params,
        target_indices,
    })
}

/// At most one `(`, and when present exactly one `)` after it.
fn check_parentheses(line: &str) -> ParseResult<()> {
    let opens = line.matches('(').count();
    let closes = line.matches(')').count();
    match (opens, closes) {
        (0, 0) => Ok(()),
        (0, _) => Err(ParseError::syntax("too many close parentheses")),
        (1, 1) if line.find('(') < line.find(')') => Ok(()),
        (1, _) => Err(ParseError::syntax("open parenthesis is not matched")),
        _ => Err(ParseError::syntax("too many open parentheses")),
    }
}

/// Split `name(p1,p2)` into the bare name and its parameters.
///
/// `name()` carries no parameters.
fn split_gate_token(token: &str) -> ParseResult<(&str, Option<Vec<f64>>)> {
    let Some((name, rest)) = token.split_once('(') else {
        return Ok((token, None));
    };
    let inner = rest.replace(')', "");
    if inner.is_empty() {
        return Ok((name, None));
    }
    let params = inner
        .split(',')
        .map(|p| {
            p.parse::<f64>()
                .map_err(|_| ParseError::syntax(format!("invalid parameter '{p}' for '{name}'")))
        })
        .collect::<ParseResult<Vec<_>>>()?;
    Ok((name, Some(params)))
}
