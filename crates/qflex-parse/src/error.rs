//! Error types for the grid and circuit readers.

use thiserror::Error;

/// Errors that can occur during parsing.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// Grid rows have inconsistent column counts.
    #[error("Number of columns in grid is not consistent: row {row} has {found}, expected {expected}")]
    Shape {
        /// Zero-based index of the first offending data row.
        row: usize,
        /// Column count of the first data row.
        expected: usize,
        /// Column count of the offending row.
        found: usize,
    },

    /// Grid stream contains no data rows.
    #[error("Grid contains no rows")]
    EmptyGrid,

    /// Malformed instruction line.
    #[error("Syntax error: {0}")]
    Syntax(String),

    /// Gate name not in the vocabulary.
    #[error("Gate {name} not supported yet")]
    UnsupportedGate {
        /// The offending gate token.
        name: String,
    },

    /// Wrong number of parameters.
    #[error("Gate '{gate}' expects {expected} parameters, got {got}")]
    WrongParameterCount {
        gate: String,
        expected: usize,
        got: usize,
    },

    /// Qubit index not marked as occupied in the grid.
    #[error("Qubit index {index} is not an occupied grid site")]
    UnknownQubit {
        /// The unresolved linear index.
        index: usize,
    },

    /// Failure while reading an input stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// IR error during circuit construction.
    #[error("Circuit error: {0}")]
    Circuit(#[from] qflex_ir::IrError),

    /// A failure attributed to one line of circuit text.
    #[error("line {line}: {source} (in '{text}')")]
    Line {
        /// 1-based line number.
        line: usize,
        /// The raw line as read.
        text: String,
        /// The underlying failure.
        #[source]
        source: Box<ParseError>,
    },
}

impl ParseError {
    pub(crate) fn syntax(message: impl Into<String>) -> Self {
        ParseError::Syntax(message.into())
    }

    /// Wrap this error with the line it came from.
    #[must_use]
    pub fn at_line(self, line: usize, text: impl Into<String>) -> Self {
        ParseError::Line {
            line,
            text: text.into(),
            source: Box::new(self),
        }
    }

    /// The innermost cause, skipping line context.
    pub fn root(&self) -> &ParseError {
        match self {
            ParseError::Line { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_unwraps_line_context() {
        let err = ParseError::UnknownQubit { index: 9 }.at_line(4, "0 h 9");
        assert!(matches!(err.root(), ParseError::UnknownQubit { index: 9 }));
        let msg = err.to_string();
        assert!(msg.contains("line 4"));
        assert!(msg.contains("0 h 9"));
    }
}
