//! Parse error diagnostics.

use crate::lib::std::fmt;
use crate::lib::std::string::String;
use crate::symbol::Symbol;

/// An immutable diagnostic raised by [`expect`][crate::primitive::expect]
/// or by [`cut`][crate::combinator::cut] observing a committed failure.
///
/// `ParseError` is only ever produced by the hard-failure discipline:
/// ordinary `accept` mismatches never construct one. Once raised, a
/// `ParseError` propagates via `?` through every combinator — no
/// combinator in this crate catches one, so it unwinds all the way to the
/// outermost parse call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    message: String,
    row: usize,
    col: usize,
    expectation: String,
    symbol: Symbol,
}

impl ParseError {
    pub(crate) fn new(
        message: impl Into<String>,
        row: usize,
        col: usize,
        expectation: impl Into<String>,
        symbol: Symbol,
    ) -> Self {
        ParseError {
            message: message.into(),
            row,
            col,
            expectation: expectation.into(),
            symbol,
        }
    }

    /// A human-readable description of the failure.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// 1-based row at which the failure occurred.
    pub fn row(&self) -> usize {
        self.row
    }

    /// 1-based column at which the failure occurred.
    pub fn col(&self) -> usize {
        self.col
    }

    /// The name of the predicate or parser that was expected, e.g.
    /// `"digit"` or `"(digit or upper)"`.
    pub fn expectation(&self) -> &str {
        &self.expectation
    }

    /// The symbol actually found at the point of failure.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: expected {}, found {} ({})",
            self.row, self.col, self.expectation, self.symbol, self.message
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_position_and_expectation() {
        let err = ParseError::new("mismatch", 3, 7, "digit", Symbol::new('x'));
        let rendered = err.to_string();
        assert!(rendered.contains("3:7"));
        assert!(rendered.contains("digit"));
        assert!(rendered.contains('x'));
    }
}
