//! The core `Parser` trait and the outcome of a single parse attempt.

use crate::cursor::{CharSource, Cursor};
use crate::error::ParseError;

/// The outcome of a successful call to [`Parser::parse`]: either it
/// matched and produced a value, or it did not.
///
/// `NoMatch` plays the role of a boolean `false`: whether it was a
/// *non-consuming* or *committed* failure is never encoded in `Outcome`
/// itself — it falls out structurally from whether the cursor's byte
/// count moved, which [`Or`][crate::combinator::Or] and [`option`] inspect
/// directly. This is deliberate: a combinator does not need the child to
/// self-report which discipline applied, only to compare cursor positions
/// before and after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The parser matched and consumed its prefix; `T` is the result.
    Matched(T),
    /// The parser did not match.
    NoMatch,
}

impl<T> Outcome<T> {
    /// `true` for [`Outcome::Matched`].
    pub fn is_match(&self) -> bool {
        matches!(self, Outcome::Matched(_))
    }

    /// Converts `Matched(t)` to `Some(t)`, `NoMatch` to `None`.
    pub fn ok(self) -> Option<T> {
        match self {
            Outcome::Matched(t) => Some(t),
            Outcome::NoMatch => None,
        }
    }

    /// Maps the matched value, leaving `NoMatch` untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Matched(t) => Outcome::Matched(f(t)),
            Outcome::NoMatch => Outcome::NoMatch,
        }
    }
}

/// The result channel every parser returns through.
///
/// `Ok(Outcome::Matched(_))` and `Ok(Outcome::NoMatch)` are the two
/// recoverable outcomes; `Err(ParseError)` is hard failure — raised only
/// by [`expect`][crate::primitive::expect] and
/// [`cut`][crate::combinator::cut] — which this crate never catches, so
/// `?` alone unwinds all the way to the outermost parse call.
pub type PResult<T> = Result<Outcome<T>, ParseError>;

/// A stateless, composable parser over a [`CharSource`] `S`.
///
/// Every combinator in this crate is a distinct, monomorphic struct
/// implementing `Parser`; composing parsers builds a new struct type
/// rather than boxing into a trait object, so a fully composed grammar is
/// one inlineable call graph with no virtual dispatch.
pub trait Parser<S: CharSource> {
    /// The value produced on a match.
    type Output;

    /// Attempts to match a prefix of `cursor`'s remaining input.
    ///
    /// On `Ok(Outcome::Matched(_))`, the cursor has advanced past exactly
    /// the consumed symbols. On `Ok(Outcome::NoMatch)`, the cursor may or
    /// may not have advanced — see [`Outcome`]'s docs. On `Err(_)`, the
    /// parse has failed irrecoverably.
    fn parse(&self, cursor: &mut Cursor<S>) -> PResult<Self::Output>;
}

impl<S, F, T> Parser<S> for F
where
    S: CharSource,
    F: Fn(&mut Cursor<S>) -> PResult<T>,
{
    type Output = T;

    fn parse(&self, cursor: &mut Cursor<S>) -> PResult<T> {
        self(cursor)
    }
}

/// Runs a composed parser over a source to completion.
///
/// This is the one place a [`Cursor`] is constructed and discarded for a
/// top-level parse. Trailing input left unconsumed is not an error here
/// — callers that want "parsed the whole input" should sequence the
/// parser with
/// [`expect(eof())`][crate::primitive::expect].
pub fn parse<S, P>(parser: &P, source: S) -> Result<Option<P::Output>, ParseError>
where
    S: CharSource,
    P: Parser<S>,
{
    let mut cursor = Cursor::new(source);
    match parser.parse(&mut cursor)? {
        Outcome::Matched(value) => Ok(Some(value)),
        Outcome::NoMatch => Ok(None),
    }
}
