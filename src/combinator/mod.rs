//! Higher-order parsers: ordered choice, sequencing, repetition, and the
//! two reducer-carrying combinators `all` and `any2`/`any3`/`any4`.
//!
//! Sequencing over heterogeneous tuples lives in [`seq`] (tuples of
//! parsers implement [`Parser`] directly); the reducer combinators and
//! their `AltN` sum types live in [`reduce`].

mod reduce;
mod seq;

pub use reduce::{all, any2, any3, any4, Alt2, Alt3, Alt4, All, Any2, Any3, Any4};

use crate::accumulate::Accumulate;
use crate::cursor::{CharSource, Checkpointable, Cursor};
use crate::parser::{Outcome, PResult, Parser};

/// Ordered choice, `p || q`.
///
/// Runs `p`. If it matches, returns that. Otherwise — only if `p` did not
/// consume any input — runs `q`. If `p` failed after consuming, `Or` fails
/// too without trying `q` at all: this is a commit-on-first-consumption
/// discipline, the same one [`cut`] makes explicit for a whole parser.
#[derive(Clone)]
pub struct Or<P, Q> {
    p: P,
    q: Q,
}

impl<P, Q> Or<P, Q> {
    /// Builds the ordered choice `p || q`. Both alternatives must share an
    /// `Output` type; the typical use composes parsers that already agree
    /// on their result type, so this is rarely a burden in practice.
    pub fn new(p: P, q: Q) -> Self {
        Or { p, q }
    }
}

impl<S, P, Q> Parser<S> for Or<P, Q>
where
    S: CharSource,
    P: Parser<S>,
    Q: Parser<S, Output = P::Output>,
{
    type Output = P::Output;

    fn parse(&self, cursor: &mut Cursor<S>) -> PResult<P::Output> {
        let before = cursor.position().byte_count;
        match self.p.parse(cursor)? {
            Outcome::Matched(value) => Ok(Outcome::Matched(value)),
            Outcome::NoMatch if cursor.position().byte_count == before => self.q.parse(cursor),
            Outcome::NoMatch => Ok(Outcome::NoMatch),
        }
    }
}

/// Builds the ordered choice `p || q`.
pub fn or<P, Q>(p: P, q: Q) -> Or<P, Q> {
    Or::new(p, q)
}

/// `option(p)` ≡ `p || succ`: zero or one match.
///
/// Rendered idiomatically as `Option<P::Output>` rather than trying to
/// merge `p`'s output type with `succ`'s unit output into one "least
/// general" type — see DESIGN.md's Open Questions for why.
#[derive(Clone)]
pub struct Opt<P> {
    p: P,
}

impl<S, P> Parser<S> for Opt<P>
where
    S: CharSource,
    P: Parser<S>,
{
    type Output = Option<P::Output>;

    fn parse(&self, cursor: &mut Cursor<S>) -> PResult<Option<P::Output>> {
        let before = cursor.position().byte_count;
        match self.p.parse(cursor)? {
            Outcome::Matched(value) => Ok(Outcome::Matched(Some(value))),
            Outcome::NoMatch if cursor.position().byte_count == before => {
                Ok(Outcome::Matched(None))
            }
            Outcome::NoMatch => Ok(Outcome::NoMatch),
        }
    }
}

/// `p` zero or one time.
pub fn option<P>(p: P) -> Opt<P> {
    Opt { p }
}

/// Internal error raised when a repeated parser matches without
/// consuming, which would otherwise loop forever. A well-behaved
/// repeated parser always consumes on a match; this is the defensive
/// backstop against one that doesn't, mirroring winnow's identical guard
/// in `repeat`.
fn non_advancing_repeat_error<S: CharSource>(cursor: &Cursor<S>) -> crate::error::ParseError {
    cursor.fail(
        "repeated parser matched without consuming input",
        "a parser that always consumes on success",
    )
}

/// Kleene star, `many(p)`.
///
/// Runs `p` repeatedly while it matches, folding each result into a `C:
/// Accumulate<P::Output>`. Always succeeds (an empty match is still a
/// match) — the only way `many` fails is if `p` commits to a failure
/// partway through a repetition.
#[derive(Clone)]
pub struct Many<P, C> {
    p: P,
    _accum: core::marker::PhantomData<C>,
}

impl<S, P, C> Parser<S> for Many<P, C>
where
    S: CharSource,
    P: Parser<S>,
    C: Accumulate<P::Output>,
{
    type Output = C;

    fn parse(&self, cursor: &mut Cursor<S>) -> PResult<C> {
        let mut acc = C::initial(None);
        loop {
            let before = cursor.position().byte_count;
            match self.p.parse(cursor)? {
                Outcome::Matched(value) => {
                    if cursor.position().byte_count == before {
                        return Err(non_advancing_repeat_error(cursor));
                    }
                    acc.accumulate(value);
                }
                Outcome::NoMatch if cursor.position().byte_count == before => {
                    return Ok(Outcome::Matched(acc))
                }
                Outcome::NoMatch => return Ok(Outcome::NoMatch),
            }
        }
    }
}

/// `p` zero or more times, accumulated into `C`.
pub fn many<S, P, C>(p: P) -> Many<P, C>
where
    S: CharSource,
    P: Parser<S>,
    C: Accumulate<P::Output>,
{
    Many {
        p,
        _accum: core::marker::PhantomData,
    }
}

/// `some(p)` ≡ `p && many(p)`: at least one match.
#[derive(Clone)]
pub struct Some_<P, C> {
    p: P,
    _accum: core::marker::PhantomData<C>,
}

impl<S, P, C> Parser<S> for Some_<P, C>
where
    S: CharSource,
    P: Parser<S>,
    C: Accumulate<P::Output>,
{
    type Output = C;

    fn parse(&self, cursor: &mut Cursor<S>) -> PResult<C> {
        let before = cursor.position().byte_count;
        let first = match self.p.parse(cursor)? {
            Outcome::Matched(value) => value,
            Outcome::NoMatch => return Ok(Outcome::NoMatch),
        };
        if cursor.position().byte_count == before {
            return Err(non_advancing_repeat_error(cursor));
        }
        let mut acc = C::initial(None);
        acc.accumulate(first);
        loop {
            let before = cursor.position().byte_count;
            match self.p.parse(cursor)? {
                Outcome::Matched(value) => {
                    if cursor.position().byte_count == before {
                        return Err(non_advancing_repeat_error(cursor));
                    }
                    acc.accumulate(value);
                }
                Outcome::NoMatch if cursor.position().byte_count == before => {
                    return Ok(Outcome::Matched(acc))
                }
                Outcome::NoMatch => return Ok(Outcome::NoMatch),
            }
        }
    }
}

/// `p` one or more times, accumulated into `C`.
pub fn some<S, P, C>(p: P) -> Some_<P, C>
where
    S: CharSource,
    P: Parser<S>,
    C: Accumulate<P::Output>,
{
    Some_ {
        p,
        _accum: core::marker::PhantomData,
    }
}

/// `discard(p)`: runs `p` purely for its effect on the cursor.
#[derive(Clone)]
pub struct Discard<P> {
    p: P,
}

impl<S, P> Parser<S> for Discard<P>
where
    S: CharSource,
    P: Parser<S>,
{
    type Output = ();

    fn parse(&self, cursor: &mut Cursor<S>) -> PResult<()> {
        Ok(self.p.parse(cursor)?.map(|_| ()))
    }
}

/// Runs `p`, discarding its result.
pub fn discard<P>(p: P) -> Discard<P> {
    Discard { p }
}

/// Maps a parser's matched value through a pure function. What lets a
/// reducer-free grammar (e.g. turning a digit run into an integer) stay
/// outside the `any`/`all` machinery — the same role winnow's
/// `Parser::map` plays.
#[derive(Clone)]
pub struct MapOutput<P, F> {
    p: P,
    f: F,
}

impl<S, P, F, U> Parser<S> for MapOutput<P, F>
where
    S: CharSource,
    P: Parser<S>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse(&self, cursor: &mut Cursor<S>) -> PResult<U> {
        Ok(self.p.parse(cursor)?.map(&self.f))
    }
}

/// Applies `f` to `p`'s matched value.
pub fn map<P, F>(p: P, f: F) -> MapOutput<P, F> {
    MapOutput { p, f }
}

/// Re-slices the input consumed by `p`, discarding `p`'s own value.
///
/// This is the idiomatic way to chain `accept`s into a single string:
/// rather than thread a mutable buffer through every primitive,
/// `recognize` records a checkpoint before and after `p` runs and hands
/// back the exact text between them. Requires a [`Checkpointable`]
/// source.
#[derive(Clone)]
pub struct Recognize<P> {
    p: P,
}

impl<S, P> Parser<S> for Recognize<P>
where
    S: Checkpointable,
    P: Parser<S>,
{
    type Output = crate::lib::std::string::String;

    fn parse(&self, cursor: &mut Cursor<S>) -> PResult<Self::Output> {
        let start = cursor.checkpoint();
        match self.p.parse(cursor)? {
            Outcome::Matched(_) => {
                let end = cursor.checkpoint();
                Ok(Outcome::Matched(cursor.slice_since(&start, &end).into()))
            }
            Outcome::NoMatch => Ok(Outcome::NoMatch),
        }
    }
}

/// Builds a [`Recognize`] combinator around `p`.
pub fn recognize<P>(p: P) -> Recognize<P> {
    Recognize { p }
}

/// Converts a committed failure into a hard failure.
///
/// Named `cut` after winnow's `cut_err`/`ErrMode::Cut`, the vocabulary
/// this codebase's lineage uses for the same idea: a strict wrapper that
/// turns a committed failure observed downstream into a raised error.
/// `cut(p)` matches exactly when `p` does, but if `p` returns `NoMatch`
/// having already consumed input, `cut` raises instead of letting the
/// caller treat it as recoverable.
#[derive(Clone)]
pub struct Cut<P> {
    p: P,
    expectation: crate::lib::std::string::String,
}

impl<S, P> Parser<S> for Cut<P>
where
    S: CharSource,
    P: Parser<S>,
{
    type Output = P::Output;

    fn parse(&self, cursor: &mut Cursor<S>) -> PResult<P::Output> {
        let before = cursor.position().byte_count;
        match self.p.parse(cursor)? {
            Outcome::Matched(value) => Ok(Outcome::Matched(value)),
            Outcome::NoMatch if cursor.position().byte_count == before => Ok(Outcome::NoMatch),
            Outcome::NoMatch => Err(cursor.fail("committed failure", self.expectation.clone())),
        }
    }
}

/// Wraps `p` so a committed failure becomes a raised
/// [`ParseError`][crate::error::ParseError] naming `expectation`, instead
/// of an ordinary `NoMatch` the caller might otherwise try to recover
/// from.
pub fn cut<P>(p: P, expectation: impl Into<crate::lib::std::string::String>) -> Cut<P> {
    Cut {
        p,
        expectation: expectation.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::StrSource;
    use crate::predicate::{digit, is_char};
    use crate::primitive::{accept, expect, fail, succ};

    #[test]
    fn or_recovers_from_non_consuming_failure() {
        let mut cur = Cursor::new(StrSource::new("b"));
        let p = or(accept(is_char('a')), accept(is_char('b')));
        assert!(matches!(p.parse(&mut cur).unwrap(), Outcome::Matched(_)));
        assert!(cur.peek().is_eof());
    }

    #[test]
    fn or_does_not_retry_after_commit() {
        // `expect` on the second symbol inside a tuple-sequenced `p` commits
        // the whole alternative once the first symbol is consumed: `or`
        // must not fall through to trying to match "ax" against plain `x`.
        let committed = discard((accept(is_char('a')), expect(is_char('z'))));
        let mut cur = Cursor::new(StrSource::new("ax"));
        let p = or(committed, discard(accept(is_char('x'))));
        assert!(p.parse(&mut cur).is_err());
    }

    #[test]
    fn many_collects_a_string() {
        let mut cur = Cursor::new(StrSource::new("123abc"));
        let p: Many<_, crate::lib::std::string::String> = many(accept(digit()));
        let Outcome::Matched(s) = p.parse(&mut cur).unwrap() else {
            panic!("expected a match")
        };
        assert_eq!(s, "123");
        assert_eq!(cur.peek(), crate::symbol::Symbol::new('a'));
    }

    #[test]
    fn many_on_no_matches_succeeds_empty() {
        let mut cur = Cursor::new(StrSource::new("abc"));
        let p: Many<_, crate::lib::std::string::String> = many(accept(digit()));
        assert_eq!(
            p.parse(&mut cur).unwrap(),
            Outcome::Matched(crate::lib::std::string::String::new())
        );
    }

    #[test]
    fn some_requires_at_least_one() {
        let mut cur = Cursor::new(StrSource::new("abc"));
        let p: Some_<_, crate::lib::std::string::String> = some(accept(digit()));
        assert_eq!(p.parse(&mut cur).unwrap(), Outcome::NoMatch);
    }

    #[test]
    fn option_succeeds_with_none_on_no_match() {
        let mut cur = Cursor::new(StrSource::new("abc"));
        let p = option(accept(digit()));
        assert_eq!(p.parse(&mut cur).unwrap(), Outcome::Matched(None));
    }

    #[test]
    fn discard_never_populates_output() {
        let mut cur = Cursor::new(StrSource::new("1"));
        let p = discard(accept(digit()));
        assert_eq!(p.parse(&mut cur).unwrap(), Outcome::Matched(()));
    }

    #[test]
    fn recognize_returns_the_matched_text() {
        let mut cur = Cursor::new(StrSource::new("123abc"));
        let p: Many<_, ()> = many(accept(digit()));
        let recognized = recognize(p);
        let Outcome::Matched(s) = recognized.parse(&mut cur).unwrap() else {
            panic!("expected a match")
        };
        assert_eq!(s, "123");
    }

    #[test]
    fn cut_raises_on_committed_failure() {
        let p = cut((accept(is_char('a')), accept(is_char('b'))), "ab");
        let mut cur = Cursor::new(StrSource::new("ax"));
        assert!(p.parse(&mut cur).is_err());
    }

    #[test]
    fn succ_left_identity() {
        let mut cur_a = Cursor::new(StrSource::new("abc"));
        let mut cur_b = Cursor::new(StrSource::new("abc"));
        let with_succ = (succ(), accept(is_char('a')));
        let bare = accept(is_char('a'));
        assert_eq!(
            with_succ.parse(&mut cur_a).unwrap().map(|(_, b)| b),
            bare.parse(&mut cur_b).unwrap()
        );
    }

    #[test]
    fn fail_right_absorption() {
        let mut cur_a = Cursor::new(StrSource::new("abc"));
        let mut cur_b = Cursor::new(StrSource::new("abc"));
        let with_fail = or(fail(), accept(is_char('a')));
        let bare = accept(is_char('a'));
        assert_eq!(with_fail.parse(&mut cur_a).unwrap(), bare.parse(&mut cur_b).unwrap());
    }
}
