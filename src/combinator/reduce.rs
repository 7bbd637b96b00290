//! The two reducer-carrying combinators: `all(f, p1..pn)` folds every
//! sub-parser's result through a user reducer, and `any(f, p1..pn)` does
//! the same for whichever alternative matched first.
//!
//! These are the only combinators that let a caller *transform* a result
//! rather than merely accumulate or pair it.

use crate::cursor::{CharSource, Cursor};
use crate::parser::{Outcome, PResult, Parser};

/// `all(f, (p1, ..., pn))`: runs every `pi` in order, and only if all of
/// them match invokes `f` on the tuple of their results.
///
/// Because `(p1, ..., pn)` already implements [`Parser`] with the tuple
/// itself as the short-circuiting sequence (see [`super::seq`]), `All` is
/// a thin wrapper: later parsers are never even constructed once an
/// earlier one fails, inherited directly from the tuple sequencing's
/// early return on the first `NoMatch` rather than reimplemented here.
#[derive(Clone)]
pub struct All<Tup, F> {
    parsers: Tup,
    reducer: F,
}

impl<S, Tup, F, Out> Parser<S> for All<Tup, F>
where
    S: CharSource,
    Tup: Parser<S>,
    F: Fn(Tup::Output) -> Out,
{
    type Output = Out;

    fn parse(&self, cursor: &mut Cursor<S>) -> PResult<Out> {
        Ok(self.parsers.parse(cursor)?.map(&self.reducer))
    }
}

/// Builds the `all` reducer combinator.
///
/// `reducer` receives the tuple of every sub-parser's output, in order,
/// exactly once, and only after all of them have matched.
pub fn all<Tup, F>(reducer: F, parsers: Tup) -> All<Tup, F> {
    All { parsers, reducer }
}

macro_rules! alt_enum {
    ($name:ident<$($var:ident),+> { $($field:ident),+ }) => {
        /// A sum type over the alternatives an `any` reducer can match:
        /// the variant tag *is* the index of the alternative that
        /// matched, so there is nothing to default-construct for the
        /// ones that did not run.
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum $name<$($var),+> {
            $(
                #[allow(missing_docs)]
                $field($var),
            )+
        }
    };
}

alt_enum!(Alt2<A, B> { A, B });
alt_enum!(Alt3<A, B, C> { A, B, C });
alt_enum!(Alt4<A, B, C, D> { A, B, C, D });

/// `any(f, p1, p2)`: tries `p1`, then `p2`; on the first match at index
/// `k`, calls `f(k, alternative)` where `alternative` carries only that
/// sub-result.
///
/// The alternatives need not share a type, so the reducer receives the
/// `AltN` sum type above, whose variant already encodes which one
/// matched; the index is passed alongside for callers that would rather
/// branch on a plain integer than match the enum.
#[derive(Clone)]
pub struct Any2<P1, P2, F> {
    p1: P1,
    p2: P2,
    reducer: F,
}

impl<S, P1, P2, F, Out> Parser<S> for Any2<P1, P2, F>
where
    S: CharSource,
    P1: Parser<S>,
    P2: Parser<S>,
    F: Fn(usize, Alt2<P1::Output, P2::Output>) -> Out,
{
    type Output = Out;

    fn parse(&self, cursor: &mut Cursor<S>) -> PResult<Out> {
        let before = cursor.position().byte_count;
        if let Outcome::Matched(v) = self.p1.parse(cursor)? {
            return Ok(Outcome::Matched((self.reducer)(0, Alt2::A(v))));
        }
        if cursor.position().byte_count != before {
            return Ok(Outcome::NoMatch);
        }
        if let Outcome::Matched(v) = self.p2.parse(cursor)? {
            return Ok(Outcome::Matched((self.reducer)(1, Alt2::B(v))));
        }
        Ok(Outcome::NoMatch)
    }
}

/// Builds a two-alternative `any` reducer combinator.
pub fn any2<P1, P2, F>(reducer: F, p1: P1, p2: P2) -> Any2<P1, P2, F> {
    Any2 { p1, p2, reducer }
}

/// Three-alternative `any` (see [`any2`]).
#[derive(Clone)]
pub struct Any3<P1, P2, P3, F> {
    p1: P1,
    p2: P2,
    p3: P3,
    reducer: F,
}

impl<S, P1, P2, P3, F, Out> Parser<S> for Any3<P1, P2, P3, F>
where
    S: CharSource,
    P1: Parser<S>,
    P2: Parser<S>,
    P3: Parser<S>,
    F: Fn(usize, Alt3<P1::Output, P2::Output, P3::Output>) -> Out,
{
    type Output = Out;

    fn parse(&self, cursor: &mut Cursor<S>) -> PResult<Out> {
        let before = cursor.position().byte_count;
        if let Outcome::Matched(v) = self.p1.parse(cursor)? {
            return Ok(Outcome::Matched((self.reducer)(0, Alt3::A(v))));
        }
        if cursor.position().byte_count != before {
            return Ok(Outcome::NoMatch);
        }
        if let Outcome::Matched(v) = self.p2.parse(cursor)? {
            return Ok(Outcome::Matched((self.reducer)(1, Alt3::B(v))));
        }
        if cursor.position().byte_count != before {
            return Ok(Outcome::NoMatch);
        }
        if let Outcome::Matched(v) = self.p3.parse(cursor)? {
            return Ok(Outcome::Matched((self.reducer)(2, Alt3::C(v))));
        }
        Ok(Outcome::NoMatch)
    }
}

/// Builds a three-alternative `any` reducer combinator.
pub fn any3<P1, P2, P3, F>(reducer: F, p1: P1, p2: P2, p3: P3) -> Any3<P1, P2, P3, F> {
    Any3 { p1, p2, p3, reducer }
}

/// Four-alternative `any` (see [`any2`]).
#[derive(Clone)]
pub struct Any4<P1, P2, P3, P4, F> {
    p1: P1,
    p2: P2,
    p3: P3,
    p4: P4,
    reducer: F,
}

impl<S, P1, P2, P3, P4, F, Out> Parser<S> for Any4<P1, P2, P3, P4, F>
where
    S: CharSource,
    P1: Parser<S>,
    P2: Parser<S>,
    P3: Parser<S>,
    P4: Parser<S>,
    F: Fn(usize, Alt4<P1::Output, P2::Output, P3::Output, P4::Output>) -> Out,
{
    type Output = Out;

    fn parse(&self, cursor: &mut Cursor<S>) -> PResult<Out> {
        let before = cursor.position().byte_count;
        if let Outcome::Matched(v) = self.p1.parse(cursor)? {
            return Ok(Outcome::Matched((self.reducer)(0, Alt4::A(v))));
        }
        if cursor.position().byte_count != before {
            return Ok(Outcome::NoMatch);
        }
        if let Outcome::Matched(v) = self.p2.parse(cursor)? {
            return Ok(Outcome::Matched((self.reducer)(1, Alt4::B(v))));
        }
        if cursor.position().byte_count != before {
            return Ok(Outcome::NoMatch);
        }
        if let Outcome::Matched(v) = self.p3.parse(cursor)? {
            return Ok(Outcome::Matched((self.reducer)(2, Alt4::C(v))));
        }
        if cursor.position().byte_count != before {
            return Ok(Outcome::NoMatch);
        }
        if let Outcome::Matched(v) = self.p4.parse(cursor)? {
            return Ok(Outcome::Matched((self.reducer)(3, Alt4::D(v))));
        }
        Ok(Outcome::NoMatch)
    }
}

/// Builds a four-alternative `any` reducer combinator.
pub fn any4<P1, P2, P3, P4, F>(
    reducer: F,
    p1: P1,
    p2: P2,
    p3: P3,
    p4: P4,
) -> Any4<P1, P2, P3, P4, F> {
    Any4 {
        p1,
        p2,
        p3,
        p4,
        reducer,
    }
}
