//! Sequencing over heterogeneous tuples: `p && q`, generalized to
//! arbitrary arity (up to 8) by implementing [`Parser`] directly for
//! tuples of parsers — the same trick winnow's `sequence::tuple` macro
//! uses for its tuple impls.
//!
//! `(p, q).parse(&mut cursor)` runs `p`, then `q` against the advanced
//! cursor, and returns `(p_output, q_output)`: the tuple's result type is
//! the product of its children's — see [`recognize`][super::recognize]
//! for the case that genuinely wants concatenation (chaining `accept`s
//! into one string) instead of pairing.

use crate::cursor::{CharSource, Cursor};
use crate::parser::{Outcome, PResult, Parser};

impl<S: CharSource> Parser<S> for () {
    type Output = ();

    fn parse(&self, _cursor: &mut Cursor<S>) -> PResult<()> {
        Ok(Outcome::Matched(()))
    }
}

macro_rules! impl_seq_tuple {
    ($($idx:tt $name:ident),+) => {
        impl<S, $($name),+> Parser<S> for ($($name,)+)
        where
            S: CharSource,
            $($name: Parser<S>),+
        {
            type Output = ($($name::Output,)+);

            fn parse(&self, cursor: &mut Cursor<S>) -> PResult<Self::Output> {
                $(
                    let $name = match self.$idx.parse(cursor)? {
                        Outcome::Matched(value) => value,
                        Outcome::NoMatch => return Ok(Outcome::NoMatch),
                    };
                )+
                Ok(Outcome::Matched(($($name,)+)))
            }
        }
    };
}

impl_seq_tuple!(0 A);
impl_seq_tuple!(0 A, 1 B);
impl_seq_tuple!(0 A, 1 B, 2 C);
impl_seq_tuple!(0 A, 1 B, 2 C, 3 D);
impl_seq_tuple!(0 A, 1 B, 2 C, 3 D, 4 E);
impl_seq_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F);
impl_seq_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G);
impl_seq_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::StrSource;
    use crate::predicate::is_char;
    use crate::primitive::{accept, expect};
    use crate::symbol::Symbol;

    #[test]
    fn pair_sequences_and_pairs_outputs() {
        let mut cur = Cursor::new(StrSource::new("ab"));
        let p = (accept(is_char('a')), accept(is_char('b')));
        assert_eq!(
            p.parse(&mut cur).unwrap(),
            Outcome::Matched((Symbol::new('a'), Symbol::new('b')))
        );
    }

    #[test]
    fn failure_of_second_is_committed() {
        let mut cur = Cursor::new(StrSource::new("ax"));
        let p = (accept(is_char('a')), expect(is_char('b')));
        assert!(p.parse(&mut cur).is_err());
    }

    #[test]
    fn triple_sequences_three_parsers() {
        let mut cur = Cursor::new(StrSource::new("abc"));
        let p = (
            accept(is_char('a')),
            accept(is_char('b')),
            accept(is_char('c')),
        );
        assert_eq!(
            p.parse(&mut cur).unwrap(),
            Outcome::Matched((Symbol::new('a'), Symbol::new('b'), Symbol::new('c')))
        );
    }
}
