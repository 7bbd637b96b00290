use combinare::combinator::{many, or, Many};
use combinare::cursor::{Cursor, StrSource};
use combinare::parser::{Outcome, Parser};
use combinare::predicate::{digit, upper};
use combinare::primitive::{accept, fail, succ};
use proptest::prelude::*;

/// Arbitrary ASCII text, since `StrSource` only needs to decode `char`s and
/// every property below is indifferent to the alphabet.
fn ascii_text() -> impl Strategy<Value = String> {
    "[ -~]{0,32}"
}

proptest! {
    /// A soft failure never moves the cursor: `accept` rejecting its
    /// predicate must leave `byte_count` unchanged.
    #[test]
    fn soft_failure_never_consumes(text in ascii_text()) {
        let mut cur = Cursor::new(StrSource::new(&text));
        let before = cur.position();
        if let Outcome::NoMatch = accept(digit()).parse(&mut cur).unwrap() {
            prop_assert_eq!(cur.position(), before);
        }
    }

    /// `many` over a parser that can match the empty input (here, `succ`
    /// composed so repetition always terminates) must not loop forever and
    /// must always succeed.
    #[test]
    fn many_over_digits_terminates_and_never_raises(text in ascii_text()) {
        let mut cur = Cursor::new(StrSource::new(&text));
        let p: Many<_, usize> = many(accept(digit()));
        prop_assert!(p.parse(&mut cur).is_ok());
    }

    /// `(succ(), p)` must parse exactly like `p` alone: left identity of
    /// sequencing.
    #[test]
    fn succ_is_a_left_identity_for_sequencing(text in ascii_text()) {
        let mut cur_a = Cursor::new(StrSource::new(&text));
        let mut cur_b = Cursor::new(StrSource::new(&text));
        let with_succ = (succ(), accept(digit()));
        let bare = accept(digit());
        let lhs = with_succ.parse(&mut cur_a).unwrap().map(|(_, v)| v);
        let rhs = bare.parse(&mut cur_b).unwrap();
        prop_assert_eq!(lhs, rhs);
        prop_assert_eq!(cur_a.position(), cur_b.position());
    }

    /// `or(fail(), p)` must parse exactly like `p` alone: right absorption
    /// of `fail` under choice.
    #[test]
    fn fail_is_a_right_absorber_for_choice(text in ascii_text()) {
        let mut cur_a = Cursor::new(StrSource::new(&text));
        let mut cur_b = Cursor::new(StrSource::new(&text));
        let with_fail = or(fail(), accept(digit()));
        let bare = accept(digit());
        prop_assert_eq!(
            with_fail.parse(&mut cur_a).unwrap(),
            bare.parse(&mut cur_b).unwrap()
        );
        prop_assert_eq!(cur_a.position(), cur_b.position());
    }

    /// De Morgan's law holds pointwise for every symbol a predicate is
    /// tested against, for any pair of character-class predicates.
    #[test]
    fn de_morgan_holds_for_digit_and_upper(c in any::<char>()) {
        use combinare::symbol::Symbol;
        let p = digit();
        let q = upper();
        let sym = Symbol::new(c);
        let not_or = p.or(&q).not().test(sym);
        let and_of_nots = p.not().test(sym) && q.not().test(sym);
        prop_assert_eq!(not_or, and_of_nots);
    }

    /// Row/column bookkeeping: advancing past `n` non-newline printable
    /// ASCII characters always lands the cursor at column `n + 1`.
    #[test]
    fn column_tracks_consumed_printable_symbols(n in 0usize..40) {
        let text: String = "x".repeat(n);
        let mut cur = Cursor::new(StrSource::new(&text));
        for _ in 0..n {
            cur.advance();
        }
        prop_assert_eq!(cur.position().row, 1);
        prop_assert_eq!(cur.position().col, n + 1);
        prop_assert_eq!(cur.position().byte_count, n);
    }
}
