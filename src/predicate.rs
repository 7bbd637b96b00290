//! Named, composable boolean tests on a single [`Symbol`].
//!
//! Predicates are values, not parsers: they never advance a
//! [`Cursor`][crate::cursor::Cursor]. [`accept`][crate::primitive::accept]
//! and [`expect`][crate::primitive::expect] lift a predicate into a parser.

use crate::lib::std::fmt;
use crate::lib::std::sync::Arc;
use crate::symbol::Symbol;

/// A named, thread-safe test on a [`Symbol`].
///
/// Cloning a `Predicate` is a pointer clone (an `Arc` bump), not a
/// recompilation of the closure, so predicates can be stored in combinator
/// structs and shared freely. `name()` is the human-readable expectation
/// string [`expect`][crate::primitive::expect] raises in a
/// [`ParseError`][crate::error::ParseError].
#[derive(Clone)]
pub struct Predicate {
    name: Arc<str>,
    test: Arc<dyn Fn(Symbol) -> bool + Send + Sync>,
}

impl Predicate {
    /// Builds a predicate from a name and a test function.
    pub fn new(
        name: impl Into<Arc<str>>,
        test: impl Fn(Symbol) -> bool + Send + Sync + 'static,
    ) -> Self {
        Predicate {
            name: name.into(),
            test: Arc::new(test),
        }
    }

    /// The human-readable name used in diagnostics, e.g. `"digit"` or
    /// `"(digit or upper)"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Evaluates the predicate against a symbol. Never advances anything;
    /// predicates are pure.
    pub fn test(&self, symbol: Symbol) -> bool {
        (self.test)(symbol)
    }

    /// `self or other`: short-circuit disjunction. The composed name is
    /// `"(self.name or other.name)"`.
    pub fn or(&self, other: &Predicate) -> Predicate {
        let lhs = self.clone();
        let rhs = other.clone();
        Predicate::new(
            format!("({} or {})", self.name, other.name),
            move |sym| lhs.test(sym) || rhs.test(sym),
        )
    }

    /// Logical complement. The composed name is `"~self.name"`.
    pub fn not(&self) -> Predicate {
        let inner = self.clone();
        Predicate::new(format!("~{}", self.name), move |sym| !inner.test(sym))
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Predicate").field(&self.name()).finish()
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Matches any symbol except end-of-input.
pub fn any_sym() -> Predicate {
    Predicate::new("any", |sym| !sym.is_eof())
}

/// Matches end-of-input and nothing else.
pub fn eof() -> Predicate {
    Predicate::new("eof", |sym| sym.is_eof())
}

/// Matches exactly one literal character. Named `'c'` (with the character
/// rendered via its `Debug` quoting).
pub fn is_char(c: char) -> Predicate {
    Predicate::new(format!("'{c}'"), move |sym| sym.as_char() == Some(c))
}

macro_rules! char_class {
    ($(#[$meta:meta])* $name:ident, $label:literal, $test:expr) => {
        $(#[$meta])*
        pub fn $name() -> Predicate {
            let test: fn(char) -> bool = $test;
            Predicate::new($label, move |sym| sym.as_char().is_some_and(test))
        }
    };
}

char_class!(
    /// Matches a single whitespace character (`char::is_whitespace`).
    space,
    "space",
    char::is_whitespace
);
char_class!(
    /// Matches an ASCII digit `0`-`9`.
    digit,
    "digit",
    |c| c.is_ascii_digit()
);
char_class!(
    /// Matches an ASCII uppercase letter.
    upper,
    "upper",
    |c| c.is_ascii_uppercase()
);
char_class!(
    /// Matches an ASCII lowercase letter.
    lower,
    "lower",
    |c| c.is_ascii_lowercase()
);
char_class!(
    /// Matches an ASCII alphabetic letter (upper or lower case).
    alpha,
    "alpha",
    |c| c.is_ascii_alphabetic()
);
char_class!(
    /// Matches an ASCII alphanumeric character.
    alnum,
    "alnum",
    |c| c.is_ascii_alphanumeric()
);
char_class!(
    /// Matches any printable, non-control character.
    print,
    "print",
    |c| !c.is_control()
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn or_name_composes() {
        let p = digit().or(&upper());
        assert_eq!(p.name(), "(digit or upper)");
    }

    #[test]
    fn not_name_composes() {
        let p = digit().not();
        assert_eq!(p.name(), "~digit");
    }

    #[test]
    fn eof_matches_only_eof() {
        assert!(eof().test(Symbol::EOF));
        assert!(!eof().test(Symbol::new('a')));
    }

    #[test]
    fn any_sym_matches_everything_but_eof() {
        assert!(any_sym().test(Symbol::new('\0')));
        assert!(!any_sym().test(Symbol::EOF));
    }

    #[test]
    fn is_char_name_is_the_literal() {
        assert_eq!(is_char('x').name(), "'x'");
    }

    #[test]
    fn de_morgan_holds_for_every_symbol() {
        let p = digit();
        let q = upper();
        let not_or = p.or(&q).not();
        for c in ['1', 'A', 'z', ' ', '\0'] {
            let sym = Symbol::new(c);
            assert_eq!(not_or.test(sym), p.not().test(sym) && q.not().test(sym));
        }
    }
}
