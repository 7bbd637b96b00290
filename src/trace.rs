//! Parser execution tracing, enabled by the `debug` feature.
//!
//! Wraps a parser so every call to it prints an indented start/end line to
//! stderr recording how much input it consumed and whether it matched,
//! failed softly, or raised. Depth tracks nesting through an atomic
//! counter rather than being threaded explicitly, the same trick winnow's
//! `trace` module uses, since a `Cursor` does not carry a call stack.

#[cfg(feature = "debug")]
mod internals;

use crate::cursor::{CharSource, Cursor};
use crate::parser::{PResult, Parser};

#[cfg(all(feature = "debug", not(feature = "std")))]
compile_error!("`debug` requires `std`");

/// Wraps `p` so every call is traced to stderr under the `debug` feature.
///
/// Without `debug`, this is a zero-cost passthrough: `Trace` forwards
/// directly to `p.parse` and the name is never even formatted.
pub fn trace<P>(name: impl crate::lib::std::fmt::Display, p: P) -> Trace<P> {
    Trace {
        p,
        name: name.to_string(),
    }
}

/// The traced parser built by [`trace`].
#[derive(Clone)]
pub struct Trace<P> {
    p: P,
    name: crate::lib::std::string::String,
}

impl<S, P> Parser<S> for Trace<P>
where
    S: CharSource,
    P: Parser<S>,
{
    type Output = P::Output;

    #[cfg_attr(not(feature = "debug"), allow(unused_variables))]
    fn parse(&self, cursor: &mut Cursor<S>) -> PResult<P::Output> {
        #[cfg(feature = "debug")]
        {
            let depth = internals::Depth::new();
            let before = cursor.position();
            internals::start(*depth, &self.name, before);

            let res = self.p.parse(cursor);

            let after = cursor.position();
            internals::end(*depth, &self.name, after.byte_count - before.byte_count, &res);
            res
        }
        #[cfg(not(feature = "debug"))]
        {
            self.p.parse(cursor)
        }
    }
}

#[cfg(all(test, feature = "debug"))]
mod tests {
    use super::*;
    use crate::cursor::StrSource;
    use crate::parser::Outcome;
    use crate::predicate::digit;
    use crate::primitive::accept;

    #[test]
    fn trace_forwards_the_wrapped_result() {
        let mut cur = Cursor::new(StrSource::new("1a"));
        let p = trace("digit", accept(digit()));
        assert!(matches!(p.parse(&mut cur), Ok(Outcome::Matched(_))));
    }
}
