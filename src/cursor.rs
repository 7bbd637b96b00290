//! A cursor over a pull-based character source, tracking row, column, and
//! byte offset.

use crate::error::ParseError;
use crate::lib::std::string::String;
use crate::symbol::Symbol;

/// A source that can be pulled one symbol at a time.
///
/// A minimal pull interface, with no assumption that the whole input is
/// resident in memory. [`StrSource`] and [`IterSource`] are the two
/// sources this crate ships; user sources need only implement `bump`.
pub trait CharSource {
    /// Returns the next symbol without consuming it from the underlying
    /// source. Called once at construction and once per
    /// [`Cursor::advance`]; never called "speculatively" by combinators.
    fn bump(&mut self) -> Symbol;
}

/// A source whose position can be saved and restored without buffering
/// unbounded input. Optional: only sources that can cheaply support it
/// need implement it.
///
/// Only sources implementing `Checkpointable` let [`recognize`] and
/// backtracking choice see more than one symbol of lookahead; see
/// [`IterSource`] for a source that deliberately does not implement this.
pub trait Checkpointable: CharSource {
    /// An opaque, `Copy` save point.
    type Checkpoint: Copy;

    /// Captures the current read position.
    fn checkpoint(&self) -> Self::Checkpoint;

    /// Rewinds the source to a previously captured position.
    fn restore(&mut self, checkpoint: Self::Checkpoint);

    /// The slice of input consumed between two checkpoints, oldest first.
    ///
    /// Used by [`recognize`][crate::combinator::recognize] to hand back the
    /// matched text without threading an accumulator through every
    /// primitive parser.
    fn slice_between(&self, from: Self::Checkpoint, to: Self::Checkpoint) -> &str;
}

/// The primary input source: a cursor directly over a borrowed `&str`.
///
/// Checkpointing is a `usize` byte offset, and `slice_between` is a direct
/// substring — both are essentially free, which is why this is the source
/// every scenario in this crate's tests uses.
#[derive(Debug, Clone, Copy)]
pub struct StrSource<'i> {
    input: &'i str,
    offset: usize,
}

impl<'i> StrSource<'i> {
    /// Wraps a string slice for parsing from its start.
    pub fn new(input: &'i str) -> Self {
        StrSource { input, offset: 0 }
    }
}

impl CharSource for StrSource<'_> {
    fn bump(&mut self) -> Symbol {
        match self.input[self.offset..].chars().next() {
            Some(c) => {
                self.offset += c.len_utf8();
                Symbol::new(c)
            }
            None => Symbol::EOF,
        }
    }
}

impl<'i> Checkpointable for StrSource<'i> {
    type Checkpoint = usize;

    fn checkpoint(&self) -> usize {
        self.offset
    }

    fn restore(&mut self, checkpoint: usize) {
        self.offset = checkpoint;
    }

    fn slice_between(&self, from: usize, to: usize) -> &str {
        &self.input[from..to]
    }
}

/// A source over any `char` iterator, e.g. a `Read`-backed decoder.
///
/// Deliberately does not implement [`Checkpointable`]: a generic iterator
/// cannot be rewound without unbounded buffering, so combinators that need
/// more than one symbol of lookahead (`recognize`) are rejected for this
/// source at compile time rather than buffering silently.
#[derive(Debug, Clone)]
pub struct IterSource<I> {
    iter: I,
}

impl<I: Iterator<Item = char>> IterSource<I> {
    /// Wraps any `char` iterator as a one-symbol-lookahead source.
    pub fn new(iter: I) -> Self {
        IterSource { iter }
    }
}

impl<I: Iterator<Item = char>> CharSource for IterSource<I> {
    fn bump(&mut self) -> Symbol {
        match self.iter.next() {
            Some(c) => Symbol::new(c),
            None => Symbol::EOF,
        }
    }
}

/// The cursor's position, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// 1-based row; increments once per consumed newline.
    pub row: usize,
    /// 1-based column; advances only on consumed printable symbols.
    pub col: usize,
    /// Strictly increasing count of symbols consumed so far.
    pub byte_count: usize,
}

/// A cursor over a [`CharSource`], buffering exactly one symbol of
/// lookahead and tracking row/column/byte-count.
///
/// A cursor is single-owner: parsers take `&mut Cursor`, so the type
/// system enforces that no two in-flight parses share one.
pub struct Cursor<S> {
    source: S,
    current: Symbol,
    row: usize,
    col: usize,
    byte_count: usize,
}

impl<S: CharSource> Cursor<S> {
    /// Builds a cursor positioned at the first symbol of `source` (or
    /// [`Symbol::EOF`] for an empty source).
    pub fn new(mut source: S) -> Self {
        let current = source.bump();
        Cursor {
            source,
            current,
            row: 1,
            col: 1,
            byte_count: 0,
        }
    }

    /// The buffered lookahead symbol. Does not advance the cursor.
    pub fn peek(&self) -> Symbol {
        self.current
    }

    /// The cursor's current position.
    pub fn position(&self) -> Position {
        Position {
            row: self.row,
            col: self.col,
            byte_count: self.byte_count,
        }
    }

    /// Discards the buffered symbol and reads the next one, updating
    /// row/column/byte-count.
    ///
    /// Row increments and column resets on a consumed newline; column
    /// advances only for consumed printable symbols, so control characters
    /// do not shift reported columns.
    pub fn advance(&mut self) {
        if self.current.is_newline() {
            self.row += 1;
            self.col = 1;
        } else if self.current.is_printable() {
            self.col += 1;
        }
        self.byte_count += 1;
        self.current = self.source.bump();
    }

    /// Constructs (but does not raise — Rust has no exceptions) a
    /// [`ParseError`] at the current position, with the buffered symbol as
    /// the offending one. The caller's `?` propagation is what "raising"
    /// means in this crate.
    pub fn fail(&self, message: impl Into<String>, expectation: impl Into<String>) -> ParseError {
        ParseError::new(message, self.row, self.col, expectation, self.current)
    }
}

impl<S: Checkpointable> Cursor<S> {
    /// Saves the full cursor state: source position plus row/col/byte
    /// count plus the buffered symbol, so [`Cursor::restore`] puts the
    /// cursor back exactly where it was, not just the source.
    pub fn checkpoint(&self) -> CursorCheckpoint<S::Checkpoint> {
        CursorCheckpoint {
            source: self.source.checkpoint(),
            current: self.current,
            row: self.row,
            col: self.col,
            byte_count: self.byte_count,
        }
    }

    /// Restores a previously saved checkpoint.
    pub fn restore(&mut self, checkpoint: CursorCheckpoint<S::Checkpoint>) {
        self.source.restore(checkpoint.source);
        self.current = checkpoint.current;
        self.row = checkpoint.row;
        self.col = checkpoint.col;
        self.byte_count = checkpoint.byte_count;
    }

    /// The text consumed between two checkpoints of this cursor.
    pub fn slice_since(
        &self,
        from: &CursorCheckpoint<S::Checkpoint>,
        to: &CursorCheckpoint<S::Checkpoint>,
    ) -> &str {
        self.source.slice_between(from.source, to.source)
    }
}

/// An opaque, restorable cursor position captured by [`Cursor::checkpoint`].
#[derive(Debug, Clone, Copy)]
pub struct CursorCheckpoint<C> {
    source: C,
    current: Symbol,
    row: usize,
    col: usize,
    byte_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_col_track_newlines_and_printables() {
        let mut cur = Cursor::new(StrSource::new("ab\ncd"));
        for _ in 0..2 {
            cur.advance();
        }
        assert_eq!(cur.position(), Position { row: 1, col: 3, byte_count: 2 });
        cur.advance(); // consumes '\n'
        assert_eq!(cur.position().row, 2);
        assert_eq!(cur.position().col, 1);
    }

    #[test]
    fn control_characters_do_not_shift_column() {
        let mut cur = Cursor::new(StrSource::new("\t\tx"));
        cur.advance();
        cur.advance();
        assert_eq!(cur.position().col, 1);
    }

    #[test]
    fn byte_count_strictly_increases() {
        let mut cur = Cursor::new(StrSource::new("abc"));
        let mut last = cur.position().byte_count;
        for _ in 0..3 {
            cur.advance();
            assert!(cur.position().byte_count > last);
            last = cur.position().byte_count;
        }
    }

    #[test]
    fn checkpoint_restore_round_trips() {
        let mut cur = Cursor::new(StrSource::new("abcdef"));
        cur.advance();
        cur.advance();
        let cp = cur.checkpoint();
        cur.advance();
        cur.advance();
        assert_eq!(cur.peek(), Symbol::new('e'));
        cur.restore(cp);
        assert_eq!(cur.peek(), Symbol::new('c'));
        assert_eq!(cur.position().byte_count, 2);
    }

    #[test]
    fn slice_since_recovers_consumed_text() {
        let mut cur = Cursor::new(StrSource::new("hello world"));
        let start = cur.checkpoint();
        for _ in 0..5 {
            cur.advance();
        }
        let end = cur.checkpoint();
        assert_eq!(cur.slice_since(&start, &end), "hello");
    }

    #[test]
    fn empty_source_starts_at_eof() {
        let cur = Cursor::new(StrSource::new(""));
        assert!(cur.peek().is_eof());
    }
}
