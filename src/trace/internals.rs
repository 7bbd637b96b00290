#![cfg(feature = "std")]

use std::io::Write;

use crate::cursor::Position;
use crate::error::ParseError;
use crate::parser::{Outcome, PResult};

pub struct Depth {
    depth: usize,
    inc: bool,
}

impl Depth {
    pub fn new() -> Self {
        let depth = DEPTH.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        Self { depth, inc: true }
    }
}

impl Drop for Depth {
    fn drop(&mut self) {
        if self.inc {
            let _ = DEPTH.fetch_sub(1, std::sync::atomic::Ordering::SeqCst);
        }
    }
}

impl crate::lib::std::ops::Deref for Depth {
    type Target = usize;

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        &self.depth
    }
}

static DEPTH: std::sync::atomic::AtomicUsize = std::sync::atomic::AtomicUsize::new(0);

pub enum Severity {
    Matched,
    NoMatch,
    Raised,
}

impl Severity {
    pub fn with_result<T>(result: &Result<Outcome<T>, ParseError>) -> Self {
        match result {
            Ok(Outcome::Matched(_)) => Self::Matched,
            Ok(Outcome::NoMatch) => Self::NoMatch,
            Err(_) => Self::Raised,
        }
    }
}

pub fn start(depth: usize, name: &dyn crate::lib::std::fmt::Display, at: Position) {
    let gutter_style = anstyle::Style::new().bold();
    let input_style = anstyle::Style::new().underline();

    let call_width = column_width();
    let call_column = format!("{:depth$}> {name}", "");

    let writer = anstream::stderr();
    let mut writer = writer.lock();
    let _ = writeln!(
        writer,
        "{call_column:call_width$} {gutter_style}|{gutter_reset} {input_style}{row}:{col}{input_reset}",
        gutter_style = gutter_style.render(),
        gutter_reset = gutter_style.render_reset(),
        input_style = input_style.render(),
        input_reset = input_style.render_reset(),
        row = at.row,
        col = at.col,
    );
}

pub fn end<T>(depth: usize, name: &dyn crate::lib::std::fmt::Display, consumed: usize, result: &PResult<T>) {
    let gutter_style = anstyle::Style::new().bold();

    let call_width = column_width();
    let call_column = format!("{:depth$}< {name}", "");

    let (status_style, status) = match Severity::with_result(result) {
        Severity::Matched => (
            anstyle::Style::new().fg_color(Some(anstyle::AnsiColor::Green.into())),
            format!("+{consumed}"),
        ),
        Severity::NoMatch => (
            anstyle::Style::new().fg_color(Some(anstyle::AnsiColor::Yellow.into())),
            "no match".to_owned(),
        ),
        Severity::Raised => (
            anstyle::Style::new().fg_color(Some(anstyle::AnsiColor::Red.into())),
            "raised".to_owned(),
        ),
    };

    let writer = anstream::stderr();
    let mut writer = writer.lock();
    let _ = writeln!(
        writer,
        "{status_style}{call_column:call_width$}{status_reset} {gutter_style}|{gutter_reset} {status_style}{status}{status_reset}",
        gutter_style = gutter_style.render(),
        gutter_reset = gutter_style.render_reset(),
        status_style = status_style.render(),
        status_reset = status_style.render_reset(),
    );
}

fn column_width() -> usize {
    let term_width = term_width();
    let min_call_width = 40;
    term_width.checked_sub(20).unwrap_or(min_call_width).max(min_call_width)
}

fn term_width() -> usize {
    columns_env().or_else(query_width).unwrap_or(80)
}

fn query_width() -> Option<usize> {
    use is_terminal_polyfill::IsTerminal;
    if std::io::stderr().is_terminal() {
        terminal_size::terminal_size().map(|(w, _h)| w.0.into())
    } else {
        None
    }
}

fn columns_env() -> Option<usize> {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|c| c.parse::<usize>().ok())
}
