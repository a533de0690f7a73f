//! Diagnostics and error reporting
//!
//! Parsing is abandoned at the first violation, so a parse attempt yields at most one
//! [`ParseError`]: a byte offset into the source plus a message describing the violated expectation.

use std::fmt;

use miette::{Diagnostic, LabeledSpan};
use thiserror::Error;

use crate::tree::Span;

/// The single terminating error of a parse attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    pub kind: ErrorKind,
    pub message: String,
    pub span: Span,
    pub help: Option<String>,
}

impl ParseError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            message: message.into(),
            span,
            help: None,
        }
    }

    /// A lexeme broke its character-class rule.
    pub fn lexical(message: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorKind::Lexical, message, span)
    }

    /// The upcoming input does not match what the current production requires.
    pub fn syntax(message: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorKind::Syntax, message, span)
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Byte offset the error is reported at.
    pub fn offset(&self) -> usize {
        self.span.start
    }

    pub fn is_lexical(&self) -> bool {
        self.kind == ErrorKind::Lexical
    }

    pub fn is_syntax(&self) -> bool {
        self.kind == ErrorKind::Syntax
    }
}

impl Diagnostic for ParseError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.help.as_ref().map(|h| Box::new(h) as Box<dyn fmt::Display + 'a>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_with_span(Some(self.kind.to_string()), self.span);
        Some(Box::new(std::iter::once(label)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
}

impl ErrorKind {
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::Lexical => "proclang::lexical",
            ErrorKind::Syntax => "proclang::syntax",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Lexical => write!(f, "lexical error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
        }
    }
}

/// Render an error with source context as plain text.
///
/// ```text
/// lexical error: Invalid identifier: 'x1' must consist of letters only
///   --> prog.txt:1:20
///    |
///  1 | procedure p; begin x1 := 1; end
///    |                    ^^
/// ```
pub fn format_error(file_name: &str, source: &str, error: &ParseError) -> String {
    let (line_num, col_num, line_text) = line_info(source, error.offset());
    let gutter = line_num.to_string().len();
    let mut out = String::new();

    out.push_str(&format!("{}: {}\n", error.kind, error.message));
    out.push_str(&format!("{:>gutter$}--> {}:{}:{}\n", "", file_name, line_num, col_num, gutter = gutter + 1));
    out.push_str(&format!(" {:>gutter$} |\n", ""));
    out.push_str(&format!(" {:>gutter$} | {}\n", line_num, line_text));

    // Widths are in chars, matching `col_num`. The caret never runs past the end of the reported line.
    let remaining = line_text.chars().count().saturating_sub(col_num - 1);
    let span_chars = source
        .get(error.span.start..error.span.end.min(source.len()))
        .map(|text| text.chars().count())
        .unwrap_or_else(|| error.span.len());
    let underline = span_chars.min(remaining).max(1);
    out.push_str(&format!(
        " {:>gutter$} | {}{}\n",
        "",
        " ".repeat(col_num - 1),
        "^".repeat(underline)
    ));

    if let Some(help) = &error.help {
        out.push_str(&format!(" {:>gutter$} = help: {}\n", "", help));
    }
    out
}

/// 1-based line and column for a byte offset.
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let (line, col, _) = line_info(source, offset);
    (line, col)
}

fn line_info(source: &str, offset: usize) -> (usize, usize, &str) {
    let offset = offset.min(source.len());
    let mut line_num = 1;
    let mut line_start = 0;

    for (i, c) in source.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line_num += 1;
            line_start = i + 1;
        }
    }

    let line_end = source[line_start..]
        .find('\n')
        .map(|i| line_start + i)
        .unwrap_or(source.len());

    let line_text = source[line_start..line_end].trim_end_matches('\r');
    let col_num = source[line_start..offset].chars().count() + 1;

    (line_num, col_num, line_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_col_on_second_line() {
        let source = "procedure p;\nbegin x := 1; end";
        assert_eq!(line_col(source, 0), (1, 1));
        assert_eq!(line_col(source, 13), (2, 1));
        assert_eq!(line_col(source, 19), (2, 7));
    }

    #[test]
    fn test_line_col_clamps_past_end() {
        assert_eq!(line_col("ab", 99), (1, 3));
    }

    #[test]
    fn test_format_error_points_at_lexeme() {
        let source = "procedure p; begin x1 := 1; end";
        let err = ParseError::lexical("Invalid identifier: 'x1' must consist of letters only", Span::new(19, 21));
        let report = format_error("prog.txt", source, &err);
        assert!(report.starts_with("lexical error: Invalid identifier"));
        assert!(report.contains("prog.txt:1:20"));
        let caret_line = report.lines().find(|l| l.contains('^')).unwrap();
        assert_eq!(caret_line.find('^').unwrap(), caret_line.find('|').unwrap() + 2 + 19);
        assert!(caret_line.ends_with("^^"));
    }

    #[test]
    fn test_format_error_underlines_chars_not_bytes() {
        let source = "procedure p; begin πr := 1; end";
        let start = source.find('π').unwrap();
        let span = Span::new(start, start + "πr".len());
        let err = ParseError::lexical("Invalid identifier: 'πr' must consist of letters only", span);
        let report = format_error("prog.txt", source, &err);
        let caret_line = report.lines().find(|l| l.contains('^')).unwrap();
        assert!(caret_line.ends_with(" ^^"), "{caret_line:?}");
        assert_eq!(caret_line.matches('^').count(), 2);
    }

    #[test]
    fn test_format_error_includes_help() {
        let err = ParseError::syntax("Expected ';'", Span::at(3)).with_help("statements end with ';'");
        let report = format_error("f", "abc", &err);
        assert!(report.contains("= help: statements end with ';'"));
    }

    #[test]
    fn test_diagnostic_code_follows_kind() {
        let err = ParseError::syntax("Expected 'end'", Span::at(0));
        assert_eq!(err.code().unwrap().to_string(), "proclang::syntax");
        assert_eq!(err.labels().unwrap().count(), 1);
        assert!(err.is_syntax() && !err.is_lexical());
    }
}
