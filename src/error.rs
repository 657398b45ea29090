//! Error types for lexicon parsing

use ariadne::{Color, Label, Report, ReportKind, Source};
use chumsky::error::{Rich, RichPattern, RichReason};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// A lexicon line that could not be turned into an entry
///
/// Line numbers are 1-based; spans are byte ranges into the whole source.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    #[error("line {line}: {message}")]
    Row {
        line: usize,
        span: Span,
        message: String,
        expected: Vec<String>,
    },

    #[error("line {line}: unknown section header '{header}'")]
    UnknownSection {
        line: usize,
        span: Span,
        header: String,
    },

    #[error("line {line}: data row before any section header")]
    OutsideSection { line: usize, span: Span },
}

impl FormatError {
    /// Line number (1-based) of the offending row
    pub fn line(&self) -> usize {
        match self {
            Self::Row { line, .. }
            | Self::UnknownSection { line, .. }
            | Self::OutsideSection { line, .. } => *line,
        }
    }

    /// Byte span of the offending text in the source
    pub fn span(&self) -> &Span {
        match self {
            Self::Row { span, .. }
            | Self::UnknownSection { span, .. }
            | Self::OutsideSection { span, .. } => span,
        }
    }

    /// Convert a row grammar error, shifting its span by the line's offset in the source
    pub(crate) fn from_rich(line: usize, offset: usize, err: Rich<'_, char>) -> Self {
        let message = match err.reason() {
            RichReason::ExpectedFound { found, .. } => match found {
                Some(c) => format!("unexpected '{}'", c.escape_default()),
                None => "unexpected end of line".to_string(),
            },
            RichReason::Custom(msg) => msg.to_string(),
        };

        let expected: Vec<String> = err
            .expected()
            .filter_map(|e| match e {
                RichPattern::Token(c) => Some(format!("'{}'", c.escape_default())),
                RichPattern::Label(label) => Some(label.to_string()),
                RichPattern::EndOfInput => Some("end of line".to_string()),
                RichPattern::Identifier(s) => Some(format!("identifier '{}'", s)),
                RichPattern::Any => Some("any character".to_string()),
                RichPattern::SomethingElse => None,
            })
            .collect();

        let range = err.span().into_range();
        FormatError::Row {
            line,
            span: offset + range.start..offset + range.end,
            message,
            expected,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let span = self.span().clone();
        let (message, note) = match self {
            Self::Row {
                message, expected, ..
            } => {
                let note = if expected.is_empty() {
                    String::new()
                } else {
                    format!("\nExpected: {}", expected.join(", "))
                };
                (message.clone(), note)
            }
            Self::UnknownSection { header, .. } => (
                format!("unknown section header '{}'", header),
                "\nExpected one of: [Verbes], [Adjectifs], [Noms], [Prefix], [Gabarits]"
                    .to_string(),
            ),
            Self::OutsideSection { .. } => (
                "data row before any section header".to_string(),
                String::new(),
            ),
        };

        let mut buf = Vec::new();
        let _ = Report::build(ReportKind::Error, filename, span.start)
            .with_message(format!("line {}: {}", self.line(), message))
            .with_label(
                Label::new((filename, span))
                    .with_message(format!("{}{}", message, note))
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}
