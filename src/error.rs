use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::scanner::token::{Span, Token};

#[derive(Error, Debug, Diagnostic)]
pub enum LexError {
    #[error("Error at line({line}:{column}) - need close const string symbol `\"`")]
    #[diagnostic(
        code(surtr::lex::unterminated_string),
        help("string literals must be closed on the line where they start")
    )]
    UnterminatedString {
        line: usize,
        column: usize,
        #[label("string starts here")]
        span: SourceSpan,
        #[source_code]
        src: miette::NamedSource<String>,
    },

    #[error("Error at line({line}:{column}) - unexpected character '{ch}'")]
    #[diagnostic(code(surtr::lex::unexpected_character))]
    UnexpectedCharacter {
        ch: char,
        line: usize,
        column: usize,
        #[label("here")]
        span: SourceSpan,
        #[source_code]
        src: miette::NamedSource<String>,
    },
}

impl LexError {
    pub fn unterminated_string(line: usize, column: usize, span: Span) -> Self {
        Self::UnterminatedString {
            line,
            column,
            span: span.into(),
            src: miette::NamedSource::new("input", String::new()),
        }
    }

    pub fn unexpected_character(ch: char, line: usize, column: usize, span: Span) -> Self {
        Self::UnexpectedCharacter {
            ch,
            line,
            column,
            span: span.into(),
            src: miette::NamedSource::new("input", String::new()),
        }
    }

    /// Error for a [`TokenKind::Error`](crate::TokenKind::Error) token scanned from `source`.
    pub fn from_error_token(token: &Token, source: &str) -> Self {
        let ch = source
            .get(token.span.offset..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or('?');
        Self::unexpected_character(ch, token.line, token.column, token.span)
    }

    /// Attach source code for fancy miette diagnostics
    pub fn with_source_code(self, name: impl Into<String>, source: impl Into<String>) -> Self {
        let src = miette::NamedSource::new(name.into(), source.into());
        match self {
            Self::UnterminatedString {
                line, column, span, ..
            } => Self::UnterminatedString {
                line,
                column,
                span,
                src,
            },
            Self::UnexpectedCharacter {
                ch,
                line,
                column,
                span,
                ..
            } => Self::UnexpectedCharacter {
                ch,
                line,
                column,
                span,
                src,
            },
        }
    }

    /// Short description without the position prefix.
    pub fn message(&self) -> String {
        match self {
            Self::UnterminatedString { .. } => "need close const string symbol `\"`".to_string(),
            Self::UnexpectedCharacter { ch, .. } => format!("unexpected character '{ch}'"),
        }
    }

    pub fn line(&self) -> usize {
        match self {
            Self::UnterminatedString { line, .. } | Self::UnexpectedCharacter { line, .. } => {
                *line
            }
        }
    }

    pub fn column(&self) -> Option<usize> {
        match self {
            Self::UnterminatedString { column, .. } | Self::UnexpectedCharacter { column, .. } => {
                Some(*column)
            }
        }
    }
}
