use std::fmt;

use serde::{Serialize, Serializer};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr, strum::EnumIter,
)]
pub enum TokenKind {
    #[strum(serialize = "TK_ERROR")]
    Error,
    #[strum(serialize = "TK_EOF")]
    EndOfInput,

    // Never produced by the lexer; comments are skipped.
    #[strum(serialize = "TK_COMMENT")]
    Comment,

    // Single-character tokens
    #[strum(serialize = "TK_LPAREN")]
    LeftParen,
    #[strum(serialize = "TK_RPAREN")]
    RightParen,
    #[strum(serialize = "TK_COMMA")]
    Comma,

    // Literals
    #[strum(serialize = "TK_STRING")]
    StringLiteral,
    #[strum(serialize = "TK_IDENTIFIER")]
    Identifier,
}

impl TokenKind {
    /// Display name used in token dumps, e.g. `TK_LPAREN`.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// `true` for the kinds after which a caller stops asking for tokens.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Error | Self::EndOfInput)
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub offset: usize,
    pub len: usize,
}

impl Span {
    pub fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        miette::SourceSpan::new(span.offset.into(), span.len)
    }
}

/// One lexical unit and the position where it begins.
///
/// `line` is 1-based. `column` counts the characters consumed on the line, so
/// the first character of a line is at column 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: Option<String>,
    pub line: usize,
    pub column: usize,
    pub span: Span,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        text: Option<String>,
        line: usize,
        column: usize,
        span: Span,
    ) -> Self {
        Self {
            kind,
            text,
            line,
            column,
            span,
        }
    }

    /// Token text, or `""` for kinds that carry none.
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.text {
            Some(text) => write!(
                f,
                "{} '{}' @{}:{}",
                self.kind, text, self.line, self.column
            ),
            None => write!(f, "{} @{}:{}", self.kind, self.line, self.column),
        }
    }
}
