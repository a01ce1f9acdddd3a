use crate::error::LexError;
use crate::scanner::cursor::{Cursor, is_line_terminator};
use crate::scanner::token::{Span, Token, TokenKind};

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_identifier_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn single_char(kind: TokenKind, c: char, start: Start) -> Token {
    Token::new(
        kind,
        Some(c.to_string()),
        start.line,
        start.column,
        Span::new(start.offset, c.len_utf8()),
    )
}

/// Position of the first character of a token.
#[derive(Debug, Clone, Copy)]
struct Start {
    line: usize,
    column: usize,
    offset: usize,
}

/// On-demand scanner producing one [`Token`] per call.
#[derive(Debug)]
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    pub fn line(&self) -> usize {
        self.cursor.line()
    }

    pub fn column(&self) -> usize {
        self.cursor.column()
    }

    /// Byte offset of the next unread character.
    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }

    /// Scan the next token.
    ///
    /// Callers stop after [`TokenKind::EndOfInput`] or [`TokenKind::Error`].
    /// An unterminated string literal aborts the call with
    /// [`LexError::UnterminatedString`].
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        let token = self.scan_token()?;
        tracing::trace!("{token}");
        Ok(token)
    }

    /// Iterate tokens up to and including the first terminal token or error.
    pub fn tokens(self) -> Tokens<'a> {
        Tokens {
            lexer: self,
            done: false,
        }
    }

    fn scan_token(&mut self) -> Result<Token, LexError> {
        loop {
            let offset = self.cursor.offset();
            let Some(c) = self.cursor.get_char() else {
                return Ok(Token::new(
                    TokenKind::EndOfInput,
                    None,
                    self.cursor.line(),
                    self.cursor.column(),
                    Span::new(offset, 0),
                ));
            };
            let start = Start {
                line: self.cursor.line(),
                column: self.cursor.column(),
                offset,
            };

            match c {
                ' ' | '\t' => {}
                '\r' | '\n' => {
                    self.cursor.end_line(c);
                }
                '#' => self.skip_line_comment(),
                '"' => return self.string_literal(start),
                '(' => return Ok(single_char(TokenKind::LeftParen, c, start)),
                ')' => return Ok(single_char(TokenKind::RightParen, c, start)),
                ',' => return Ok(single_char(TokenKind::Comma, c, start)),
                c if is_identifier_start(c) => return Ok(self.identifier(c, start)),
                other => {
                    tracing::debug!(
                        "unrecognized character {other:?} at {}:{}",
                        start.line,
                        start.column
                    );
                    return Ok(Token::new(
                        TokenKind::Error,
                        None,
                        start.line,
                        start.column,
                        Span::new(offset, other.len_utf8()),
                    ));
                }
            }
        }
    }

    /// Skip to just before the line terminator; the main loop counts the line.
    fn skip_line_comment(&mut self) {
        while let Some(c) = self.cursor.get_char() {
            if is_line_terminator(c) {
                self.cursor.unget_char();
                break;
            }
        }
    }

    fn string_literal(&mut self, start: Start) -> Result<Token, LexError> {
        let mut text = String::new();
        loop {
            match self.cursor.get_char() {
                Some('"') => {
                    let len = self.cursor.offset() - start.offset;
                    return Ok(Token::new(
                        TokenKind::StringLiteral,
                        Some(text),
                        start.line,
                        start.column,
                        Span::new(start.offset, len),
                    ));
                }
                Some(c) if !is_line_terminator(c) => text.push(c),
                terminator => {
                    if let Some(c) = terminator {
                        self.cursor.end_line(c);
                    }
                    tracing::debug!(
                        "unterminated string literal starting at {}:{}",
                        start.line,
                        start.column
                    );
                    // Label the opening quote and the text on its line.
                    let len = 1 + text.len();
                    return Err(LexError::unterminated_string(
                        start.line,
                        start.column,
                        Span::new(start.offset, len),
                    ));
                }
            }
        }
    }

    fn identifier(&mut self, first: char, start: Start) -> Token {
        let mut text = String::from(first);
        while let Some(c) = self.cursor.get_char() {
            if is_identifier_continue(c) {
                text.push(c);
            } else {
                self.cursor.unget_char();
                break;
            }
        }
        let len = text.len();
        Token::new(
            TokenKind::Identifier,
            Some(text),
            start.line,
            start.column,
            Span::new(start.offset, len),
        )
    }
}

/// Iterator returned by [`Lexer::tokens`]. Fused after the first terminal
/// token or error.
#[derive(Debug)]
pub struct Tokens<'a> {
    lexer: Lexer<'a>,
    done: bool,
}

impl Iterator for Tokens<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.lexer.next_token();
        self.done = match &result {
            Ok(token) => token.kind.is_terminal(),
            Err(_) => true,
        };
        Some(result)
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}
