pub(crate) mod cursor;
pub mod lexer;
pub mod token;

use crate::error::LexError;
use lexer::Lexer;
use token::{Token, TokenKind};

/// Scan source code into a list of tokens ending with [`TokenKind::EndOfInput`].
///
/// An unrecognized character is reported as [`LexError::UnexpectedCharacter`].
pub fn scan(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    for result in Lexer::new(source).tokens() {
        let token = result?;
        if token.kind == TokenKind::Error {
            return Err(LexError::from_error_token(&token, source));
        }
        tokens.push(token);
    }
    Ok(tokens)
}
