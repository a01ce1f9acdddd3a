pub mod dump;
pub mod error;
pub mod logging;
pub mod scanner;

pub use error::LexError;
pub use scanner::lexer::{Lexer, Tokens};
pub use scanner::scan;
pub use scanner::token::{Span, Token, TokenKind};
