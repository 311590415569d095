pub mod lexer;
pub mod parser;
pub mod token;

pub use lexer::{tokenize, Lexer, TokenStream};
pub use parser::{ParseMode, Parser};
pub use token::{Token, TokenKind, TokenValue};
