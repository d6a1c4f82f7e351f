pub mod lexer;
pub mod parser;
pub mod token;

pub use lexer::Lexer;
pub use parser::{parse_program, Parser};
pub use token::{Token, TokenTag};
