use std::fmt;
use std::io;

use crate::frontend::token::TokenTag;

/// Coarse classification of a [`LispError`], used by the entry point to pick
/// the header it prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Parse,
    Conversion,
    Semantic,
    Io,
}

#[derive(Debug)]
pub enum LispError {
    // File and I/O errors
    FileReadError(String),
    IoError(io::Error),
    PatternError(String),

    // Lexical analysis errors
    LexicalError {
        message: String,
        line: usize,
    },

    // Parsing errors
    ParseError {
        message: String,
        word: String,
        position: usize,
    },
    UnexpectedEndOfInput {
        position: usize,
    },

    // A token tag that has no counterpart in the requested operator code
    ConversionError {
        tag: TokenTag,
        target: &'static str,
    },

    // Runtime errors raised while evaluating the tree
    SemanticError(String),
}

impl LispError {
    /// Create a lexical error with line information
    pub fn lexical(message: impl Into<String>, line: usize) -> Self {
        LispError::LexicalError {
            message: message.into(),
            line,
        }
    }

    /// Create a parse error pointing at the offending token (1-based position)
    pub fn parse_error(message: impl Into<String>, word: impl Into<String>, position: usize) -> Self {
        LispError::ParseError {
            message: message.into(),
            word: word.into(),
            position,
        }
    }

    pub fn conversion(tag: TokenTag, target: &'static str) -> Self {
        LispError::ConversionError { tag, target }
    }

    /// Create a runtime error
    pub fn semantic(message: impl Into<String>) -> Self {
        LispError::SemanticError(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            LispError::FileReadError(_) | LispError::IoError(_) | LispError::PatternError(_) => ErrorKind::Io,
            LispError::LexicalError { .. } => ErrorKind::Lexical,
            LispError::ParseError { .. } | LispError::UnexpectedEndOfInput { .. } => ErrorKind::Parse,
            LispError::ConversionError { .. } => ErrorKind::Conversion,
            LispError::SemanticError(_) => ErrorKind::Semantic,
        }
    }

    pub fn is_parse_error(&self) -> bool {
        self.kind() == ErrorKind::Parse
    }

    pub fn is_semantic_error(&self) -> bool {
        self.kind() == ErrorKind::Semantic
    }
}

impl fmt::Display for LispError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LispError::FileReadError(msg) => write!(f, "File read error: {}", msg),
            LispError::IoError(err) => write!(f, "I/O error: {}", err),
            LispError::PatternError(msg) => write!(f, "Pattern error: {}", msg),

            LispError::LexicalError { message, line } => {
                write!(f, "Lexical error at line {}: {}", line, message)
            }

            LispError::ParseError { message, word, position } => {
                write!(f, "ERROR: {} at word: {} [position: {}]", message, word, position)
            }
            LispError::UnexpectedEndOfInput { position } => {
                write!(f, "Unexpected end of input [position: {}]", position)
            }

            LispError::ConversionError { tag, target } => {
                write!(f, "Token to {} conversion error: {}", target, tag)
            }

            LispError::SemanticError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for LispError {}

// Conversion implementations for common error types
impl From<io::Error> for LispError {
    fn from(err: io::Error) -> Self {
        LispError::IoError(err)
    }
}

impl From<regex::Error> for LispError {
    fn from(err: regex::Error) -> Self {
        LispError::PatternError(err.to_string())
    }
}

// Type alias for Result with LispError
pub type LispResult<T> = Result<T, LispError>;
