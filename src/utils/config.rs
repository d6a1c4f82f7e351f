// Scanner constants
pub mod lexer {
    // A NUMBER is an optional '-' followed by "0" or a digit string without leading zeros.
    pub const NUMBER_PATTERN: &str = r"^-?(0|[1-9][0-9]*)$";
    pub const VARIABLE_PATTERN: &str = r"^[A-Za-z]+$";

    pub const OPEN_PAREN: char = '(';
    pub const CLOSE_PAREN: char = ')';
}

// Parser constants
pub mod parser {
    // Deepest allowed stack of open blocks and expressions. Evaluation recurses
    // no deeper than the tree, so this bounds it as well.
    pub const MAX_NESTING_DEPTH: usize = 200;
}

// Evaluator constants
pub mod interpreter {
    // Text accepted by INPUT: decimal digits with an optional single leading '-'.
    pub const INPUT_PATTERN: &str = r"^-?[0-9]+$";
}

// Command line constants
pub mod cli {
    pub const SOURCE_EXTENSION: &str = "lisp";
}

// Error messages raised at runtime
pub mod errors {
    pub const UNDEFINED_VARIABLE: &str = "Variable does not exist";
    pub const ZERO_DIVISION: &str = "ZERO DIVISION";
    pub const NOT_A_NUMBER: &str = "NOT AN ACCEPTABLE NUMBER";
    pub const INTEGER_OVERFLOW: &str = "INTEGER OVERFLOW";
    pub const CHANNEL_UNDERFLOW: &str = "result channel underflow";
}
