use std::io::{BufRead, Write};
use std::{fs::File, io::Read, path::Path};

pub mod ast;
pub mod frontend;
pub mod semantic;
pub mod utils;

pub use utils::errors;

pub const VERSION: &str = "0.1.0";

pub struct LineNumber {
    pub line: usize,
}

impl Default for LineNumber {
    fn default() -> Self {
        Self { line: 1 }
    }
}

use crate::ast::Ast;
use crate::errors::{LispError, LispResult};
use crate::frontend::{lexer::scan, parser::parse_program};
use crate::semantic::{Evaluator, VariableStore};

pub fn read(filename: &Path) -> LispResult<String> {
    // Open the path in read-only mode
    let mut file = File::open(filename)
        .map_err(|e| LispError::FileReadError(format!("Cannot open {}: {}", filename.display(), e)))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Scan, parse and run `source` with fresh arenas and a fresh variable store.
/// Returns the store as it was when the program finished.
pub fn interpret<R: BufRead, W: Write>(source: &str, input: R, output: W) -> LispResult<VariableStore> {
    let mut state = LineNumber::default();
    let tokens = scan(&mut state, source)?;

    let mut ast = Ast::new();
    let program = parse_program(&tokens, &mut ast)?;

    let mut store = VariableStore::new();
    Evaluator::new(&ast, &mut store, input, output)?.run(program)?;
    Ok(store)
}
