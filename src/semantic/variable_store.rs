use crate::utils::config::errors::UNDEFINED_VARIABLE;
use crate::utils::errors::{LispError, LispResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub value: i64,
}

impl Symbol {
    pub fn new(name: String, value: i64) -> Self {
        Self { name, value }
    }
}

/// Flat name -> integer mapping for one run. There is a single namespace:
/// IF and WHILE bodies read and write the same entries as the outer program.
#[derive(Debug, Default)]
pub struct VariableStore {
    variables: Vec<Symbol>,
}

impl VariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite `name` if it exists, otherwise append a new entry.
    pub fn set_or_create(&mut self, name: &str, value: i64) {
        if let Some(symbol) = self.variables.iter_mut().find(|symbol| symbol.name == name) {
            symbol.value = value;
            return;
        }
        self.variables.push(Symbol::new(name.to_string(), value));
    }

    pub fn get(&self, name: &str) -> LispResult<i64> {
        self.variables
            .iter()
            .find(|symbol| symbol.name == name)
            .map(|symbol| symbol.value)
            .ok_or_else(|| LispError::semantic(format!("{}: {}", UNDEFINED_VARIABLE, name)))
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    // Entries in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.variables.iter()
    }
}
