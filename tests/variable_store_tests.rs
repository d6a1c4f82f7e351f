use lispint::errors::LispError;
use lispint::semantic::variable_store::{Symbol, VariableStore};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_creation() {
        let store = VariableStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_set_and_get() {
        let mut store = VariableStore::new();
        store.set_or_create("x", 5);
        assert!(matches!(store.get("x"), Ok(5)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_overwrite_keeps_single_entry() {
        let mut store = VariableStore::new();
        store.set_or_create("x", 5);
        store.set_or_create("x", -12);
        assert!(matches!(store.get("x"), Ok(-12)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_missing_variable() {
        let store = VariableStore::new();
        match store.get("nope") {
            Err(LispError::SemanticError(message)) => {
                assert_eq!(message, "Variable does not exist: nope");
            }
            other => panic!("Expected a SemanticError, but got: {:?}", other),
        }
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut store = VariableStore::new();
        store.set_or_create("count", 1);
        store.set_or_create("Count", 2);
        assert!(matches!(store.get("count"), Ok(1)));
        assert!(matches!(store.get("Count"), Ok(2)));
        assert!(store.get("COUNT").is_err());
    }

    #[test]
    fn test_iteration_in_creation_order() {
        let mut store = VariableStore::new();
        store.set_or_create("b", 2);
        store.set_or_create("a", 1);
        store.set_or_create("b", 3);
        let symbols: Vec<Symbol> = store.iter().cloned().collect();
        assert_eq!(
            symbols,
            vec![Symbol::new("b".to_string(), 3), Symbol::new("a".to_string(), 1)]
        );
    }
}
