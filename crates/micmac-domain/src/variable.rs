//! Variable module - the ordered, uniquely named system variables

use crate::config::EngineConfig;
use crate::error::MicmacError;
use std::collections::HashSet;

/// Ordered variable names; position i is row/column i of every matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableSet {
    names: Vec<String>,
}

impl VariableSet {
    /// Validate and wrap a list of names
    ///
    /// The count is checked against the configured bounds first, then names
    /// must be pairwise distinct (exact comparison).
    pub fn new(names: Vec<String>, config: &EngineConfig) -> Result<Self, MicmacError> {
        let count = names.len();
        if count < config.min_variables || count > config.max_variables {
            return Err(MicmacError::VariableCount {
                count,
                min: config.min_variables,
                max: config.max_variables,
            });
        }

        let mut seen = HashSet::with_capacity(count);
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(MicmacError::DuplicateVariable(name.clone()));
            }
        }

        Ok(Self { names })
    }

    /// Default names "Variable 1" .. "Variable N"
    pub fn numbered_names(count: usize) -> Vec<String> {
        (1..=count).map(|i| format!("Variable {}", i)).collect()
    }

    /// Number of variables
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name at position `index`
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Position of `name`
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// All names, in order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Consume the set, returning the names
    pub fn into_names(self) -> Vec<String> {
        self.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_valid_set() {
        let set = VariableSet::new(names(&["A", "B", "C"]), &EngineConfig::default()).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.name(1), Some("B"));
        assert_eq!(set.index_of("C"), Some(2));
        assert_eq!(set.index_of("D"), None);
    }

    #[test]
    fn test_duplicate_rejected() {
        let result = VariableSet::new(names(&["A", "B", "A"]), &EngineConfig::default());
        assert_eq!(result, Err(MicmacError::DuplicateVariable("A".to_string())));
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let result = VariableSet::new(names(&["a", "A", "b"]), &EngineConfig::default());
        assert!(result.is_ok());
    }

    #[test]
    fn test_count_bounds() {
        let config = EngineConfig::default().with_max_variables(4);
        assert!(matches!(
            VariableSet::new(names(&["A", "B"]), &config),
            Err(MicmacError::VariableCount { count: 2, min: 3, max: 4 })
        ));
        assert!(matches!(
            VariableSet::new(names(&["A", "B", "C", "D", "E"]), &config),
            Err(MicmacError::VariableCount { count: 5, .. })
        ));
    }

    #[test]
    fn test_count_checked_before_duplicates() {
        let result = VariableSet::new(names(&["A", "A"]), &EngineConfig::default());
        assert!(matches!(result, Err(MicmacError::VariableCount { .. })));
    }

    #[test]
    fn test_numbered_names() {
        assert_eq!(
            VariableSet::numbered_names(3),
            vec!["Variable 1", "Variable 2", "Variable 3"]
        );
    }
}
