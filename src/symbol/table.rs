use std::collections::HashMap;

/// Run-scoped mapping from variable name to its last assigned value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    variables: HashMap<String, i32>,
}

impl SymbolTable {
    #[must_use]
    pub fn new() -> Self {
        Self {
            variables: HashMap::new(),
        }
    }

    /// Insert a variable, overwriting any previous value under the same name.
    /// Returns the value it replaced.
    pub fn set(&mut self, name: impl Into<String>, value: i32) -> Option<i32> {
        self.variables.insert(name.into(), value)
    }

    /// Look up a variable
    #[must_use]
    pub fn get(&self, name: &str) -> Option<i32> {
        self.variables.get(name).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// All entries ordered by name
    #[must_use]
    pub fn entries(&self) -> Vec<(&str, i32)> {
        let mut entries: Vec<_> = self
            .variables
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_write_wins() {
        let mut table = SymbolTable::new();
        assert_eq!(table.set("x", 5), None);
        assert_eq!(table.set("x", 7), Some(5));
        assert_eq!(table.get("x"), Some(7));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn missing_names_are_absent() {
        let table = SymbolTable::new();
        assert!(table.is_empty());
        assert_eq!(table.get("x"), None);
    }

    #[test]
    fn entries_are_sorted_by_name() {
        let mut table = SymbolTable::default();
        table.set("b", 2);
        table.set("a", 1);
        table.set(String::from("c"), 3);
        assert_eq!(table.entries(), vec![("a", 1), ("b", 2), ("c", 3)]);
    }
}
