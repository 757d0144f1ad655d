// Variable environment: a single flat name -> value table

use rustc_hash::FxHashMap;

/// Mapping from variable name to the value of its most recent assignment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: FxHashMap<String, i64>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.vars.get(name).copied()
    }

    /// Bind `name` to `value`, overwriting any previous binding.
    /// Returns the previous value, if there was one.
    pub fn assign(&mut self, name: &str, value: i64) -> Option<i64> {
        match self.vars.get_mut(name) {
            Some(slot) => Some(std::mem::replace(slot, value)),
            None => {
                self.vars.insert(name.to_string(), value);
                None
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// All bindings, sorted by name
    pub fn bindings(&self) -> Vec<(&str, i64)> {
        let mut bindings: Vec<_> = self
            .vars
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
            .collect();
        bindings.sort_unstable_by_key(|(name, _)| *name);
        bindings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_and_get() {
        let mut env = Environment::new();
        assert!(env.is_empty());
        assert_eq!(env.get("x"), None);

        assert_eq!(env.assign("x", 5), None);
        assert_eq!(env.get("x"), Some(5));
        assert!(env.contains("x"));
    }

    #[test]
    fn test_assign_overwrites() {
        let mut env = Environment::new();
        env.assign("x", 5);

        assert_eq!(env.assign("x", -2), Some(5));
        assert_eq!(env.get("x"), Some(-2));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn test_bindings_are_sorted() {
        let mut env = Environment::new();
        env.assign("b", 2);
        env.assign("a1", 1);
        env.assign("c", 3);

        assert_eq!(env.bindings(), vec![("a1", 1), ("b", 2), ("c", 3)]);
    }
}
