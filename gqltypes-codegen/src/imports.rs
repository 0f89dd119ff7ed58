//! Identifier usage tracking.
//!
//! Every builder returns a [`Fragment`]: the node it built plus the external
//! identifiers that node needs in scope. Callers merge fragments' imports
//! into the model-level set.

use indexmap::IndexSet;

/// Ordered set of external identifiers, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Imports {
    names: IndexSet<String>,
}

impl Imports {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an identifier. Returns false if it was already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    /// Appends the identifiers of `other` not yet present, keeping their order.
    pub fn merge(&mut self, other: Imports) {
        self.names.extend(other.names);
    }

    /// Returns true if the identifier has been recorded.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Returns the number of identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no identifier has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates identifiers in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Returns the identifiers as an owned vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.names.iter().cloned().collect()
    }
}

impl IntoIterator for Imports {
    type Item = String;
    type IntoIter = indexmap::set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.into_iter()
    }
}

impl<S: Into<String>> FromIterator<S> for Imports {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut imports = Self::new();
        for name in iter {
            imports.insert(name);
        }
        imports
    }
}

/// A built node together with the identifiers it introduces.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment<T> {
    /// Built node.
    pub node: T,
    /// Identifiers the node references.
    pub imports: Imports,
}

impl<T> Fragment<T> {
    /// Wraps a node that references no external identifiers.
    #[must_use]
    pub fn new(node: T) -> Self {
        Self {
            node,
            imports: Imports::new(),
        }
    }

    /// Records an identifier used by the node.
    #[must_use]
    pub fn with_import(mut self, name: impl Into<String>) -> Self {
        self.imports.insert(name);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_deduplicates() {
        let mut imports = Imports::new();
        assert!(imports.insert("GraphQLString"));
        assert!(imports.insert("GraphQLNonNull"));
        assert!(!imports.insert("GraphQLString"));
        assert_eq!(imports.len(), 2);
        assert_eq!(imports.to_vec(), vec!["GraphQLString", "GraphQLNonNull"]);
    }

    #[test]
    fn test_merge_keeps_first_seen_order() {
        let mut imports: Imports = ["GraphQLInt", "GraphQLNonNull"].into_iter().collect();
        let other: Imports = ["GraphQLNonNull", "UserType", "GraphQLInt"]
            .into_iter()
            .collect();
        imports.merge(other);

        let names: Vec<_> = imports.iter().collect();
        assert_eq!(names, vec!["GraphQLInt", "GraphQLNonNull", "UserType"]);
        assert!(imports.contains("UserType"));
        assert!(!imports.contains("GraphQLFloat"));
    }

    #[test]
    fn test_fragment_with_import() {
        let fragment = Fragment::new(()).with_import("GraphQLEnumType");
        assert_eq!(fragment.imports.to_vec(), vec!["GraphQLEnumType"]);
        assert!(Fragment::new(()).imports.is_empty());
    }
}
