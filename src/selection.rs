//! The set of signal names chosen for plotting.

use std::collections::HashSet;

/// Click-to-toggle membership set over signal names.
///
/// Toggling is total over any string and is its own inverse: toggling the
/// same name twice restores the previous state. Consumers only rely on
/// membership, never on ordering.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    names: HashSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `name` if absent, remove it if present.
    pub fn toggle(&mut self, name: &str) {
        if !self.names.remove(name) {
            self.names.insert(name.to_string());
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
