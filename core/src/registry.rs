//! An append-only mapping from an opaque external identifier to a dense
//! internal index, plus reverse lookup.

use fnv::FnvHashMap;
use std::hash::Hash;

/// Maps caller-chosen identifiers to dense `0..n` internal indices.
///
/// Identifiers are never removed and indices are never reused: the registry
/// only grows for the lifetime of the [`crate::ConstraintNetwork`] it backs.
/// Lookup by identifier uses a non-cryptographic hasher ([`fnv`]) since
/// identifiers are opaque, adversarial input is out of scope, and the set of
/// nodes only grows monotonically within a process.
#[derive(Clone, Debug, Default)]
pub(crate) struct NodeRegistry<K> {
    ids: Vec<K>,
    index: FnvHashMap<K, usize>,
}

impl<K: Eq + Hash + Clone> NodeRegistry<K> {
    pub(crate) fn new() -> Self {
        Self {
            ids: Vec::new(),
            index: FnvHashMap::default(),
        }
    }

    pub(crate) fn with_capacity(cap: usize) -> Self {
        Self {
            ids: Vec::with_capacity(cap),
            index: FnvHashMap::with_capacity_and_hasher(cap, Default::default()),
        }
    }

    /// Registers `id`, returning its new index, or `None` if an equal
    /// identifier is already registered (no state change in that case).
    pub(crate) fn add(&mut self, id: K) -> Option<usize> {
        if self.index.contains_key(&id) {
            return None;
        }
        let idx = self.ids.len();
        self.ids.push(id.clone());
        self.index.insert(id, idx);
        Some(idx)
    }

    pub(crate) fn get(&self, id: &K) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub(crate) fn ids(&self) -> &[K] {
        &self.ids
    }

    pub(crate) fn len(&self) -> usize {
        self.ids.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_dense_indices() {
        let mut reg = NodeRegistry::new();
        assert_eq!(reg.add("a"), Some(0));
        assert_eq!(reg.add("b"), Some(1));
        assert_eq!(reg.add("c"), Some(2));
        assert_eq!(reg.len(), 3);
        assert_eq!(reg.get(&"b"), Some(1));
    }

    #[test]
    fn rejects_duplicate_identifier() {
        let mut reg = NodeRegistry::new();
        assert_eq!(reg.add("a"), Some(0));
        assert_eq!(reg.add("a"), None);
        assert_eq!(reg.len(), 1);
    }
}
