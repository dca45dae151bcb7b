//! The public API facade: add-node, add-constraint, remove-constraint,
//! query, run-consistency.

use crate::engine;
use crate::matrix::ConstraintMatrix;
use crate::registry::NodeRegistry;
use crate::relation::Relation;
use crate::relset::RelSet;
use fnv::FnvHashSet;
use std::hash::Hash;

/// A single user-asserted constraint: `source` is in relation `relations`
/// to `destination`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Constraint<K> {
    /// The source node's identifier.
    pub source: K,
    /// The destination node's identifier.
    pub destination: K,
    /// The admissible relations asserted from `source` to `destination`.
    pub relations: RelSet,
}

#[derive(Clone, Debug)]
struct StoredConstraint<K> {
    source: K,
    destination: K,
    relations: RelSet,
    source_idx: usize,
    destination_idx: usize,
}

/// A directed graph of temporal intervals ("nodes") annotated with sets of
/// admissible relations ("constraints"), maintained under path consistency.
///
/// Not safe for concurrent mutation, nor for concurrent mutation-plus-read:
/// callers wanting concurrency must serialise access externally (one owner
/// per network) or shard by network.
#[derive(Clone, Debug)]
pub struct ConstraintNetwork<K> {
    registry: NodeRegistry<K>,
    matrix: ConstraintMatrix,
    constraints: Vec<StoredConstraint<K>>,
    constrained_pairs: FnvHashSet<(usize, usize)>,
    inconsistent: bool,
}

impl<K: Eq + Hash + Clone> Default for ConstraintNetwork<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> ConstraintNetwork<K> {
    /// Creates an empty network.
    pub fn new() -> Self {
        Self {
            registry: NodeRegistry::new(),
            matrix: ConstraintMatrix::new(),
            constraints: Vec::new(),
            constrained_pairs: FnvHashSet::default(),
            inconsistent: false,
        }
    }

    /// Creates an empty network with physical storage reserved for `nodes`
    /// nodes up front, avoiding the doubling reallocations a caller who
    /// knows its node count in advance would otherwise pay.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            registry: NodeRegistry::with_capacity(nodes),
            matrix: ConstraintMatrix::with_capacity(nodes),
            constraints: Vec::new(),
            constrained_pairs: FnvHashSet::default(),
            inconsistent: false,
        }
    }

    fn normalize_pair(a: usize, b: usize) -> (usize, usize) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// Registers a new node. Returns `false` and makes no state change if an
    /// equal identifier is already registered.
    pub fn add_node(&mut self, id: K) -> bool {
        match self.registry.add(id.clone()) {
            Some(_) => {
                self.matrix.push_node();
                true
            }
            None => {
                tracing::debug!("rejected duplicate node");
                false
            }
        }
    }

    /// Looks up a registered node's internal index by identifier.
    pub fn get_node(&self, id: &K) -> Option<usize> {
        self.registry.get(id)
    }

    /// All registered node identifiers, in registration order.
    pub fn get_modeled_nodes(&self) -> &[K] {
        self.registry.ids()
    }

    /// The number of registered nodes.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// `true` if no nodes are registered.
    pub fn is_empty(&self) -> bool {
        self.registry.len() == 0
    }

    /// Asserts `relations` from `source` to `destination` and triggers
    /// incremental path consistency.
    ///
    /// Rejects (returning `false`, with no state change) if either endpoint
    /// is unregistered or if the unordered pair `{source, destination}`
    /// already carries an asserted constraint (only one constraint per pair
    /// may be asserted; remove it first to replace it).
    ///
    /// Returns `true` on successful addition regardless of whether the
    /// resulting network is consistent — check [`Self::path_consistency`]
    /// for the verdict.
    pub fn add_constraint(&mut self, source: K, destination: K, relations: RelSet) -> bool {
        let (Some(src), Some(dst)) = (self.registry.get(&source), self.registry.get(&destination))
        else {
            tracing::debug!("rejected constraint referring to an unregistered node");
            return false;
        };
        let pair = Self::normalize_pair(src, dst);
        if self.constrained_pairs.contains(&pair) {
            tracing::debug!(src, dst, "rejected duplicate constraint on an already-constrained pair");
            return false;
        }

        self.constrained_pairs.insert(pair);
        self.constraints.push(StoredConstraint {
            source,
            destination,
            relations,
            source_idx: src,
            destination_idx: dst,
        });
        self.matrix.set(src, dst, relations);
        self.matrix.set(dst, src, relations.inverse());

        if !engine::propagate(&mut self.matrix, &[(src, dst), (dst, src)]) {
            self.inconsistent = true;
            tracing::warn!("network became inconsistent after adding a constraint");
        }
        true
    }

    /// Removes the named constraint, rebuilding the matrix from the
    /// remaining asserted constraints and re-running path consistency from
    /// scratch (tightening is lossy, so removal cannot be incremental).
    ///
    /// Returns `true` if the constraint existed and was removed, `false`
    /// otherwise (no state change).
    pub fn remove_constraint(&mut self, source: &K, destination: &K, relations: RelSet) -> bool {
        let Some(pos) = self.constraints.iter().position(|c| {
            c.source == *source && c.destination == *destination && c.relations == relations
        }) else {
            tracing::debug!("rejected removal of an unknown constraint");
            return false;
        };
        self.constraints.remove(pos);

        self.matrix.reset();
        self.constrained_pairs.clear();
        self.inconsistent = false;

        let mut seeds = Vec::with_capacity(self.constraints.len() * 2);
        for c in &self.constraints {
            self.matrix.set(c.source_idx, c.destination_idx, c.relations);
            self.matrix
                .set(c.destination_idx, c.source_idx, c.relations.inverse());
            self.constrained_pairs
                .insert(Self::normalize_pair(c.source_idx, c.destination_idx));
            seeds.push((c.source_idx, c.destination_idx));
            seeds.push((c.destination_idx, c.source_idx));
        }

        if !engine::propagate(&mut self.matrix, &seeds) {
            self.inconsistent = true;
            tracing::warn!("network remains inconsistent after removing a constraint");
        }
        true
    }

    /// The current path-consistency verdict. Idempotent when nothing has
    /// changed: the matrix is kept at a fixed point incrementally by
    /// [`Self::add_constraint`] and [`Self::remove_constraint`], so this is
    /// just a read of the sticky flag, not a re-run of the fixed-point
    /// computation.
    pub fn path_consistency(&self) -> bool {
        !self.inconsistent
    }

    /// A read-only view of the current constraint matrix.
    pub fn get_constraint_network(&self) -> &ConstraintMatrix {
        &self.matrix
    }

    /// All currently asserted constraints, in assertion order (removed
    /// constraints are gone; none are deduplicated since at most one may be
    /// asserted per unordered pair).
    pub fn get_modeled_constraints(&self) -> Vec<Constraint<K>> {
        self.constraints
            .iter()
            .map(|c| Constraint {
                source: c.source.clone(),
                destination: c.destination.clone(),
                relations: c.relations,
            })
            .collect()
    }

    /// A convenience read of a single matrix cell by node identifier.
    /// Returns `None` if either node is unregistered.
    pub fn query(&self, source: &K, destination: &K) -> Option<RelSet> {
        let src = self.registry.get(source)?;
        let dst = self.registry.get(destination)?;
        Some(self.matrix.get(src, dst))
    }
}

/// Shorthand for asserting the two-node, single-relation case: `a rel b`.
pub fn constraint<K>(source: K, relation: Relation, destination: K) -> Constraint<K> {
    Constraint {
        source,
        destination,
        relations: RelSet::singleton(relation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_duplicate_node() {
        let mut net = ConstraintNetwork::new();
        assert!(net.add_node("a"));
        assert!(!net.add_node("a"));
        assert_eq!(net.len(), 1);
    }

    #[test]
    fn rejects_constraint_on_unregistered_node() {
        let mut net = ConstraintNetwork::new();
        net.add_node("a");
        assert!(!net.add_constraint("a", "b", RelSet::ALL));
    }

    #[test]
    fn rejects_second_constraint_on_same_pair() {
        let mut net = ConstraintNetwork::new();
        net.add_node("a");
        net.add_node("b");
        assert!(net.add_constraint("a", "b", RelSet::singleton(Relation::Before)));
        assert!(!net.add_constraint("a", "b", RelSet::singleton(Relation::After)));
        assert!(!net.add_constraint("b", "a", RelSet::singleton(Relation::After)));
    }

    #[test]
    fn inverse_is_automatic() {
        let mut net = ConstraintNetwork::new();
        net.add_node("a");
        net.add_node("b");
        net.add_constraint("a", "b", RelSet::singleton(Relation::Meets));
        assert_eq!(
            net.query(&"b", &"a"),
            Some(RelSet::singleton(Relation::MetBy))
        );
    }

    #[test]
    fn before_chain_is_consistent_and_closes() {
        let mut net = ConstraintNetwork::new();
        net.add_node("a");
        net.add_node("b");
        net.add_node("c");
        assert!(net.add_constraint("a", "b", RelSet::singleton(Relation::Before)));
        assert!(net.add_constraint("b", "c", RelSet::singleton(Relation::Before)));
        assert!(net.path_consistency());
        assert_eq!(
            net.query(&"a", &"c"),
            Some(RelSet::singleton(Relation::Before))
        );
    }

    #[test]
    fn equality_chain_then_contradiction_is_inconsistent() {
        let mut net = ConstraintNetwork::new();
        for id in ["a", "b", "c", "d"] {
            net.add_node(id);
        }
        let eq = RelSet::singleton(Relation::Equals);
        assert!(net.add_constraint("a", "b", eq));
        assert!(net.add_constraint("b", "c", eq));
        assert!(net.add_constraint("c", "d", eq));
        assert!(net.path_consistency());

        assert!(net.add_constraint("a", "d", RelSet::singleton(Relation::Overlaps)));
        assert!(!net.path_consistency());
    }

    #[test]
    fn removal_can_restore_consistency_and_clears_sticky_flag() {
        let mut net = ConstraintNetwork::new();
        for id in ["a", "b", "c", "d"] {
            net.add_node(id);
        }
        let eq = RelSet::singleton(Relation::Equals);
        net.add_constraint("a", "b", eq);
        net.add_constraint("b", "c", eq);
        net.add_constraint("c", "d", eq);
        net.add_constraint("a", "d", RelSet::singleton(Relation::Overlaps));
        assert!(!net.path_consistency());

        assert!(net.remove_constraint(&"a", &"d", RelSet::singleton(Relation::Overlaps)));
        assert!(net.path_consistency());
    }

    #[test]
    fn removing_unknown_constraint_returns_false() {
        let mut net = ConstraintNetwork::new();
        net.add_node("a");
        net.add_node("b");
        net.add_constraint("a", "b", RelSet::singleton(Relation::Before));
        assert!(!net.remove_constraint(&"a", &"b", RelSet::singleton(Relation::After)));
    }

    #[test]
    fn consistent_triangle_tightens_within_all() {
        let mut net = ConstraintNetwork::new();
        net.add_node("a");
        net.add_node("b");
        net.add_node("c");
        assert!(net.add_constraint("a", "b", RelSet::singleton(Relation::Starts)));
        assert!(net.add_constraint("a", "c", RelSet::singleton(Relation::Contains)));
        assert!(net.path_consistency());
        let bc = net.query(&"b", &"c").unwrap();
        assert!(bc.is_subset(RelSet::ALL));
        assert!(!bc.is_empty());
    }

    #[test]
    fn query_is_none_for_unregistered_node() {
        let mut net = ConstraintNetwork::new();
        net.add_node("a");
        assert_eq!(net.query(&"a", &"ghost"), None);
    }
}
