//! A compact 13-bit encoding of any subset of the thirteen basic Allen
//! relations, with boolean-algebra operations, an inverse operator, and the
//! composition (transitivity) operator.

use crate::composition;
use crate::error::RelSetError;
use crate::relation::Relation;

/// A subset of the thirteen basic [`Relation`]s, packed into the low 13 bits
/// of a `u16`. Bits above position 12 are never set by any operation in this
/// module; the only way they can appear is through [`RelSet::from_bits`]
/// being bypassed, which is undefined behaviour per the crate's contract.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Default)]
pub struct RelSet(u16);

const VALID_BITS: u16 = 0x1FFF;

impl RelSet {
    /// The empty relation set — no relation admissible.
    pub const EMPTY: RelSet = RelSet(0);

    /// The full relation set — all thirteen relations admissible.
    pub const ALL: RelSet = RelSet(VALID_BITS);

    /// Builds a `RelSet` from a single relation.
    pub const fn singleton(r: Relation) -> RelSet {
        RelSet(r.mask())
    }

    /// Builds a `RelSet` from a raw bit pattern.
    ///
    /// # Errors
    ///
    /// Returns [`RelSetError::StrayHighBits`] if any bit above position 12
    /// is set. This is the one validated boundary for `RelSet`; every other
    /// constructor in this module is infallible because it is already closed
    /// over the 13-bit domain.
    pub const fn from_bits(bits: u16) -> Result<RelSet, RelSetError> {
        if bits & !VALID_BITS != 0 {
            Err(RelSetError::StrayHighBits(bits))
        } else {
            Ok(RelSet(bits))
        }
    }

    /// The raw bit pattern, for persistence or transmission (see the crate's
    /// canonical bit table).
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// `true` if no relation is admissible.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// `true` if `r` is one of the admissible relations.
    pub const fn contains(self, r: Relation) -> bool {
        self.0 & r.mask() != 0
    }

    /// `true` if every relation admissible in `self` is also admissible in
    /// `other`.
    pub const fn is_subset(self, other: RelSet) -> bool {
        self.0 & !other.0 == 0
    }

    /// The set of relations admissible in either operand.
    pub const fn union(self, other: RelSet) -> RelSet {
        RelSet(self.0 | other.0)
    }

    /// The set of relations admissible in both operands.
    pub const fn intersection(self, other: RelSet) -> RelSet {
        RelSet(self.0 & other.0)
    }

    /// The pointwise inverse: `{ inverse(r) | r in self }`.
    pub const fn inverse(self) -> RelSet {
        let mut out = 0u16;
        let mut i = 0;
        while i < 13 {
            if self.0 & (1 << i) != 0 {
                out |= Relation::from_index(i).inverse().mask();
            }
            i += 1;
        }
        RelSet(out)
    }

    /// The relation set implied by transitivity: for `self` holding between
    /// `(X, Y)` and `other` holding between `(Y, Z)`, the set of relations
    /// possible between `(X, Z)`.
    ///
    /// Iterates over the set bits of both operands against the cached
    /// composition table, stopping early once the accumulated result is
    /// [`RelSet::ALL`].
    pub fn compose(self, other: RelSet) -> RelSet {
        if self.is_empty() || other.is_empty() {
            return RelSet::EMPTY;
        }
        let table = composition::table();
        let mut acc = RelSet::EMPTY;
        for a in 0..13usize {
            if self.0 & (1 << a) == 0 {
                continue;
            }
            for b in 0..13usize {
                if other.0 & (1 << b) == 0 {
                    continue;
                }
                acc = acc.union(table[a][b]);
                if acc == RelSet::ALL {
                    return acc;
                }
            }
        }
        acc
    }

    /// The human-readable names of the admissible relations, in canonical
    /// enumeration order.
    pub fn to_names(self) -> Vec<&'static str> {
        Relation::ALL
            .into_iter()
            .filter(|r| self.contains(*r))
            .map(Relation::name)
            .collect()
    }
}

impl std::fmt::Debug for RelSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.to_names()).finish()
    }
}

impl From<Relation> for RelSet {
    fn from(r: Relation) -> Self {
        RelSet::singleton(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_relset() -> impl Strategy<Value = RelSet> {
        (0u16..=VALID_BITS).prop_map(RelSet)
    }

    #[test]
    fn from_bits_rejects_stray_high_bits() {
        assert!(RelSet::from_bits(1 << 13).is_err());
        assert!(RelSet::from_bits(VALID_BITS).is_ok());
    }

    #[test]
    fn singleton_names_round_trip() {
        assert_eq!(RelSet::singleton(Relation::Before).to_names(), ["before"]);
        assert_eq!(
            RelSet::singleton(Relation::OverlappedBy).to_names(),
            ["overlapped by"]
        );
    }

    proptest! {
        #[test]
        fn inverse_is_involutive(s in arb_relset()) {
            prop_assert_eq!(s.inverse().inverse(), s);
        }

        #[test]
        fn inverse_fixes_empty_all_equals(s in arb_relset()) {
            let _ = s;
            prop_assert_eq!(RelSet::EMPTY.inverse(), RelSet::EMPTY);
            prop_assert_eq!(RelSet::ALL.inverse(), RelSet::ALL);
            prop_assert_eq!(
                RelSet::singleton(Relation::Equals).inverse(),
                RelSet::singleton(Relation::Equals)
            );
        }

        #[test]
        fn compose_with_equals_is_identity(s in arb_relset()) {
            let eq = RelSet::singleton(Relation::Equals);
            prop_assert_eq!(s.compose(eq), s);
            prop_assert_eq!(eq.compose(s), s);
        }

        #[test]
        fn compose_with_empty_is_empty(s in arb_relset()) {
            prop_assert_eq!(s.compose(RelSet::EMPTY), RelSet::EMPTY);
            prop_assert_eq!(RelSet::EMPTY.compose(s), RelSet::EMPTY);
        }

        #[test]
        fn inverse_distributes_over_compose(s1 in arb_relset(), s2 in arb_relset()) {
            prop_assert_eq!(
                s1.compose(s2).inverse(),
                s2.inverse().compose(s1.inverse())
            );
        }

        #[test]
        fn compose_distributes_over_union(s1 in arb_relset(), s2 in arb_relset(), t in arb_relset()) {
            prop_assert_eq!(
                s1.union(s2).compose(t),
                s1.compose(t).union(s2.compose(t))
            );
        }

        #[test]
        fn is_subset_is_consistent_with_union(s1 in arb_relset(), s2 in arb_relset()) {
            prop_assert_eq!(s1.is_subset(s1.union(s2)), true);
        }
    }
}
