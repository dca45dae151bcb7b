//! Derivation of the 13×13 interval composition table from the point-algebra
//! signatures in [`crate::relation::Relation::endpoint_signature`].
//!
//! Composing relation `A` (between X and Y) with relation `B` (between Y and
//! Z) asks which orderings are possible between X's and Z's endpoints, given
//! the orderings A and B fix against Y's endpoints. Each of the four
//! cross-endpoint comparisons (startX/startZ, startX/endZ, endX/startZ,
//! endX/endZ) can be reached by two independent paths through Y's two
//! endpoints; intersecting both paths gives the tightest possible point
//! relation. Trying every combination of the four resulting point-relation
//! sets against the thirteen relations' own signatures yields exactly the
//! relations compatible with composing A and B.
//!
//! This sidesteps transcribing a 169-cell table by hand — the failure mode
//! that produced the errata in Allen's original paper for the `contains`,
//! `overlaps` and `overlappedBy` rows. Those three corrected cells fall out
//! of this derivation automatically.

use crate::point::PointRelSet;
use crate::relation::Relation;
use crate::relset::RelSet;
use std::sync::OnceLock;

fn compose_basic(a: Relation, b: Relation) -> RelSet {
    let (a_ss, a_se, a_es, a_ee) = a.endpoint_signature();
    let (b_ss, b_se, b_es, b_ee) = b.endpoint_signature();
    let single = PointRelSet::single;

    // startX vs startZ: via startY (a_ss, b_ss) or via endY (a_se, b_es).
    let r_ss = single(a_ss)
        .compose(single(b_ss))
        .intersect(single(a_se).compose(single(b_es)));
    // startX vs endZ: via startY (a_ss, b_se) or via endY (a_se, b_ee).
    let r_se = single(a_ss)
        .compose(single(b_se))
        .intersect(single(a_se).compose(single(b_ee)));
    // endX vs startZ: via startY (a_es, b_ss) or via endY (a_ee, b_es).
    let r_es = single(a_es)
        .compose(single(b_ss))
        .intersect(single(a_ee).compose(single(b_es)));
    // endX vs endZ: via startY (a_es, b_se) or via endY (a_ee, b_ee).
    let r_ee = single(a_es)
        .compose(single(b_se))
        .intersect(single(a_ee).compose(single(b_ee)));

    let mut result = RelSet::EMPTY;
    for candidate in Relation::ALL {
        let (c_ss, c_se, c_es, c_ee) = candidate.endpoint_signature();
        if r_ss.contains(c_ss) && r_se.contains(c_se) && r_es.contains(c_es) && r_ee.contains(c_ee)
        {
            result = result.union(RelSet::singleton(candidate));
        }
    }
    result
}

fn build_table() -> [[RelSet; 13]; 13] {
    let mut table = [[RelSet::EMPTY; 13]; 13];
    for (i, a) in Relation::ALL.into_iter().enumerate() {
        for (j, b) in Relation::ALL.into_iter().enumerate() {
            table[i][j] = compose_basic(a, b);
        }
    }
    table
}

/// The cached 13×13 composition table, derived once on first use.
pub(crate) fn table() -> &'static [[RelSet; 13]; 13] {
    static TABLE: OnceLock<[[RelSet; 13]; 13]> = OnceLock::new();
    TABLE.get_or_init(build_table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(s: RelSet) -> Vec<&'static str> {
        s.to_names()
    }

    /// The three cells Allen's 1983 paper got wrong (see crate docs): all
    /// three must widen to the same nine-relation set.
    #[test]
    fn corrected_cells_match_spec() {
        let expected = RelSet::singleton(Relation::Overlaps)
            .union(RelSet::singleton(Relation::OverlappedBy))
            .union(RelSet::singleton(Relation::During))
            .union(RelSet::singleton(Relation::Contains))
            .union(RelSet::singleton(Relation::Equals))
            .union(RelSet::singleton(Relation::Starts))
            .union(RelSet::singleton(Relation::StartedBy))
            .union(RelSet::singleton(Relation::Finishes))
            .union(RelSet::singleton(Relation::FinishedBy));

        let t = table();
        assert_eq!(
            t[Relation::Contains as usize][Relation::During as usize],
            expected,
            "contains (x) during = {:?}",
            names(t[Relation::Contains as usize][Relation::During as usize])
        );
        assert_eq!(
            t[Relation::Overlaps as usize][Relation::OverlappedBy as usize],
            expected
        );
        assert_eq!(
            t[Relation::OverlappedBy as usize][Relation::Overlaps as usize],
            expected
        );
    }

    #[test]
    fn before_before_is_before() {
        let t = table();
        assert_eq!(
            t[Relation::Before as usize][Relation::Before as usize],
            RelSet::singleton(Relation::Before)
        );
    }

    #[test]
    fn before_after_is_unconstrained() {
        let t = table();
        assert_eq!(
            t[Relation::Before as usize][Relation::After as usize],
            RelSet::ALL
        );
    }

    #[test]
    fn meets_then_met_by_pins_the_shared_endpoint() {
        // X meets Y and Y met-by Z (i.e. Z meets Y) forces X, Y and Z to
        // share the same touching point, so only the three relations whose
        // signature ends in endX = endZ survive: finishes, finished-by and
        // equals.
        let expected = RelSet::singleton(Relation::Finishes)
            .union(RelSet::singleton(Relation::FinishedBy))
            .union(RelSet::singleton(Relation::Equals));
        let t = table();
        assert_eq!(
            t[Relation::Meets as usize][Relation::MetBy as usize],
            expected
        );
    }
}
