//! An internal point algebra, used only to derive the interval composition
//! table (see [`crate::composition`]).
//!
//! Every Allen relation between two intervals can be restated as the four
//! pairwise orderings between the intervals' start/end points. Composing two
//! interval relations therefore reduces to a small constraint problem over six
//! points in the point algebra of `{<, =, >}`, which is solved here by the
//! same style of path-consistency propagation as the interval engine itself.

/// One of the three possible orderings between two endpoint values.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum PointRel {
    Lt,
    Eq,
    Gt,
}

impl PointRel {
    pub(crate) const ALL: [PointRel; 3] = [PointRel::Lt, PointRel::Eq, PointRel::Gt];

    fn bit(self) -> u8 {
        1 << (self as u8)
    }

    pub(crate) fn inverse(self) -> PointRel {
        match self {
            PointRel::Lt => PointRel::Gt,
            PointRel::Eq => PointRel::Eq,
            PointRel::Gt => PointRel::Lt,
        }
    }
}

/// A subset of `{Lt, Eq, Gt}` — the point-algebra analogue of [`crate::RelSet`].
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct PointRelSet(u8);

impl PointRelSet {
    pub(crate) const ANY: PointRelSet = PointRelSet(0b111);

    pub(crate) fn single(r: PointRel) -> Self {
        PointRelSet(r.bit())
    }

    pub(crate) fn contains(self, r: PointRel) -> bool {
        self.0 & r.bit() != 0
    }

    pub(crate) fn union(self, other: Self) -> Self {
        PointRelSet(self.0 | other.0)
    }

    pub(crate) fn intersect(self, other: Self) -> Self {
        PointRelSet(self.0 & other.0)
    }

    /// The point-algebra composition table. `Lt` composed with `Gt` (in
    /// either order) is unconstrained; every other pair composes to a single
    /// point relation.
    fn compose_single(a: PointRel, b: PointRel) -> PointRelSet {
        use PointRel::*;
        match (a, b) {
            (Lt, Lt) => PointRelSet::single(Lt),
            (Lt, Eq) => PointRelSet::single(Lt),
            (Lt, Gt) => PointRelSet::ANY,
            (Eq, Lt) => PointRelSet::single(Lt),
            (Eq, Eq) => PointRelSet::single(Eq),
            (Eq, Gt) => PointRelSet::single(Gt),
            (Gt, Lt) => PointRelSet::ANY,
            (Gt, Eq) => PointRelSet::single(Gt),
            (Gt, Gt) => PointRelSet::single(Gt),
        }
    }

    pub(crate) fn compose(self, other: Self) -> Self {
        let mut out = PointRelSet(0);
        for a in PointRel::ALL {
            if !self.contains(a) {
                continue;
            }
            for b in PointRel::ALL {
                if !other.contains(b) {
                    continue;
                }
                out = out.union(Self::compose_single(a, b));
                if out == PointRelSet::ANY {
                    return out;
                }
            }
        }
        out
    }
}
