//! The thirteen basic Allen relations and their canonical bit order.

use crate::point::PointRel;

/// One of the thirteen basic qualitative relations between two intervals.
///
/// Variants are listed, and numbered, in the canonical bit order used by
/// [`crate::RelSet`] and the composition table: `Before` is bit 0, `Equals`
/// is bit 12.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Relation {
    /// `X` ends strictly before `Y` starts.
    Before = 0,
    /// The inverse of [`Relation::Before`]: `X` starts strictly after `Y` ends.
    After = 1,
    /// `X` starts after, and ends before, `Y` (strictly inside).
    During = 2,
    /// The inverse of [`Relation::During`]: `X` strictly contains `Y`.
    Contains = 3,
    /// `X` starts before `Y`, and the two overlap without either containing the other.
    Overlaps = 4,
    /// The inverse of [`Relation::Overlaps`].
    OverlappedBy = 5,
    /// `X` ends exactly where `Y` starts.
    Meets = 6,
    /// The inverse of [`Relation::Meets`]: `X` starts exactly where `Y` ends.
    MetBy = 7,
    /// `X` and `Y` start together; `X` ends first.
    Starts = 8,
    /// The inverse of [`Relation::Starts`]: `X` and `Y` start together; `Y` ends first.
    StartedBy = 9,
    /// `X` and `Y` end together; `X` starts later.
    Finishes = 10,
    /// The inverse of [`Relation::Finishes`]: `X` and `Y` end together; `Y` starts later.
    FinishedBy = 11,
    /// `X` and `Y` share both endpoints.
    Equals = 12,
}

impl Relation {
    /// All thirteen relations, in canonical bit order.
    pub const ALL: [Relation; 13] = [
        Relation::Before,
        Relation::After,
        Relation::During,
        Relation::Contains,
        Relation::Overlaps,
        Relation::OverlappedBy,
        Relation::Meets,
        Relation::MetBy,
        Relation::Starts,
        Relation::StartedBy,
        Relation::Finishes,
        Relation::FinishedBy,
        Relation::Equals,
    ];

    /// The bit position of this relation (0..=12).
    pub const fn bit_index(self) -> u32 {
        self as u32
    }

    /// The singleton bitmask for this relation.
    pub const fn mask(self) -> u16 {
        1 << self.bit_index()
    }

    /// The human-readable name used by `toNames`, e.g. `"overlapped by"`.
    pub const fn name(self) -> &'static str {
        match self {
            Relation::Before => "before",
            Relation::After => "after",
            Relation::During => "during",
            Relation::Contains => "contains",
            Relation::Overlaps => "overlaps",
            Relation::OverlappedBy => "overlapped by",
            Relation::Meets => "meets",
            Relation::MetBy => "met by",
            Relation::Starts => "starts",
            Relation::StartedBy => "started by",
            Relation::Finishes => "finishes",
            Relation::FinishedBy => "finished by",
            Relation::Equals => "equals",
        }
    }

    /// The relation obtained by swapping the two intervals.
    pub const fn inverse(self) -> Relation {
        match self {
            Relation::Before => Relation::After,
            Relation::After => Relation::Before,
            Relation::During => Relation::Contains,
            Relation::Contains => Relation::During,
            Relation::Overlaps => Relation::OverlappedBy,
            Relation::OverlappedBy => Relation::Overlaps,
            Relation::Meets => Relation::MetBy,
            Relation::MetBy => Relation::Meets,
            Relation::Starts => Relation::StartedBy,
            Relation::StartedBy => Relation::Starts,
            Relation::Finishes => Relation::FinishedBy,
            Relation::FinishedBy => Relation::Finishes,
            Relation::Equals => Relation::Equals,
        }
    }

    pub(crate) const fn from_index(index: usize) -> Relation {
        Relation::ALL[index]
    }

    /// The relation's definitional signature: the pairwise orderings of
    /// (startX, endX) against (startY, endY) that hold for an `X this Y`
    /// pair. Audited once against the standard definitions; every other
    /// property of the relation (its inverse, its place in the composition
    /// table) follows from this.
    pub(crate) const fn endpoint_signature(self) -> (PointRel, PointRel, PointRel, PointRel) {
        use PointRel::{Eq, Gt, Lt};
        match self {
            // startX < endX < startY < endY
            Relation::Before => (Lt, Lt, Lt, Lt),
            // startY < endY < startX < endX
            Relation::After => (Gt, Gt, Gt, Gt),
            // startX < endX = startY < endY
            Relation::Meets => (Lt, Lt, Eq, Lt),
            // startY < endY = startX < endX
            Relation::MetBy => (Gt, Eq, Gt, Gt),
            // startX < startY < endX < endY
            Relation::Overlaps => (Lt, Lt, Gt, Lt),
            // startY < startX < endY < endX
            Relation::OverlappedBy => (Gt, Lt, Gt, Gt),
            // startX = startY < endX < endY
            Relation::Starts => (Eq, Lt, Gt, Lt),
            // startX = startY < endY < endX
            Relation::StartedBy => (Eq, Lt, Gt, Gt),
            // startY < startX < endX = endY
            Relation::Finishes => (Gt, Lt, Gt, Eq),
            // startX < startY < endX = endY
            Relation::FinishedBy => (Lt, Lt, Gt, Eq),
            // startY < startX < endX < endY
            Relation::During => (Gt, Lt, Gt, Lt),
            // startX < startY < endY < endX
            Relation::Contains => (Lt, Lt, Gt, Gt),
            // startX = startY < endX = endY
            Relation::Equals => (Eq, Lt, Gt, Eq),
        }
    }
}
