//! The one typed, fallible boundary in the core: constructing a [`crate::RelSet`]
//! from a raw, externally-supplied bit pattern.

use thiserror::Error;

/// Error returned when a raw bit pattern cannot be interpreted as a
/// [`crate::RelSet`].
///
/// Every other `RelSet`-producing operation (union, intersection, inverse,
/// compose, the named singleton constants) is closed over the 13-bit domain
/// by construction and cannot fail; this is the only place stray bits from
/// outside the core can enter.
#[derive(Error, Clone, Copy, Debug, Eq, PartialEq)]
pub enum RelSetError {
    /// The input had one or more bits set above position 12.
    #[error("relation set has bits set above position 12: {0:#x}")]
    StrayHighBits(u16),
}
