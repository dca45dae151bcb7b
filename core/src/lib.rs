#![deny(missing_docs)]
//! The reasoning core for qualitative temporal reasoning over Allen's
//! interval algebra: the relation-set representation, the inverse and
//! composition operators, and the path-consistency propagation engine.
//!
//! This crate knows nothing about CLIs, persistence, visualisation or
//! calendar systems — see the `allen-tc` facade crate for that surface. An
//! interval identifier is opaque here; the only contracts this crate
//! consumes are equality and hashing (see [`ConstraintNetwork`]).
//!
//! Path consistency is a sound but incomplete reasoning procedure over
//! Allen's algebra: a `true` verdict means no inconsistency was *found*, not
//! that the network is satisfiable in full. This crate does not attempt to
//! upgrade that to a complete decision procedure.

mod composition;
mod engine;
mod error;
mod matrix;
mod point;
mod registry;
mod relation;
mod relset;

pub mod network;

pub use error::RelSetError;
pub use matrix::ConstraintMatrix;
pub use network::{constraint, Constraint, ConstraintNetwork};
pub use relation::Relation;
pub use relset::RelSet;
