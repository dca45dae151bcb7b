#![deny(missing_docs)]
//! Qualitative temporal reasoning over Allen's interval algebra.
//!
//! This is the thin public-facing facade over [`allen_tc_core`]: it
//! re-exports the reasoning core's types as-is and adds the
//! `anyhow`-flavored convenience entry points a downstream application
//! would actually call — steps that aggregate more than one of the core's
//! own fallible operations.
//!
//! For the constraint network itself, its invariants, and the path
//! consistency algorithm, see [`ConstraintNetwork`].

pub use allen_tc_core::{
    constraint, Constraint, ConstraintMatrix, ConstraintNetwork, Relation, RelSet, RelSetError,
};

use anyhow::{Context, Result};
use std::hash::Hash;

/// Parses a raw relation-set bit pattern and asserts it as a constraint from
/// `source` to `destination` in one call.
///
/// Aggregates two fallible steps the core keeps separate: validating the raw
/// bits (`RelSet::from_bits`, which can fail) and asserting the constraint
/// (`ConstraintNetwork::add_constraint`, which reports rejection as `false`
/// rather than an error, since neither endpoint unregistered nor "pair
/// already constrained" are malformed input). Returns `Ok(false)` for the
/// latter case so a caller can tell "bad bits" (an `Err`) apart from
/// "well-formed but rejected by the network" (`Ok(false)`).
pub fn assert_constraint_from_bits<K: Eq + Hash + Clone>(
    network: &mut ConstraintNetwork<K>,
    source: K,
    destination: K,
    bits: u16,
) -> Result<bool> {
    let relations =
        RelSet::from_bits(bits).with_context(|| format!("invalid relation set bits {bits:#x}"))?;
    Ok(network.add_constraint(source, destination, relations))
}

/// Installs a `tracing` subscriber that prints to stderr, honoring
/// `RUST_LOG` (defaulting to `info`). Intended for application entry
/// points; libraries embedding this crate should install their own
/// subscriber instead.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let env = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| "info".to_owned());
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(env))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assert_constraint_from_bits_rejects_stray_high_bits() {
        let mut net = ConstraintNetwork::new();
        net.add_node("a");
        net.add_node("b");
        assert!(assert_constraint_from_bits(&mut net, "a", "b", 1 << 13).is_err());
    }

    #[test]
    fn assert_constraint_from_bits_accepts_valid_bits() {
        let mut net = ConstraintNetwork::new();
        net.add_node("a");
        net.add_node("b");
        let bits = Relation::Before.mask();
        assert_eq!(
            assert_constraint_from_bits(&mut net, "a", "b", bits).unwrap(),
            true
        );
        assert_eq!(
            net.query(&"a", &"b"),
            Some(RelSet::singleton(Relation::Before))
        );
    }

    #[test]
    fn assert_constraint_from_bits_reports_rejection_as_ok_false() {
        let mut net = ConstraintNetwork::new();
        net.add_node("a");
        let bits = Relation::Before.mask();
        assert_eq!(
            assert_constraint_from_bits(&mut net, "a", "ghost", bits).unwrap(),
            false
        );
    }
}
