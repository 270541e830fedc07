//! The door-to-egress mapping engine.
//!
//! A single deterministic pass over fully loaded input rows:
//!
//! 1. index the doors (car grouping, per-car and platform-wide numbering),
//! 2. match each egress point to its nearest door(s),
//! 3. place each egress in the direction buckets it serves,
//! 4. assemble and sort the station list.
//!
//! Nothing here does I/O.

mod aggregate;
mod assign;
mod config;
mod doors;
mod error;
mod matcher;

pub use aggregate::{build_dataset, is_true, station_from_row};
pub use assign::{EgressAssigner, ExitIndex, ResolvedEgress, applicable_directions, compose_label};
pub use config::{DEFAULT_SIDE_PLATFORM_TYPES, DEFAULT_TIE_THRESHOLD, EngineConfig};
pub use doors::{CarNumbering, DoorLayout, index_doors};
pub use error::BuildError;
pub use matcher::{DoorMatch, nearest_doors};

/// Round to 3 decimal places, the precision of every coordinate we emit.
pub(crate) fn round3(value: f64) -> f64 {
    // Beyond 1e15 an f64 has no fractional digits left to round, and
    // scaling could overflow.
    if value.abs() >= 1e15 {
        return value;
    }
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding() {
        assert_eq!(round3(14.9 - 10.0), 4.9);
        assert_eq!(round3(1.0004), 1.0);
        assert_eq!(round3(-2.5), -2.5);
    }

    #[test]
    fn rounding_keeps_huge_values_finite() {
        assert_eq!(round3(1e306), 1e306);
        assert_eq!(round3(-f64::MAX), -f64::MAX);
        assert_eq!(round3(1e15 + 2.0), 1e15 + 2.0);
    }
}
