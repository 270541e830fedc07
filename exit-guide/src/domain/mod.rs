//! Domain types for the exit guide.
//!
//! These are the records the mapping engine produces and the renderer
//! serialises. Field names double as the JSON contract read by the
//! client script, so renaming a field is a breaking change.

mod dataset;
mod door;
mod egress;
mod line;
mod station;

pub use dataset::Dataset;
pub use door::{CarKey, Door, DoorRef, DoorStats};
pub use egress::{Egress, EgressType};
pub use line::{LineCode, LineInfo};
pub use station::{Direction, DirectionLabel, EgressByDir, EgressByType, Station};
