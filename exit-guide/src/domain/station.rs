//! Stations, travel directions and per-direction egress buckets.

use std::fmt;

use serde::Serialize;

use super::egress::{Egress, EgressType};
use super::line::LineCode;

/// One of the two travel directions modelled at every station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    WB,
    EB,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::WB, Direction::EB];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::WB => "WB",
            Direction::EB => "EB",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A direction with its rider-facing label, e.g. "Toward Airport".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectionLabel {
    pub key: Direction,
    pub label: String,
}

/// Egress lists keyed by egress type.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EgressByType {
    pub escalator: Vec<Egress>,
    pub stairs: Vec<Egress>,
    pub elevator: Vec<Egress>,
    pub other: Vec<Egress>,
}

impl EgressByType {
    pub fn get(&self, egress_type: EgressType) -> &[Egress] {
        match egress_type {
            EgressType::Escalator => &self.escalator,
            EgressType::Stairs => &self.stairs,
            EgressType::Elevator => &self.elevator,
            EgressType::Other => &self.other,
        }
    }

    pub fn get_mut(&mut self, egress_type: EgressType) -> &mut Vec<Egress> {
        match egress_type {
            EgressType::Escalator => &mut self.escalator,
            EgressType::Stairs => &mut self.stairs,
            EgressType::Elevator => &mut self.elevator,
            EgressType::Other => &mut self.other,
        }
    }

    /// Total number of egress entries across all types.
    pub fn len(&self) -> usize {
        EgressType::ALL.iter().map(|t| self.get(*t).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sort every list by `(x, label)`.
    pub fn sort(&mut self) {
        for egress_type in EgressType::ALL {
            self.get_mut(egress_type).sort_by(|a, b| {
                a.x.total_cmp(&b.x).then_with(|| a.label.cmp(&b.label))
            });
        }
    }
}

/// Egress buckets for both directions. Both are always present.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EgressByDir {
    #[serde(rename = "WB")]
    pub wb: EgressByType,
    #[serde(rename = "EB")]
    pub eb: EgressByType,
}

impl EgressByDir {
    pub fn get(&self, direction: Direction) -> &EgressByType {
        match direction {
            Direction::WB => &self.wb,
            Direction::EB => &self.eb,
        }
    }

    pub fn get_mut(&mut self, direction: Direction) -> &mut EgressByType {
        match direction {
            Direction::WB => &mut self.wb,
            Direction::EB => &mut self.eb,
        }
    }

    pub fn sort(&mut self) {
        self.wb.sort();
        self.eb.sort();
    }
}

/// A station record as shipped to the client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    pub name: String,
    pub alt: String,
    pub subtitle: String,
    pub platform_type: String,
    pub lines: Vec<LineCode>,
    pub directions: [DirectionLabel; 2],
    pub egress_by_dir: EgressByDir,
}
