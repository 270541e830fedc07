//! Egress assignment.
//!
//! Resolves each egress row into an [`Egress`] record (type, label,
//! matched doors) and decides which direction buckets it belongs in.

use std::collections::HashMap;

use tracing::debug;

use super::config::EngineConfig;
use super::doors::parse_coordinate;
use super::error::BuildError;
use super::matcher::nearest_doors;
use super::round3;
use crate::domain::{Direction, Door, DoorRef, Egress, EgressByDir, EgressType};
use crate::input::{EgressRow, ExitRow};

const EGRESSES_FILE: &str = "Egresses.csv";

/// Exit descriptions keyed by station name, then exit label.
#[derive(Debug, Clone, Default)]
pub struct ExitIndex {
    descriptions: HashMap<String, HashMap<String, String>>,
}

impl ExitIndex {
    /// Build the index. Rows with a blank station or label are ignored;
    /// a repeated `(station, label)` keeps the last description.
    pub fn from_rows(rows: &[ExitRow]) -> Self {
        let mut descriptions: HashMap<String, HashMap<String, String>> = HashMap::new();
        for row in rows {
            let station = row.station.trim();
            let label = row.exit_label.trim();
            if station.is_empty() || label.is_empty() {
                continue;
            }
            descriptions
                .entry(station.to_string())
                .or_default()
                .insert(label.to_string(), row.description.trim().to_string());
        }
        Self { descriptions }
    }

    pub fn description(&self, station: &str, exit_label: &str) -> Option<&str> {
        self.descriptions
            .get(station)?
            .get(exit_label)
            .map(String::as_str)
            .filter(|d| !d.is_empty())
    }
}

/// Compose a display label from an exit label and its description.
///
/// ```
/// use exit_guide::engine::compose_label;
///
/// assert_eq!(compose_label("A", Some("Main St")), "Exit A: Main St");
/// assert_eq!(compose_label("A", None), "Exit A");
/// assert_eq!(compose_label("", Some("Main St")), "Main St");
/// assert_eq!(compose_label("", None), "");
/// ```
pub fn compose_label(exit_label: &str, description: Option<&str>) -> String {
    match (exit_label.is_empty(), description) {
        (false, Some(desc)) => format!("Exit {exit_label}: {desc}"),
        (false, None) => format!("Exit {exit_label}"),
        (true, Some(desc)) => desc.to_string(),
        (true, None) => String::new(),
    }
}

/// Parse the optional side indicator. Blank or malformed means "none".
fn parse_side(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse() {
        Ok(y) => Some(y),
        Err(_) => {
            debug!(y = raw, "Ignoring malformed egress side indicator");
            None
        }
    }
}

/// Directions an egress serves.
///
/// On a side platform, `y == 1` means eastbound only and `y == 2` means
/// westbound only. Everything else serves both directions.
pub fn applicable_directions(side_platform: bool, y: Option<i64>) -> &'static [Direction] {
    match (side_platform, y) {
        (true, Some(1)) => &[Direction::EB],
        (true, Some(2)) => &[Direction::WB],
        _ => &Direction::ALL,
    }
}

/// An egress record and the directions it is offered in.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEgress {
    pub egress: Egress,
    pub directions: &'static [Direction],
}

impl ResolvedEgress {
    /// Append the record to each applicable direction bucket.
    pub fn place_into(self, buckets: &mut EgressByDir) {
        let egress_type = self.egress.egress_type;
        for &direction in self.directions {
            buckets
                .get_mut(direction)
                .get_mut(egress_type)
                .push(self.egress.clone());
        }
    }
}

/// Turns egress rows into [`ResolvedEgress`] records for one door layout.
pub struct EgressAssigner<'a> {
    doors: &'a [Door],
    exits: &'a ExitIndex,
    config: &'a EngineConfig,
}

impl<'a> EgressAssigner<'a> {
    pub fn new(doors: &'a [Door], exits: &'a ExitIndex, config: &'a EngineConfig) -> Self {
        Self {
            doors,
            exits,
            config,
        }
    }

    /// Resolve one egress row of `station`.
    ///
    /// Returns `Ok(None)` when there is no door to match against. A
    /// malformed `x` is fatal.
    pub fn resolve(
        &self,
        station: &str,
        platform_type: &str,
        row: &EgressRow,
    ) -> Result<Option<ResolvedEgress>, BuildError> {
        let egress_type = EgressType::from_icon(&row.icon);
        let x = parse_coordinate(&row.x, EGRESSES_FILE)?;
        let y = parse_side(&row.y);

        let exit_label = row.exit_label.trim();
        let label = compose_label(exit_label, self.exits.description(station, exit_label));

        let Some(found) = nearest_doors(self.doors, x, self.config.tie_threshold) else {
            return Ok(None);
        };

        let egress = Egress {
            egress_type,
            label,
            x: round3(x),
            delta: Some(found.delta),
            doors: found.doors.into_iter().map(DoorRef::from).collect(),
        };

        let side_platform = self.config.is_side_platform(platform_type);
        Ok(Some(ResolvedEgress {
            egress,
            directions: applicable_directions(side_platform, y),
        }))
    }
}
