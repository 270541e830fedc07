//! Station aggregation and the full build.

use std::collections::{BTreeSet, HashMap};

use tracing::{info, warn};

use super::assign::{EgressAssigner, ExitIndex};
use super::config::EngineConfig;
use super::doors::index_doors;
use super::error::BuildError;
use crate::domain::{
    Dataset, Direction, DirectionLabel, EgressByDir, LineCode, Station,
};
use crate::input::{InputSet, StationRow};

/// Whether a flag cell is set (`TRUE`, `T`, `YES` or `1`, any case).
pub fn is_true(value: &str) -> bool {
    matches!(
        value.trim().to_uppercase().as_str(),
        "TRUE" | "T" | "YES" | "1"
    )
}

fn direction_label(key: Direction, toward: &str, fallback: &str) -> DirectionLabel {
    let toward = toward.trim();
    let label = if toward.is_empty() {
        fallback.to_string()
    } else {
        format!("Toward {toward}")
    };
    DirectionLabel { key, label }
}

/// Build a station record with empty egress buckets.
///
/// Returns `None` for rows with a blank name.
pub fn station_from_row(row: &StationRow) -> Option<Station> {
    let name = row.name.trim();
    if name.is_empty() {
        return None;
    }

    // LineCode::ALL is already in canonical order.
    let lines = LineCode::ALL
        .into_iter()
        .filter(|line| is_true(row.line_flag(*line)))
        .collect();

    Some(Station {
        name: name.to_string(),
        alt: row.alt_name.trim().to_string(),
        subtitle: row.subtitle.trim().to_string(),
        platform_type: row.platform_type.trim().to_string(),
        lines,
        directions: [
            direction_label(Direction::WB, &row.wb_dir, "Direction A"),
            direction_label(Direction::EB, &row.eb_dir, "Direction B"),
        ],
        egress_by_dir: EgressByDir::default(),
    })
}

/// Run the whole engine over a loaded input set.
///
/// Fails on a malformed door or egress coordinate, or when any egress
/// names a station that is not in the station list. Egress rows with a
/// blank station name, or that match no door, are skipped.
pub fn build_dataset(inputs: &InputSet, config: &EngineConfig) -> Result<Dataset, BuildError> {
    let layout = index_doors(&inputs.doors)?;
    let exits = ExitIndex::from_rows(&inputs.exits);

    let mut stations: Vec<Station> = Vec::with_capacity(inputs.stations.len());
    let mut by_name: HashMap<String, usize> = HashMap::new();
    for station in inputs.stations.iter().filter_map(station_from_row) {
        match by_name.get(&station.name) {
            Some(&slot) => {
                warn!(station = %station.name, "Duplicate station row replaces earlier one");
                stations[slot] = station;
            }
            None => {
                by_name.insert(station.name.clone(), stations.len());
                stations.push(station);
            }
        }
    }

    let assigner = EgressAssigner::new(&layout.doors, &exits, config);
    let mut unknown: BTreeSet<String> = BTreeSet::new();
    let mut assigned = 0usize;
    let mut skipped_blank = 0usize;
    let mut skipped_unmatched = 0usize;

    for row in &inputs.egresses {
        let name = row.station.trim();
        if name.is_empty() {
            skipped_blank += 1;
            continue;
        }
        let Some(&slot) = by_name.get(name) else {
            unknown.insert(name.to_string());
            continue;
        };

        let station = &mut stations[slot];
        match assigner.resolve(&station.name, &station.platform_type, row)? {
            Some(resolved) => {
                resolved.place_into(&mut station.egress_by_dir);
                assigned += 1;
            }
            None => skipped_unmatched += 1,
        }
    }

    if !unknown.is_empty() {
        return Err(BuildError::UnknownStations(unknown.into_iter().collect()));
    }
    if skipped_blank > 0 {
        warn!(skipped_blank, "Skipped egress rows with a blank station name");
    }
    if skipped_unmatched > 0 {
        warn!(skipped_unmatched, "Skipped egress rows with no matching door");
    }

    for station in &mut stations {
        station.egress_by_dir.sort();
    }
    stations.sort_by(|a, b| a.name.cmp(&b.name));

    info!(
        stations = stations.len(),
        egresses = assigned,
        doors = layout.stats.door_count,
        cars = layout.stats.car_count,
        "Built dataset"
    );

    Ok(Dataset {
        meta: layout.stats,
        lines: Dataset::line_table(),
        stations,
    })
}
