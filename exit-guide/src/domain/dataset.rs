//! The complete generated dataset.

use std::collections::BTreeMap;

use serde::Serialize;

use super::door::DoorStats;
use super::line::{LineCode, LineInfo};
use super::station::Station;

/// Everything the client needs: door summary, line table and stations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub meta: DoorStats,
    pub lines: BTreeMap<LineCode, LineInfo>,
    /// Sorted by name.
    pub stations: Vec<Station>,
}

impl Dataset {
    /// The full static line table.
    pub fn line_table() -> BTreeMap<LineCode, LineInfo> {
        LineCode::ALL.iter().map(|code| (*code, code.info())).collect()
    }

    /// Look up a station by exact name.
    pub fn station(&self, name: &str) -> Option<&Station> {
        self.stations
            .binary_search_by(|s| s.name.as_str().cmp(name))
            .ok()
            .map(|i| &self.stations[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_table_is_complete() {
        let table = Dataset::line_table();
        assert_eq!(table.len(), 6);
        assert_eq!(table[&LineCode::GR].name, "Green");
    }

    #[test]
    fn lines_serialize_keyed_by_code() {
        let dataset = Dataset {
            meta: DoorStats::default(),
            lines: Dataset::line_table(),
            stations: vec![],
        };
        let value = serde_json::to_value(&dataset).unwrap();
        assert_eq!(value["lines"]["BL"]["color"], "#0078bf");
        assert_eq!(value["meta"]["door_count"], 0);
    }
}
