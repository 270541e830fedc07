//! Raw input rows.
//!
//! Every field is kept as text. Turning text into numbers is the
//! engine's job, since that is where a malformed value becomes a
//! build failure with a useful message.

use serde::Deserialize;

use crate::domain::LineCode;

/// A row of Doors.csv.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DoorRow {
    #[serde(rename = "Car", default)]
    pub car: String,
    #[serde(default)]
    pub x: String,
}

impl DoorRow {
    pub fn new(car: &str, x: &str) -> Self {
        Self {
            car: car.to_string(),
            x: x.to_string(),
        }
    }
}

/// A row of Stations.csv.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StationRow {
    #[serde(rename = "nameStd", default)]
    pub name: String,
    #[serde(rename = "nameAlt", default)]
    pub alt_name: String,
    // The column name is misspelt in the source data.
    #[serde(rename = "subtitile", default)]
    pub subtitle: String,
    #[serde(rename = "hasRD", default)]
    pub has_rd: String,
    #[serde(rename = "hasGR", default)]
    pub has_gr: String,
    #[serde(rename = "hasYL", default)]
    pub has_yl: String,
    #[serde(rename = "hasBL", default)]
    pub has_bl: String,
    #[serde(rename = "hasOR", default)]
    pub has_or: String,
    #[serde(rename = "hasSV", default)]
    pub has_sv: String,
    #[serde(rename = "platformType", default)]
    pub platform_type: String,
    #[serde(rename = "WBDir", default)]
    pub wb_dir: String,
    #[serde(rename = "EBDir", default)]
    pub eb_dir: String,
}

impl StationRow {
    /// The raw membership flag for a line.
    pub fn line_flag(&self, line: LineCode) -> &str {
        match line {
            LineCode::RD => &self.has_rd,
            LineCode::GR => &self.has_gr,
            LineCode::YL => &self.has_yl,
            LineCode::BL => &self.has_bl,
            LineCode::OR => &self.has_or,
            LineCode::SV => &self.has_sv,
        }
    }

    pub fn set_line_flag(&mut self, line: LineCode, value: &str) {
        let slot = match line {
            LineCode::RD => &mut self.has_rd,
            LineCode::GR => &mut self.has_gr,
            LineCode::YL => &mut self.has_yl,
            LineCode::BL => &mut self.has_bl,
            LineCode::OR => &mut self.has_or,
            LineCode::SV => &mut self.has_sv,
        };
        *slot = value.to_string();
    }
}

/// A row of Exits.csv.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExitRow {
    #[serde(rename = "nameStd", default)]
    pub station: String,
    #[serde(rename = "exitLabel", default)]
    pub exit_label: String,
    #[serde(default)]
    pub description: String,
}

/// A row of Egresses.csv.
///
/// Only the columns the engine reads are kept. `dir`, `zDir`, `pref`,
/// `x2` and `group` are required to be present but are not used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EgressRow {
    #[serde(rename = "nameStd", default)]
    pub station: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub y: String,
    #[serde(default)]
    pub x: String,
    #[serde(rename = "exitLabel", default)]
    pub exit_label: String,
}

/// A row of meta.csv.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetaRow {
    #[serde(rename = "File", default)]
    pub file: String,
    #[serde(rename = "Variable", default)]
    pub variable: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_flags_round_trip_by_code() {
        let mut row = StationRow::default();
        row.set_line_flag(LineCode::BL, "TRUE");
        assert_eq!(row.line_flag(LineCode::BL), "TRUE");
        assert_eq!(row.has_bl, "TRUE");
        assert_eq!(row.line_flag(LineCode::RD), "");
    }

    #[test]
    fn deserialize_ignores_extra_columns() {
        let data = "nameStd,icon,y,x,dir,zDir,pref,x2,exitLabel,group\nFoo,esc,1,12.5,,,,,A,\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let rows: Vec<EgressRow> = reader.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].station, "Foo");
        assert_eq!(rows[0].icon, "esc");
        assert_eq!(rows[0].y, "1");
        assert_eq!(rows[0].x, "12.5");
        assert_eq!(rows[0].exit_label, "A");
    }
}
