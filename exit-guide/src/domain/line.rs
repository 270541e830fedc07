//! Rail lines and their display metadata.

use std::fmt;

use serde::Serialize;

/// A line code, in canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum LineCode {
    RD,
    GR,
    YL,
    BL,
    OR,
    SV,
}

/// Display metadata for one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineInfo {
    pub name: &'static str,
    pub color: &'static str,
}

/// Static line table: code, display name, colour, Stations flag column.
static LINES: [(LineCode, &str, &str, &str); 6] = [
    (LineCode::RD, "Red", "#c60c30", "hasRD"),
    (LineCode::GR, "Green", "#00a651", "hasGR"),
    (LineCode::YL, "Yellow", "#ffd200", "hasYL"),
    (LineCode::BL, "Blue", "#0078bf", "hasBL"),
    (LineCode::OR, "Orange", "#f29330", "hasOR"),
    (LineCode::SV, "Silver", "#a2a4a3", "hasSV"),
];

impl LineCode {
    /// All line codes in canonical order.
    pub const ALL: [LineCode; 6] = [
        LineCode::RD,
        LineCode::GR,
        LineCode::YL,
        LineCode::BL,
        LineCode::OR,
        LineCode::SV,
    ];

    fn entry(&self) -> &'static (LineCode, &'static str, &'static str, &'static str) {
        // LINES is indexed in the same order as the enum discriminants.
        &LINES[*self as usize]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineCode::RD => "RD",
            LineCode::GR => "GR",
            LineCode::YL => "YL",
            LineCode::BL => "BL",
            LineCode::OR => "OR",
            LineCode::SV => "SV",
        }
    }

    pub fn info(&self) -> LineInfo {
        let entry = self.entry();
        LineInfo {
            name: entry.1,
            color: entry.2,
        }
    }

    /// The Stations column holding this line's membership flag.
    pub fn flag_column(&self) -> &'static str {
        self.entry().3
    }
}

impl fmt::Display for LineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
