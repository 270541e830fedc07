//! The input files and the columns each must provide.

use std::path::{Path, PathBuf};

/// One of the CSV files the build reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputFile {
    Meta,
    Doors,
    Stations,
    Exits,
    Egresses,
}

impl InputFile {
    pub const ALL: [InputFile; 5] = [
        InputFile::Meta,
        InputFile::Doors,
        InputFile::Stations,
        InputFile::Exits,
        InputFile::Egresses,
    ];

    /// File name inside the input directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            InputFile::Meta => "meta.csv",
            InputFile::Doors => "Doors.csv",
            InputFile::Stations => "Stations.csv",
            InputFile::Exits => "Exits.csv",
            InputFile::Egresses => "Egresses.csv",
        }
    }

    /// Label used for this file in meta.csv and in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            InputFile::Meta => "meta",
            InputFile::Doors => "Doors",
            InputFile::Stations => "Stations",
            InputFile::Exits => "Exits",
            InputFile::Egresses => "Egresses",
        }
    }

    /// Columns that must be present in the header and documented in meta.csv.
    pub fn required_columns(&self) -> &'static [&'static str] {
        match self {
            InputFile::Meta => &["File", "Variable"],
            InputFile::Doors => &["Car", "x"],
            InputFile::Stations => &[
                "nameStd",
                "nameAlt",
                "subtitile",
                "hasRD",
                "hasGR",
                "hasYL",
                "hasBL",
                "hasOR",
                "hasSV",
                "platformType",
                "WBDir",
                "EBDir",
            ],
            InputFile::Exits => &["nameStd", "exitLabel", "description"],
            InputFile::Egresses => &[
                "nameStd",
                "icon",
                "y",
                "x",
                "dir",
                "zDir",
                "pref",
                "x2",
                "exitLabel",
                "group",
            ],
        }
    }

    /// Whether the build fails when the file has a header but no rows.
    pub fn requires_rows(&self) -> bool {
        matches!(
            self,
            InputFile::Doors | InputFile::Stations | InputFile::Egresses
        )
    }

    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(self.file_name())
    }
}
