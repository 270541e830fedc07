//! Site rendering and validation errors.

use std::path::PathBuf;

/// Errors from writing or checking the generated site.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Writing an output file or directory failed
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading a generated file failed
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A template failed to render
    #[error("template error: {0}")]
    Template(#[from] askama::Error),

    /// Serialising or parsing the dataset failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A generated file is absent
    #[error("{} does not exist; run the build first", path.display())]
    MissingOutput { path: PathBuf },

    /// A generated file is empty
    #[error("{} is empty", path.display())]
    EmptyOutput { path: PathBuf },

    /// index.html has no app-data script block
    #[error("index.html missing embedded app-data JSON")]
    MissingEmbeddedData,

    /// The embedded dataset has no stations
    #[error("embedded data has no stations")]
    NoStations,

    /// Stations.csv has no named station to check against
    #[error("Stations.csv has no station names")]
    NoStationNames,

    /// A station from Stations.csv is not in the embedded dataset
    #[error("station not found in embedded data: {0}")]
    StationNotEmbedded(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SiteError::MissingOutput {
            path: PathBuf::from("docs/index.html"),
        };
        assert_eq!(
            err.to_string(),
            "docs/index.html does not exist; run the build first"
        );

        let err = SiteError::StationNotEmbedded("Central".into());
        assert_eq!(err.to_string(), "station not found in embedded data: Central");

        let err = SiteError::MissingEmbeddedData;
        assert_eq!(err.to_string(), "index.html missing embedded app-data JSON");
    }
}
