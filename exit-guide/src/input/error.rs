//! Input loading error types.

use std::path::PathBuf;

/// Errors raised while reading and checking the CSV inputs.
///
/// All of these are fatal: the dataset on disk is incomplete or
/// inconsistent and no output should be produced from it.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// An input file does not exist
    #[error("missing required input file: {}", path.display())]
    MissingFile { path: PathBuf },

    /// The CSV header lacks required columns
    #[error("{file} missing columns: {}", columns.join(", "))]
    MissingColumns {
        file: &'static str,
        columns: Vec<String>,
    },

    /// Required columns are not documented in meta.csv
    #[error("meta.csv missing variables for {file}: {}", columns.join(", "))]
    UndocumentedColumns {
        file: &'static str,
        columns: Vec<String>,
    },

    /// A file that must have data has only a header
    #[error("{file} has no data rows")]
    NoRows { file: &'static str },

    /// The CSV reader failed
    #[error("failed to read {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
