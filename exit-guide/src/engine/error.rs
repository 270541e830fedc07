//! Engine error types.

/// Fatal dataset errors found while building the model.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BuildError {
    /// A required numeric field is blank or not a finite number
    #[error("invalid {field} in {file}: {value:?}")]
    InvalidNumber {
        file: &'static str,
        field: &'static str,
        value: String,
    },

    /// Egress rows name stations that are not in Stations.csv
    #[error("egresses reference unknown stations: {}", .0.join(", "))]
    UnknownStations(Vec<String>),
}
