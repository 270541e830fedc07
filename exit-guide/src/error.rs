//! Top-level error type.

use crate::engine::BuildError;
use crate::input::InputError;
use crate::render::SiteError;

/// Any failure of a build, validation or preview run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Site(#[from] SiteError),

    /// The preview server failed to bind or serve
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_transparently() {
        let err: Error = BuildError::UnknownStations(vec!["Foo".into()]).into();
        assert_eq!(err.to_string(), "egresses reference unknown stations: Foo");

        let err: Error = InputError::NoRows { file: "Doors.csv" }.into();
        assert_eq!(err.to_string(), "Doors.csv has no data rows");
    }
}
