//! Reading the input directory.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::error::InputError;
use super::files::InputFile;
use super::meta::{MetaIndex, check_columns};
use super::rows::{DoorRow, EgressRow, ExitRow, MetaRow, StationRow};

/// All rows of the four data files, loaded and column-checked.
#[derive(Debug, Clone, Default)]
pub struct InputSet {
    pub doors: Vec<DoorRow>,
    pub stations: Vec<StationRow>,
    pub exits: Vec<ExitRow>,
    pub egresses: Vec<EgressRow>,
}

impl InputSet {
    /// Load every input from `dir`.
    ///
    /// Fails if any file is missing, a required column is absent from a
    /// header or undocumented in meta.csv, or a file that needs data rows
    /// has none.
    pub fn load(dir: &Path) -> Result<Self, InputError> {
        verify_inputs(dir)?;

        let doors = read_rows(dir, InputFile::Doors)?;
        let stations = read_rows(dir, InputFile::Stations)?;
        let exits = read_rows(dir, InputFile::Exits)?;
        let egresses = read_rows(dir, InputFile::Egresses)?;

        info!(
            doors = doors.len(),
            stations = stations.len(),
            exits = exits.len(),
            egresses = egresses.len(),
            "Loaded input rows"
        );

        Ok(Self {
            doors,
            stations,
            exits,
            egresses,
        })
    }
}

/// Check that every input exists and that each data file has, and meta.csv
/// documents, its required columns. Rows are not read.
pub fn verify_inputs(dir: &Path) -> Result<(), InputError> {
    ensure_inputs_exist(dir)?;

    let meta_rows = read_csv::<MetaRow>(&InputFile::Meta.path_in(dir))?;
    let meta = MetaIndex::from_rows(&meta_rows);

    for file in [
        InputFile::Doors,
        InputFile::Stations,
        InputFile::Exits,
        InputFile::Egresses,
    ] {
        let headers = read_headers(&file.path_in(dir))?;
        check_columns(&meta, file, &headers)?;
    }
    Ok(())
}

/// Fail on the first input file that does not exist.
pub fn ensure_inputs_exist(dir: &Path) -> Result<(), InputError> {
    for file in InputFile::ALL {
        let path = file.path_in(dir);
        if !path.exists() {
            return Err(InputError::MissingFile { path });
        }
    }
    Ok(())
}

/// Read the header row of a CSV file.
pub fn read_headers(path: &Path) -> Result<Vec<String>, InputError> {
    let mut reader = open(path)?;
    let headers = reader.headers().map_err(|source| csv_error(path, source))?;
    Ok(headers.iter().map(str::to_string).collect())
}

/// Read every row of one input file.
///
/// Fails with [`InputError::NoRows`] if the file must have data and has none.
pub fn read_rows<T: DeserializeOwned>(dir: &Path, file: InputFile) -> Result<Vec<T>, InputError> {
    let rows = read_csv::<T>(&file.path_in(dir))?;
    if rows.is_empty() && file.requires_rows() {
        return Err(InputError::NoRows {
            file: file.file_name(),
        });
    }
    debug!(file = file.file_name(), rows = rows.len(), "Read input file");
    Ok(rows)
}

fn read_csv<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, InputError> {
    open(path)?
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|source| csv_error(path, source))
}

fn open(path: &Path) -> Result<csv::Reader<std::fs::File>, InputError> {
    csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|source| csv_error(path, source))
}

fn csv_error(path: &Path, source: csv::Error) -> InputError {
    InputError::Csv {
        path: PathBuf::from(path),
        source,
    }
}
