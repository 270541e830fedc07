//! Post-build checks on a generated site.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use super::error::SiteError;
use super::site::SiteConfig;
use crate::Error;
use crate::input::{InputFile, StationRow, read_rows, verify_inputs};

const DATA_OPEN: &str = r#"<script id="app-data" type="application/json">"#;
const DATA_CLOSE: &str = "</script>";

/// How many station names from Stations.csv are spot-checked.
const SAMPLE_SIZE: usize = 3;

#[derive(Deserialize)]
struct EmbeddedData {
    #[serde(default)]
    stations: Vec<EmbeddedStation>,
}

#[derive(Deserialize)]
struct EmbeddedStation {
    name: String,
}

/// What a successful validation looked at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Number of stations in the embedded dataset.
    pub stations: usize,
    /// Station names confirmed present.
    pub checked: Vec<String>,
}

/// Extract the embedded JSON text from a built index.html.
pub fn embedded_json(html: &str) -> Option<&str> {
    let start = html.find(DATA_OPEN)? + DATA_OPEN.len();
    let len = html[start..].find(DATA_CLOSE)?;
    Some(&html[start..start + len])
}

fn read_output(path: &Path) -> Result<String, SiteError> {
    if !path.exists() {
        return Err(SiteError::MissingOutput {
            path: path.to_path_buf(),
        });
    }
    std::fs::read_to_string(path).map_err(|source| SiteError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Check that the inputs are intact and that the built site matches them.
pub fn validate_site(config: &SiteConfig) -> Result<ValidationReport, Error> {
    verify_inputs(&config.input_dir)?;

    let index_path = config.docs_dir.join("index.html");
    let html = read_output(&index_path)?;

    let app_path = config.docs_dir.join("app.js");
    if read_output(&app_path)?.trim().is_empty() {
        return Err(SiteError::EmptyOutput { path: app_path }.into());
    }

    let json = embedded_json(&html).ok_or(SiteError::MissingEmbeddedData)?;
    let data: EmbeddedData = serde_json::from_str(json).map_err(SiteError::from)?;
    if data.stations.is_empty() {
        return Err(SiteError::NoStations.into());
    }
    let embedded: HashSet<&str> = data.stations.iter().map(|s| s.name.as_str()).collect();

    let rows: Vec<StationRow> = read_rows(&config.input_dir, InputFile::Stations)?;
    let sample: Vec<String> = rows
        .iter()
        .map(|row| row.name.trim())
        .filter(|name| !name.is_empty())
        .take(SAMPLE_SIZE)
        .map(str::to_string)
        .collect();
    if sample.is_empty() {
        return Err(SiteError::NoStationNames.into());
    }

    if let Some(missing) = sample.iter().find(|name| !embedded.contains(name.as_str())) {
        return Err(SiteError::StationNotEmbedded(missing.clone()).into());
    }

    info!(stations = data.stations.len(), checked = sample.len(), "Validation passed");

    Ok(ValidationReport {
        stations: data.stations.len(),
        checked: sample,
    })
}
