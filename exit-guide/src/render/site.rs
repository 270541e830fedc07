//! Rendering the dataset into static files.

use std::path::{Path, PathBuf};

use askama::Template;
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use super::error::SiteError;
use super::json::to_canonical_json;
use super::templates::{
    IconTemplate, IndexTemplate, PAGE_TITLE, ServiceWorkerTemplate, THEME_COLOR,
};
use crate::domain::Dataset;

/// Client script, copied to the output as is.
pub const APP_JS: &str = include_str!("../../assets/app.js");

/// Page template source. Part of the cache version so template edits
/// invalidate installed copies.
const INDEX_TEMPLATE_SOURCE: &str = include_str!("../../templates/index.html");

/// Cache version length in hex characters.
const CACHE_VERSION_LEN: usize = 10;

const ICON_SIZES: [u32; 2] = [192, 512];

/// Files the service worker precaches, relative to the site root.
const PRECACHE: [&str; 7] = [
    "./",
    "./index.html",
    "./app.js",
    "./manifest.webmanifest",
    "./sw.js",
    "./icons/icon-192.svg",
    "./icons/icon-512.svg",
];

/// Where inputs are read from and the site is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Directory holding meta.csv and the four data files.
    pub input_dir: PathBuf,
    /// Output directory for the generated site.
    pub docs_dir: PathBuf,
}

impl SiteConfig {
    /// Read from `input_dir` and write to `input_dir/docs`.
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        let input_dir = input_dir.into();
        let docs_dir = input_dir.join("docs");
        Self {
            input_dir,
            docs_dir,
        }
    }

    /// Set a custom output directory.
    pub fn with_docs_dir(mut self, docs_dir: impl Into<PathBuf>) -> Self {
        self.docs_dir = docs_dir.into();
        self
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

/// One generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteFile {
    /// Path relative to the docs directory.
    pub path: PathBuf,
    pub contents: String,
}

/// The complete generated site, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSite {
    pub cache_version: String,
    pub data_json: String,
    pub files: Vec<SiteFile>,
}

impl RenderedSite {
    pub fn file(&self, path: impl AsRef<Path>) -> Option<&SiteFile> {
        self.files.iter().find(|f| f.path == path.as_ref())
    }
}

#[derive(Serialize)]
struct Manifest<'a> {
    name: &'a str,
    short_name: &'a str,
    start_url: &'a str,
    display: &'a str,
    background_color: &'a str,
    theme_color: &'a str,
    icons: Vec<ManifestIcon>,
}

#[derive(Serialize)]
struct ManifestIcon {
    src: String,
    sizes: String,
    #[serde(rename = "type")]
    mime: &'static str,
}

/// Short content hash of the data and the client sources.
pub fn cache_version(data_json: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data_json.as_bytes());
    hasher.update(INDEX_TEMPLATE_SOURCE.as_bytes());
    hasher.update(APP_JS.as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    digest[..CACHE_VERSION_LEN].to_string()
}

fn manifest_json() -> Result<String, SiteError> {
    let manifest = Manifest {
        name: PAGE_TITLE,
        short_name: "Exit Guide",
        start_url: ".",
        display: "standalone",
        background_color: "#f4f1e6",
        theme_color: THEME_COLOR,
        icons: ICON_SIZES
            .iter()
            .map(|size| ManifestIcon {
                src: format!("./icons/icon-{size}.svg"),
                sizes: format!("{size}x{size}"),
                mime: "image/svg+xml",
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&manifest)? + "\n")
}

fn meta_summary(dataset: &Dataset) -> String {
    let meta = &dataset.meta;
    format!(
        "{} stations, {} doors across {} cars",
        dataset.stations.len(),
        meta.door_count,
        meta.car_count
    )
}

/// Render every file of the site. Pure: identical datasets give identical output.
pub fn render_site(dataset: &Dataset) -> Result<RenderedSite, SiteError> {
    let data_json = to_canonical_json(dataset)?;
    let cache_version = cache_version(&data_json);

    let index = IndexTemplate {
        title: PAGE_TITLE,
        theme_color: THEME_COLOR,
        cache_version: &cache_version,
        meta_summary: meta_summary(dataset),
        data_json: &data_json,
    }
    .render()?;

    let service_worker = ServiceWorkerTemplate {
        cache_version: &cache_version,
        assets: &PRECACHE,
    }
    .render()?;

    let mut files = vec![
        SiteFile {
            path: PathBuf::from("index.html"),
            contents: index,
        },
        SiteFile {
            path: PathBuf::from("app.js"),
            contents: APP_JS.to_string(),
        },
        SiteFile {
            path: PathBuf::from("sw.js"),
            contents: service_worker,
        },
        SiteFile {
            path: PathBuf::from("manifest.webmanifest"),
            contents: manifest_json()?,
        },
    ];
    for size in ICON_SIZES {
        let svg = IconTemplate {
            size,
            background: THEME_COLOR,
        }
        .render()?;
        files.push(SiteFile {
            path: Path::new("icons").join(format!("icon-{size}.svg")),
            contents: svg,
        });
    }

    debug!(%cache_version, bytes = data_json.len(), "Rendered site");

    Ok(RenderedSite {
        cache_version,
        data_json,
        files,
    })
}

/// Write a rendered site under `docs_dir`, creating directories as needed.
pub fn write_site(site: &RenderedSite, docs_dir: &Path) -> Result<(), SiteError> {
    for file in &site.files {
        let path = docs_dir.join(&file.path);
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|source| SiteError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(&path, &file.contents).map_err(|source| SiteError::Write {
            path: path.clone(),
            source,
        })?;
    }

    info!(
        dir = %docs_dir.display(),
        files = site.files.len(),
        cache_version = %site.cache_version,
        "Wrote site"
    );
    Ok(())
}
