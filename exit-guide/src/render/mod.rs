//! Static site rendering.
//!
//! Turns a [`Dataset`](crate::domain::Dataset) into a small offline-capable
//! web app: one HTML page with the data embedded as JSON, the client
//! script, a service worker, a web manifest and icons.

mod error;
mod json;
mod site;
pub mod templates;
mod validate;

pub use error::SiteError;
pub use json::to_canonical_json;
pub use site::{
    APP_JS, RenderedSite, SiteConfig, SiteFile, cache_version, render_site, write_site,
};
pub use validate::{ValidationReport, embedded_json, validate_site};
