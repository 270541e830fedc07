//! Askama templates for the generated site.

use askama::Template;

/// Page title, also used as the web app name.
pub const PAGE_TITLE: &str = "Metro Exit Guide";

/// Browser chrome and icon colour.
pub const THEME_COLOR: &str = "#0f4c4b";

/// The single page. Embeds the dataset as JSON.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub title: &'a str,
    pub theme_color: &'a str,
    pub cache_version: &'a str,
    /// One-line dataset summary for the About card.
    pub meta_summary: String,
    /// Canonical JSON; must already be safe inside a script element.
    pub data_json: &'a str,
}

/// Cache-first service worker. A new cache version evicts old caches.
#[derive(Template)]
#[template(path = "sw.js", escape = "none")]
pub struct ServiceWorkerTemplate<'a> {
    pub cache_version: &'a str,
    pub assets: &'a [&'a str],
}

/// Square app icon.
#[derive(Template)]
#[template(path = "icon.svg", escape = "none")]
pub struct IconTemplate<'a> {
    pub size: u32,
    pub background: &'a str,
}
