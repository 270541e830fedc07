//! The end-to-end build: load inputs, run the engine, write the site.

use tracing::info;

use crate::Error;
use crate::domain::Dataset;
use crate::engine::{EngineConfig, build_dataset};
use crate::input::InputSet;
use crate::render::{RenderedSite, SiteConfig, render_site, write_site};

/// Result of a successful build.
#[derive(Debug, Clone)]
pub struct BuildOutput {
    pub dataset: Dataset,
    pub site: RenderedSite,
}

/// Load and transform the inputs without writing anything.
pub fn render(site: &SiteConfig, engine: &EngineConfig) -> Result<BuildOutput, Error> {
    info!(input = %site.input_dir.display(), "Loading inputs");
    let inputs = InputSet::load(&site.input_dir)?;
    let dataset = build_dataset(&inputs, engine)?;
    let rendered = render_site(&dataset)?;
    Ok(BuildOutput {
        dataset,
        site: rendered,
    })
}

/// Build the site. Nothing is written unless every step succeeds.
pub fn build(site: &SiteConfig, engine: &EngineConfig) -> Result<BuildOutput, Error> {
    let output = render(site, engine)?;
    write_site(&output.site, &site.docs_dir)?;
    Ok(output)
}
