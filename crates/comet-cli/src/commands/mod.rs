//! CLI command implementations for comet.
//!
//! Each module corresponds to a subcommand (`comet <command>`).

pub mod add;
pub mod new;
pub mod run;

use anyhow::Result;

use comet_core::config::CometConfig;
use comet_core::templates::embedded::TemplateSet;
use comet_core::templates::extract;
use comet_core::templates::renderer::TemplateRenderer;

/// Refresh the templates directory from the bundled copies and build a renderer from it.
pub fn load_renderer(config: &CometConfig) -> Result<TemplateRenderer> {
    let written = extract::extract_templates(&config.templates_dir, &TemplateSet::bundled())?;
    tracing::debug!("{} template(s) extracted", written.len());

    let templates = TemplateSet::load(&config.templates_dir)?;
    Ok(TemplateRenderer::new(&templates)?)
}
