use std::path::Path;

use anyhow::Result;

use comet_core::component::{self, ComponentKind};
use comet_core::config::CometConfig;

use crate::output;

/// Add one component to an existing project.
///
/// The kind is checked before anything touches the disk, so an invalid kind
/// leaves no files behind.
pub fn run(config_path: &Path, kind: &str, name: &str, location: Option<&Path>) -> Result<()> {
    let kind: ComponentKind = kind.parse()?;

    let config = CometConfig::load_or_default(config_path)?;
    let renderer = super::load_renderer(&config)?;

    let report = component::add_component(&renderer, kind, name, location)?;

    output::print_key_value("package", &report.package);
    output::print_key_value("file", &report.file_name);
    output::print_success(&format!("Created {kind} {name} at {}", report.path.display()));

    Ok(())
}
