use std::path::Path;

use anyhow::{Context, Result};

use comet_core::config::CometConfig;
use comet_core::toolchain::{GoToolchain, ProcessRunner};

/// Run the project in the current directory with `go run .`.
///
/// On failure the combined output of the toolchain is part of the error.
pub async fn run(config_path: &Path) -> Result<()> {
    let config = CometConfig::load_or_default(config_path)?;
    let runner = ProcessRunner::new();
    let go = GoToolchain::new(&runner, &config.toolchain);

    let output = go
        .run_project(Path::new("."))
        .await
        .context("error running project")?;
    print!("{}", output.combined);

    Ok(())
}
