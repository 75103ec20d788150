use std::path::Path;

use anyhow::Result;

use comet_core::config::CometConfig;
use comet_core::project;
use comet_core::toolchain::ProcessRunner;

use crate::output;

/// Create a new comet project.
///
/// Extracts the templates, lays out the project directory, renders the
/// entrypoint and sample components, runs `go mod init`, and tries to install
/// the runtime library. A failed install only produces a warning.
pub async fn run(config_path: &Path, project_name: &str, module: &str) -> Result<()> {
    output::print_header(&format!("comet new: {project_name}"));

    let config = CometConfig::load_or_default(config_path)?;

    output::print_step(1, 2, "Preparing templates");
    let renderer = super::load_renderer(&config)?;

    output::print_step(2, 2, &format!("Creating project directory: {project_name}/"));
    let runner = ProcessRunner::new();
    let spinner = output::spinner("Generating sources and installing dependencies...");
    let result = project::create_project(
        Path::new("."),
        project_name,
        module,
        &renderer,
        &runner,
        &config,
    )
    .await;
    spinner.finish_and_clear();
    let report = result?;

    for file in &report.files {
        output::print_key_value("Created", &file.display().to_string());
    }

    if let Some(library) = &config.runtime_library {
        match &report.fetch_error {
            None => output::print_success(&format!("Installed {library}")),
            Some(reason) => output::print_warning(&format!(
                "Could not install {library} ({reason}); \
                 run `go get -u {library}` inside {project_name}/"
            )),
        }
    }

    output::print_success(&format!("Project '{project_name}' created"));
    println!();
    println!("  Next steps:");
    println!("    cd {project_name}");
    println!("    comet add controller Bar modules/foo/controllers");
    println!("    comet run");
    println!();

    Ok(())
}
