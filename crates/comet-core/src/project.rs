//! Project scaffolding for `comet new`.
//!
//! ## Directory layout
//!
//! ```text
//! <project>/
//! ├── main.go
//! ├── go.mod                        # from `go mod init <module>`
//! ├── infrastructure/
//! ├── middlewares/
//! │   └── foo_middleware.go
//! └── modules/foo/
//!     ├── domain/
//!     ├── services/foo_service.go
//!     └── controllers/foo_controller.go
//! ```
//!
//! Steps run in order and stop at the first error. Nothing already created is
//! removed, and a second `new` into the same directory fails with
//! [`CometError::ProjectExists`].

use std::path::{Path, PathBuf};

use crate::component::{ComponentKind, SOURCE_EXTENSION};
use crate::config::CometConfig;
use crate::descriptor::{
    ControllerDescriptor, MiddlewareDescriptor, ProjectDescriptor, ServiceDescriptor,
};
use crate::error::{CometError, Result};
use crate::naming;
use crate::templates::embedded::TemplateId;
use crate::templates::renderer::TemplateRenderer;
use crate::toolchain::{GoToolchain, ToolRunner};

/// Name of the sample components rendered into every new project.
pub const SAMPLE_NAME: &str = "Foo";

/// Instance identifier of the sample service.
pub const SAMPLE_SERVICE_INSTANCE: &str = "defaultFoo";

const MIDDLEWARES_DIR: &str = "middlewares";
const SAMPLE_MODULE_DIR: &str = "modules/foo";

/// What `create_project` produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub root: PathBuf,
    /// Rendered files, in the order they were written.
    pub files: Vec<PathBuf>,
    /// Whether the runtime library was fetched. `false` when the fetch was
    /// skipped, failed, or timed out.
    pub runtime_fetched: bool,
    /// Why the runtime fetch failed, if it ran and failed.
    pub fetch_error: Option<String>,
}

/// Create the directory tree of a new project.
pub fn create_project_dirs(project_dir: &Path) -> Result<()> {
    if project_dir.exists() {
        return Err(CometError::ProjectExists(project_dir.to_path_buf()));
    }

    create_dir(project_dir, false)?;

    for dir in [
        PathBuf::from(MIDDLEWARES_DIR),
        PathBuf::from("infrastructure"),
        Path::new(SAMPLE_MODULE_DIR).join("domain"),
        Path::new(SAMPLE_MODULE_DIR).join("services"),
        Path::new(SAMPLE_MODULE_DIR).join("controllers"),
    ] {
        create_dir(&project_dir.join(dir), true)?;
    }

    Ok(())
}

fn create_dir(path: &Path, recursive: bool) -> Result<()> {
    let result = if recursive {
        std::fs::create_dir_all(path)
    } else {
        std::fs::create_dir(path)
    };
    result.map_err(|source| CometError::DirectoryCreate {
        path: path.to_path_buf(),
        source,
    })
}

/// Render the entrypoint and the sample middleware, service and controller.
pub fn write_sources(
    project_dir: &Path,
    name: &str,
    module: &str,
    renderer: &TemplateRenderer,
) -> Result<Vec<PathBuf>> {
    let mut files = Vec::with_capacity(4);
    let sample_file =
        |kind: ComponentKind| naming::component_file_name(SAMPLE_NAME, kind, SOURCE_EXTENSION);

    let main = ProjectDescriptor::new(name, module);
    let path = project_dir.join(&main.file_name);
    renderer.render_to_file(TemplateId::Main, &main, &path)?;
    files.push(path);

    let middleware = MiddlewareDescriptor::new(
        &sample_file(ComponentKind::Middleware),
        MIDDLEWARES_DIR,
        SAMPLE_NAME,
    );
    let path = project_dir.join(MIDDLEWARES_DIR).join(&middleware.file_name);
    renderer.render_to_file(TemplateId::Middleware, &middleware, &path)?;
    files.push(path);

    let service = ServiceDescriptor::with_lower_name(
        &sample_file(ComponentKind::Service),
        "services",
        SAMPLE_NAME,
        SAMPLE_SERVICE_INSTANCE,
    );
    let path = project_dir
        .join(SAMPLE_MODULE_DIR)
        .join("services")
        .join(&service.file_name);
    renderer.render_to_file(TemplateId::Service, &service, &path)?;
    files.push(path);

    let controller = ControllerDescriptor::new(
        &sample_file(ComponentKind::Controller),
        "controllers",
        SAMPLE_NAME,
    );
    let path = project_dir
        .join(SAMPLE_MODULE_DIR)
        .join("controllers")
        .join(&controller.file_name);
    renderer.render_to_file(TemplateId::Controller, &controller, &path)?;
    files.push(path);

    Ok(files)
}

/// Scaffold the project `name` under `parent` with Go module path `module`.
///
/// The runtime fetch at the end is best effort: its failure is reported
/// through [`ScaffoldReport::fetch_error`] for the caller to show.
pub async fn create_project(
    parent: &Path,
    name: &str,
    module: &str,
    renderer: &TemplateRenderer,
    runner: &dyn ToolRunner,
    config: &CometConfig,
) -> Result<ScaffoldReport> {
    naming::validate_module_path(module)?;

    let root = parent.join(name);
    create_project_dirs(&root)?;
    let files = write_sources(&root, name, module, renderer)?;

    let go = GoToolchain::new(runner, &config.toolchain);
    go.init_module(&root, module).await?;

    let fetch = match &config.runtime_library {
        Some(library) => Some(
            go.fetch_runtime(&root, library, config.fetch_timeout())
                .await
                .map_err(|e| {
                    tracing::debug!("failed to install {library}: {e}");
                    e.to_string()
                }),
        ),
        None => None,
    };

    Ok(ScaffoldReport {
        root,
        files,
        runtime_fetched: matches!(fetch, Some(Ok(()))),
        fetch_error: fetch.and_then(|result| result.err()),
    })
}
