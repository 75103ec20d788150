//! Component kinds and the `add` operation.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::descriptor::{ControllerDescriptor, MiddlewareDescriptor, ServiceDescriptor};
use crate::error::{CometError, Result};
use crate::naming;
use crate::templates::embedded::TemplateId;
use crate::templates::renderer::TemplateRenderer;

/// Extension of every generated source file.
pub const SOURCE_EXTENSION: &str = "go";

/// The kinds of component that can be generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Controller,
    Service,
    Middleware,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 3] = [Self::Controller, Self::Service, Self::Middleware];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Controller => "controller",
            Self::Service => "service",
            Self::Middleware => "middleware",
        }
    }

    pub fn template(self) -> TemplateId {
        match self {
            Self::Controller => TemplateId::Controller,
            Self::Service => TemplateId::Service,
            Self::Middleware => TemplateId::Middleware,
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = CometError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "controller" => Ok(Self::Controller),
            "service" => Ok(Self::Service),
            "middleware" => Ok(Self::Middleware),
            other => Err(CometError::InvalidComponentKind(other.to_string())),
        }
    }
}

/// What `add_component` wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentReport {
    pub path: PathBuf,
    pub package: String,
    pub file_name: String,
}

/// Render one component of `kind` named `name` into `location`.
///
/// `location` defaults to the current directory. An existing file with the
/// same name is overwritten.
pub fn add_component(
    renderer: &TemplateRenderer,
    kind: ComponentKind,
    name: &str,
    location: Option<&Path>,
) -> Result<ComponentReport> {
    let target_dir = match location {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => std::env::current_dir()?,
    };

    let file_name = naming::component_file_name(name, kind, SOURCE_EXTENSION);
    let package = infer_package(&target_dir)?;
    let path = target_dir.join(&file_name);

    tracing::debug!("adding {kind} {name}: package {package}, file {file_name}");

    match kind {
        ComponentKind::Controller => renderer.render_to_file(
            kind.template(),
            &ControllerDescriptor::new(&file_name, &package, name),
            &path,
        )?,
        ComponentKind::Service => renderer.render_to_file(
            kind.template(),
            &ServiceDescriptor::new(&file_name, &package, name),
            &path,
        )?,
        ComponentKind::Middleware => renderer.render_to_file(
            kind.template(),
            &MiddlewareDescriptor::new(&file_name, &package, name),
            &path,
        )?,
    }

    Ok(ComponentReport {
        path,
        package,
        file_name,
    })
}

/// `.` and `..` say nothing about the package, so those paths are resolved first.
fn infer_package(dir: &Path) -> Result<String> {
    let package = naming::infer_package_name(&dir.to_string_lossy()).to_string();
    if package == "." || package == ".." {
        let resolved = dir.canonicalize()?;
        return Ok(naming::infer_package_name(&resolved.to_string_lossy()).to_string());
    }
    Ok(package)
}
