//! Compile-time embedded templates and the [`TemplateSet`] built from them.
//!
//! Each constant loads a template file from `templates/` via [`include_str!`]. The paths
//! are relative to this source file (`crates/comet-core/src/templates/embedded.rs`).
//!
//! ## Adding a new template
//!
//! 1. Place the template file under `templates/`
//! 2. Add a `pub const` here with `include_str!("../../../../templates/<file>")`
//! 3. Add a [`TemplateId`] variant and map it in [`TemplateId::file_name`] and
//!    [`TemplateSet::bundled`]
//! 4. Run `cargo build`; a wrong path fails compilation
//!
//! ## Warning
//!
//! Do NOT rename template files without updating both the `include_str!` path and
//! [`TemplateId::file_name`]: extracted copies on disk are looked up by that name.

use std::fmt;
use std::path::Path;

use crate::error::{CometError, Result};

pub const MAIN: &str = include_str!("../../../../templates/main.go.tmpl");
pub const CONTROLLER: &str = include_str!("../../../../templates/controller.go.tmpl");
pub const SERVICE: &str = include_str!("../../../../templates/service.go.tmpl");
pub const MIDDLEWARE: &str = include_str!("../../../../templates/middleware.go.tmpl");

/// The fixed set of template resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    Main,
    Controller,
    Service,
    Middleware,
}

impl TemplateId {
    pub const ALL: [TemplateId; 4] = [
        Self::Main,
        Self::Controller,
        Self::Service,
        Self::Middleware,
    ];

    /// File name of the resource inside a templates directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Main => "main.go.tmpl",
            Self::Controller => "controller.go.tmpl",
            Self::Service => "service.go.tmpl",
            Self::Middleware => "middleware.go.tmpl",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Main => 0,
            Self::Controller => 1,
            Self::Service => 2,
            Self::Middleware => 3,
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// The sources of all four templates, loaded once and then only read.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    sources: [String; 4],
}

impl TemplateSet {
    /// The templates compiled into the binary.
    pub fn bundled() -> Self {
        Self {
            sources: [
                MAIN.to_string(),
                CONTROLLER.to_string(),
                SERVICE.to_string(),
                MIDDLEWARE.to_string(),
            ],
        }
    }

    /// Read every template from `dir`.
    ///
    /// Fails with [`CometError::TemplateLoad`] on the first resource that is
    /// missing or unreadable.
    pub fn load(dir: &Path) -> Result<Self> {
        let read = |id: TemplateId| {
            let path = dir.join(id.file_name());
            std::fs::read_to_string(&path).map_err(|e| CometError::TemplateLoad {
                name: id.file_name().to_string(),
                reason: format!("{}: {e}", path.display()),
            })
        };

        Ok(Self {
            sources: [
                read(TemplateId::Main)?,
                read(TemplateId::Controller)?,
                read(TemplateId::Service)?,
                read(TemplateId::Middleware)?,
            ],
        })
    }

    /// Source text of one template.
    pub fn source(&self, id: TemplateId) -> &str {
        &self.sources[id.index()]
    }

    /// Iterate over `(id, source)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (TemplateId, &str)> {
        TemplateId::ALL.into_iter().map(|id| (id, self.source(id)))
    }
}
