//! Unified error types for the comet toolkit.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// All errors that can occur during comet operations.
#[derive(Error, Debug)]
pub enum CometError {
    // --- Configuration ---

    /// The configuration file exists but contains invalid JSON.
    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // --- User input ---

    /// The component kind is not one of: `controller`, `service`, `middleware`.
    #[error("invalid component: {0} (supported: controller, service, middleware)")]
    InvalidComponentKind(String),

    /// The module path given to `new` is not a valid Go module path.
    #[error("invalid module path: '{0}'")]
    InvalidModulePath(String),

    // --- Project ---

    /// Attempted to create a project in a directory that already exists.
    #[error("project directory already exists: {0}")]
    ProjectExists(PathBuf),

    /// A directory of the project layout could not be created.
    #[error("error creating directory {path}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- Templates ---

    /// A template resource is missing, unreadable, or does not parse.
    #[error("failed to load template '{name}': {reason}")]
    TemplateLoad { name: String, reason: String },

    /// Binding a descriptor to a template failed (e.g. a referenced field is missing).
    #[error("failed to render template '{name}': {reason}")]
    TemplateRender { name: String, reason: String },

    /// The destination of a rendered template could not be created.
    #[error("error writing file {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- External tools ---

    /// A required external tool (e.g. `go`) is not installed.
    #[error("required tool '{name}' not found — install: {install}")]
    MissingTool { name: String, install: String },

    /// An external tool exited with a non-zero status.
    #[error("error executing '{command}': {output}")]
    ExternalTool { command: String, output: String },

    /// An external tool did not finish in time and was killed.
    #[error("'{command}' timed out after {}s", .timeout.as_secs())]
    ToolTimeout { command: String, timeout: Duration },

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, CometError>`.
pub type Result<T> = std::result::Result<T, CometError>;
