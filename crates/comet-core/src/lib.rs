//! Core library for the comet scaffolding CLI.
//!
//! Generates go-comet projects and components from a fixed set of Handlebars
//! templates:
//! - [`project::create_project`] — the `new` command: directory layout, sample
//!   sources, `go mod init` and the best-effort runtime fetch
//! - [`component::add_component`] — the `add` command: one controller, service
//!   or middleware rendered into an existing directory
//! - [`naming`] — file and package name derivation
//! - [`toolchain`] — the [`toolchain::ToolRunner`] seam for external commands

pub mod component;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod naming;
pub mod project;
pub mod templates;
pub mod toolchain;
