//! Template system for generated Go sources.
//!
//! Templates are embedded into the binary at compile-time via [`include_str!`] in the
//! [`embedded`] module, written to a templates directory by [`extract`], loaded back as
//! an immutable [`embedded::TemplateSet`], then rendered with
//! [Handlebars](https://handlebarsjs.com/) via the [`renderer::TemplateRenderer`].
//!
//! ## Template variables
//!
//! Templates use Handlebars syntax. Variables are the descriptor fields:
//! - `{{project_name}}`, `{{module}}` — entrypoint only
//! - `{{package}}` — Go package inferred from the target directory
//! - `{{name}}` — component display name (e.g. `UserAccount`)
//! - `{{lower_name}}` — service only (e.g. `userAccount`)
//!
//! **Warning**: Template files in `templates/` and constants in [`embedded`] must stay in sync.
//! The `include_str!` paths are relative to this file and checked at compile-time.

pub mod embedded;
pub mod extract;
pub mod renderer;
