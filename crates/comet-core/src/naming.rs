//! Naming rules for generated files.
//!
//! - [`component_file_name`] turns a display name such as `UserAccount` into a
//!   file name such as `user_account_service.go`.
//! - [`lower_name`] produces the default instance identifier of a service
//!   (`UserAccount` -> `userAccount`).
//! - [`infer_package_name`] picks the Go package name from the directory the
//!   file is generated into.
//! - [`validate_module_path`] checks the module path given to `comet new`.

use std::path::MAIN_SEPARATOR;

use crate::component::ComponentKind;
use crate::error::{CometError, Result};

/// Package name used when a path has no usable segment (e.g. `/`).
pub const DEFAULT_PACKAGE: &str = "main";

/// Convert a display name to snake_case.
///
/// Every uppercase character becomes `_` plus its lowercase form, except at the
/// start of the name. Other characters are copied unchanged, so an already
/// snake_case name comes back as-is.
pub fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Build the file name for a component: `<snake_name>_<kind>.<ext>`.
///
/// An empty name yields `_<kind>.<ext>`; callers are expected to reject empty
/// names before getting here.
pub fn component_file_name(name: &str, kind: ComponentKind, extension: &str) -> String {
    format!("{}_{}.{}", to_snake_case(name), kind.as_str(), extension)
}

/// Lowercase the first character of `name` and keep the rest unchanged.
pub fn lower_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Infer the package name from a directory path.
///
/// Returns the last non-empty path segment, so `modules/user/services` and
/// `modules/user/services/` both give `services`. Falls back to
/// [`DEFAULT_PACKAGE`] when no segment is left.
pub fn infer_package_name(dir: &str) -> &str {
    dir.split(|c: char| c == '/' || c == MAIN_SEPARATOR)
        .rev()
        .find(|segment| !segment.is_empty())
        .unwrap_or(DEFAULT_PACKAGE)
}

/// Check that `module` is usable as a Go module path.
pub fn validate_module_path(module: &str) -> Result<()> {
    let invalid = || CometError::InvalidModulePath(module.to_string());

    if module.is_empty() || module.starts_with('/') || module.ends_with('/') {
        return Err(invalid());
    }

    let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~' | '/');
    if !module.chars().all(allowed) {
        return Err(invalid());
    }

    if module
        .split('/')
        .any(|element| element.is_empty() || element == "." || element == "..")
    {
        return Err(invalid());
    }

    Ok(())
}
