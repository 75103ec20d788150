//! Handlebars-based template renderer for generated Go sources.
//!
//! Wraps the [`handlebars::Handlebars`] engine with **strict mode** enabled.
//! Strict mode ensures that any `{{variable}}` referenced in a template must be present
//! in the descriptor, otherwise rendering returns an error instead of writing Go code
//! with a hole in it. HTML escaping is turned off since the output is source code.
//!
//! ## Usage
//!
//! ```ignore
//! use comet_core::templates::{embedded::{TemplateId, TemplateSet}, renderer::TemplateRenderer};
//!
//! let renderer = TemplateRenderer::new(&TemplateSet::bundled())?;
//! renderer.render_to_file(TemplateId::Controller, &descriptor, &dest)?;
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use handlebars::{Handlebars, RenderErrorReason};
use serde::Serialize;

use crate::error::{CometError, Result};
use crate::templates::embedded::{TemplateId, TemplateSet};

/// Template renderer with the four templates registered by file name.
pub struct TemplateRenderer {
    hbs: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create a renderer from a loaded [`TemplateSet`].
    ///
    /// A template that does not parse fails with [`CometError::TemplateLoad`].
    pub fn new(templates: &TemplateSet) -> Result<Self> {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_escape_fn(handlebars::no_escape);

        for (id, source) in templates.iter() {
            hbs.register_template_string(id.file_name(), source)
                .map_err(|e| CometError::TemplateLoad {
                    name: id.file_name().to_string(),
                    reason: e.to_string(),
                })?;
        }

        Ok(Self { hbs })
    }

    /// Render a template into a string.
    pub fn render<T: Serialize>(&self, id: TemplateId, data: &T) -> Result<String> {
        self.hbs
            .render(id.file_name(), data)
            .map_err(|e| CometError::TemplateRender {
                name: id.file_name().to_string(),
                reason: e.to_string(),
            })
    }

    /// Render a template into `dest`, creating or truncating the file.
    ///
    /// The parent directory must already exist. The file is created before the
    /// data is bound, so a render error can leave an empty or partial file behind.
    /// Write failures, including the final flush, surface as [`CometError::FileWrite`].
    pub fn render_to_file<T: Serialize>(
        &self,
        id: TemplateId,
        data: &T,
        dest: &Path,
    ) -> Result<()> {
        let write_error = |source: std::io::Error| CometError::FileWrite {
            path: dest.to_path_buf(),
            source,
        };

        let file = File::create(dest).map_err(write_error)?;
        let mut writer = BufWriter::new(file);

        self.hbs
            .render_to_write(id.file_name(), data, &mut writer)
            .map_err(|e| {
                let message = e.to_string();
                match RenderErrorReason::from(e) {
                    RenderErrorReason::IOError(source) => write_error(source),
                    _ => CometError::TemplateRender {
                        name: id.file_name().to_string(),
                        reason: message,
                    },
                }
            })?;
        writer.flush().map_err(write_error)?;

        tracing::debug!("rendered {id} -> {}", dest.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{ControllerDescriptor, ProjectDescriptor, ServiceDescriptor};

    fn renderer() -> TemplateRenderer {
        TemplateRenderer::new(&TemplateSet::bundled()).unwrap()
    }

    #[test]
    fn test_render_project_contains_module_verbatim() {
        let data = ProjectDescriptor::new("myapp", "github.com/me/myapp");
        let out = renderer().render(TemplateId::Main, &data).unwrap();
        assert!(out.contains("\"github.com/me/myapp/middlewares\""));
        assert!(out.contains("myapp"));
        assert!(out.starts_with("// myapp"));
    }

    #[test]
    fn test_render_to_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("user_account_service.go");
        let data = ServiceDescriptor::new("user_account_service.go", "services", "UserAccount");

        renderer().render_to_file(TemplateId::Service, &data, &dest).unwrap();

        let content = std::fs::read_to_string(&dest).unwrap();
        assert!(content.starts_with("package services"));
        assert!(content.contains("UserAccountService"));
        assert!(content.contains("userAccountService"));
    }

    #[test]
    fn test_render_to_file_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("foo_controller.go");
        std::fs::write(&dest, "old contents that are longer than nothing").unwrap();

        let data = ControllerDescriptor::new("foo_controller.go", "controllers", "Foo");
        renderer().render_to_file(TemplateId::Controller, &data, &dest).unwrap();

        let content = std::fs::read_to_string(&dest).unwrap();
        assert!(!content.contains("old contents"));
        assert!(content.contains("FooController"));
    }

    #[test]
    fn test_missing_field_is_a_render_error() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("svc.go");
        let data = serde_json::json!({ "package": "services", "name": "Foo" });

        let err = renderer()
            .render_to_file(TemplateId::Service, &data, &dest)
            .unwrap_err();
        assert!(matches!(
            err,
            CometError::TemplateRender { ref name, .. } if name == "service.go.tmpl"
        ));
        // created before binding, not cleaned up
        assert!(dest.exists());
    }

    #[test]
    fn test_missing_parent_is_a_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("no/such/dir/foo_controller.go");
        let data = ControllerDescriptor::new("foo_controller.go", "controllers", "Foo");

        let err = renderer()
            .render_to_file(TemplateId::Controller, &data, &dest)
            .unwrap_err();
        assert!(matches!(err, CometError::FileWrite { ref path, .. } if path == &dest));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_full_device_is_a_write_error() {
        let dest = Path::new("/dev/full");
        let data = ControllerDescriptor::new("foo_controller.go", "controllers", "Foo");

        let err = renderer()
            .render_to_file(TemplateId::Controller, &data, dest)
            .unwrap_err();
        assert!(matches!(err, CometError::FileWrite { ref path, .. } if path == dest));
    }

    #[test]
    fn test_unparsable_template_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        for id in TemplateId::ALL {
            std::fs::write(dir.path().join(id.file_name()), "package {{package}}").unwrap();
        }
        std::fs::write(dir.path().join("middleware.go.tmpl"), "{{#if}}").unwrap();

        let set = TemplateSet::load(dir.path()).unwrap();
        let err = TemplateRenderer::new(&set).err().unwrap();
        assert!(matches!(
            err,
            CometError::TemplateLoad { ref name, .. } if name == "middleware.go.tmpl"
        ));
    }
}
