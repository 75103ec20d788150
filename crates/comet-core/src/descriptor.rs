//! Data records bound to templates.
//!
//! One descriptor feeds exactly one render call. Field names are serialized
//! as-is, so they are also the template variable names.

use serde::Serialize;

use crate::naming;

/// File name of the generated entrypoint.
pub const ENTRYPOINT_FILE: &str = "main.go";

/// Data for `main.go.tmpl`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDescriptor {
    pub file_name: String,
    pub project_name: String,
    pub module: String,
}

impl ProjectDescriptor {
    pub fn new(project_name: &str, module: &str) -> Self {
        Self {
            file_name: ENTRYPOINT_FILE.to_string(),
            project_name: project_name.to_string(),
            module: module.to_string(),
        }
    }
}

/// Data for `controller.go.tmpl`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControllerDescriptor {
    pub file_name: String,
    pub package: String,
    pub name: String,
}

impl ControllerDescriptor {
    pub fn new(file_name: &str, package: &str, name: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            package: package.to_string(),
            name: name.to_string(),
        }
    }
}

/// Data for `service.go.tmpl`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceDescriptor {
    pub file_name: String,
    pub package: String,
    pub name: String,
    /// Default instance identifier, `name` with its first letter lowercased.
    pub lower_name: String,
}

impl ServiceDescriptor {
    pub fn new(file_name: &str, package: &str, name: &str) -> Self {
        Self::with_lower_name(file_name, package, name, &naming::lower_name(name))
    }

    /// Same as [`ServiceDescriptor::new`] with an explicit instance identifier.
    pub fn with_lower_name(file_name: &str, package: &str, name: &str, lower_name: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            package: package.to_string(),
            name: name.to_string(),
            lower_name: lower_name.to_string(),
        }
    }
}

/// Data for `middleware.go.tmpl`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MiddlewareDescriptor {
    pub file_name: String,
    pub package: String,
    pub name: String,
}

impl MiddlewareDescriptor {
    pub fn new(file_name: &str, package: &str, name: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            package: package.to_string(),
            name: name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_descriptor_uses_entrypoint() {
        let d = ProjectDescriptor::new("myapp", "github.com/me/myapp");
        assert_eq!(d.file_name, "main.go");
    }

    #[test]
    fn test_service_descriptor_lower_name() {
        let d = ServiceDescriptor::new("user_account_service.go", "services", "UserAccount");
        assert_eq!(d.lower_name, "userAccount");
    }

    #[test]
    fn test_serialized_field_names() {
        let d = ServiceDescriptor::new("a_service.go", "services", "A");
        let value = serde_json::to_value(&d).unwrap();
        assert_eq!(value["file_name"], "a_service.go");
        assert_eq!(value["package"], "services");
        assert_eq!(value["name"], "A");
        assert_eq!(value["lower_name"], "a");
    }
}
