//! Tool configuration (`comet.config.json`).
//!
//! Every field is optional in the file; missing fields take their defaults.
//!
//! ```json
//! {
//!   "toolchain": "go",
//!   "runtime_library": "github.com/ramoncl001/go-comet/comet@latest",
//!   "fetch_timeout_secs": 120,
//!   "templates_dir": ".comet/templates"
//! }
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{CometError, Result};

/// Default file name looked up in the current directory.
pub const CONFIG_FILE: &str = "comet.config.json";

/// Library fetched into every new project.
pub const DEFAULT_RUNTIME_LIBRARY: &str = "github.com/ramoncl001/go-comet/comet@latest";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CometConfig {
    /// Go toolchain binary used for `mod init`, `get` and `run`.
    pub toolchain: String,
    /// Library passed to `go get -u` after scaffolding; `null` skips the fetch.
    pub runtime_library: Option<String>,
    /// Upper bound for the runtime fetch.
    pub fetch_timeout_secs: u64,
    /// Directory the bundled templates are extracted to and loaded from.
    pub templates_dir: PathBuf,
}

impl Default for CometConfig {
    fn default() -> Self {
        Self {
            toolchain: "go".into(),
            runtime_library: Some(DEFAULT_RUNTIME_LIBRARY.into()),
            fetch_timeout_secs: 120,
            templates_dir: PathBuf::from(".comet/templates"),
        }
    }
}

impl CometConfig {
    /// Load the config at `path`, or the defaults if the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Load the config at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|source| CometError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CometConfig::load_or_default(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, CometConfig::default());
        assert_eq!(config.fetch_timeout(), Duration::from_secs(120));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{ "runtime_library": null, "fetch_timeout_secs": 5 }"#).unwrap();

        let config = CometConfig::load_or_default(&path).unwrap();
        assert_eq!(config.runtime_library, None);
        assert_eq!(config.fetch_timeout_secs, 5);
        assert_eq!(config.toolchain, "go");
    }

    #[test]
    fn test_full_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(
            &path,
            r#"{
                "toolchain": "/usr/local/go/bin/go",
                "runtime_library": "example.com/rt@v1.2.0",
                "fetch_timeout_secs": 30,
                "templates_dir": "tmpl"
            }"#,
        )
        .unwrap();

        let config = CometConfig::load(&path).unwrap();
        assert_eq!(config.toolchain, "/usr/local/go/bin/go");
        assert_eq!(config.runtime_library.as_deref(), Some("example.com/rt@v1.2.0"));
        assert_eq!(config.fetch_timeout(), Duration::from_secs(30));
        assert_eq!(config.templates_dir, PathBuf::from("tmpl"));
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            CometConfig::load_or_default(&path),
            Err(CometError::ConfigParse { .. })
        ));
    }
}
