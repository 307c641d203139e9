use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Defaults read from the optional configuration file.
///
/// Unknown keys are ignored. Both fields are overridden by command-line flags.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub css: Option<PathBuf>,
    pub template: Option<PathBuf>,
}

impl Config {
    /// Load config from a JSON file (or TOML, by `.toml` extension).
    ///
    /// Returns the empty config when the file does not exist. A file that
    /// exists but does not parse is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no configuration file");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(path, &content)?;
        info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    fn parse(path: &Path, content: &str) -> Result<Self> {
        let invalid = |message: String| Error::Config {
            path: path.to_path_buf(),
            message,
        };
        let config: Self = if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(content).map_err(|e| invalid(e.to_string()))?
        } else {
            serde_json::from_str(content).map_err(|e| invalid(e.to_string()))?
        };
        Ok(config.without_empty_paths())
    }

    // An empty string in the file means "not set".
    fn without_empty_paths(self) -> Self {
        let keep = |p: Option<PathBuf>| p.filter(|p| !p.as_os_str().is_empty());
        Self {
            css: keep(self.css),
            template: keep(self.template),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_file_is_empty_config() {
        let dir = tempdir().unwrap();
        let config = Config::load(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn json_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"css": "style.css", "template": "custom.html", "extra": 1}"#).unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.css, Some(PathBuf::from("style.css")));
        assert_eq!(config.template, Some(PathBuf::from("custom.html")));
    }

    #[test]
    fn partial_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"template": "custom.html"}"#).unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.css, None);
        assert_eq!(config.template, Some(PathBuf::from("custom.html")));
    }

    #[test]
    fn toml_by_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mdpage.toml");
        fs::write(&path, "css = \"print.css\"\n").unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.css, Some(PathBuf::from("print.css")));
        assert_eq!(config.template, None);
    }

    #[test]
    fn empty_strings_are_unset() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"css": "", "template": ""}"#).unwrap();
        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
