//! User defaults loaded from `hatch.toml`.
//!
//! Every section and field is optional; a missing file yields the defaults.

use std::path::Path;

use serde::Deserialize;

use crate::{Error, Flavor, Result};

/// Root of `hatch.toml`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub project: ProjectConfig,
    pub server: ServerConfig,
    pub frontend: FrontendConfig,
}

/// `[project]`: values written into the generated Cargo.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    pub authors: Vec<String>,
    pub edition: String,
    pub version: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            authors: Vec::new(),
            edition: "2021".to_string(),
            version: "0.1.0".to_string(),
        }
    }
}

/// `[server]`: values baked into the generated main.rs
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Environment variable holding the database URL
    pub database_env: String,
    pub max_connections: u32,
    pub max_payload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_env: "DB_URL".to_string(),
            max_connections: 5,
            max_payload_size: 262_144,
        }
    }
}

/// `[frontend]`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FrontendConfig {
    /// Preselected flavor in the prompt
    pub flavor: Flavor,
}

impl Config {
    /// Load a config file, falling back to defaults when it does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a config from a string with a filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config_parse(e, content, filename))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load(temp.path().join("hatch.toml")).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.database_env, "DB_URL");
        assert_eq!(config.project.edition, "2021");
        assert_eq!(config.frontend.flavor, Flavor::React);
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_str_with_filename(
            r#"
            [project]
            authors = ["Ada <ada@example.com>"]

            [server]
            port = 3000

            [frontend]
            flavor = "svelte"
            "#,
            "hatch.toml",
        )
        .unwrap();

        assert_eq!(config.project.authors, vec!["Ada <ada@example.com>"]);
        assert_eq!(config.project.version, "0.1.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.frontend.flavor, Flavor::Svelte);
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("hatch.toml");
        fs::write(&path, "[server]\ndatabase_env = \"DATABASE_URL\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.server.database_env, "DATABASE_URL");
    }

    #[test]
    fn test_parse_error_is_diagnostic() {
        let err = Config::from_str_with_filename("[server]\nport = \"high\"\n", "hatch.toml")
            .unwrap_err();
        match *err {
            Error::ConfigParse { filename, .. } => assert_eq!(filename, "hatch.toml"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(Config::from_str_with_filename("[server]\nprot = 1\n", "hatch.toml").is_err());
    }
}
