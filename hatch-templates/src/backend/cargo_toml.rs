use std::path::{Path, PathBuf};

use hatch_core::{GeneratedFile, ProjectConfig};

/// Runtime dependencies of the backend skeleton.
const BACKEND_DEPENDENCIES: &[(&str, &str)] = &[
    ("actix-web", "4"),
    ("anyhow", "1.0.75"),
    ("dotenv", "0.15.0"),
    ("env_logger", "0.10.0"),
    ("serde", r#"{ version = "1.0", features = ["derive"] }"#),
    ("serde_json", "1.0"),
    (
        "sqlx",
        r#"{ version = "0.7", features = ["runtime-tokio", "tls-rustls", "postgres"] }"#,
    ),
];

/// The Cargo.toml project manifest
pub struct CargoToml {
    pub name: String,
    pub version: String,
    pub edition: String,
    pub authors: Vec<String>,
    pub dependencies: Vec<(String, String)>,
}

impl CargoToml {
    pub fn new(name: impl Into<String>) -> Self {
        let defaults = ProjectConfig::default();
        Self {
            name: name.into(),
            version: defaults.version,
            edition: defaults.edition,
            authors: defaults.authors,
            dependencies: BACKEND_DEPENDENCIES
                .iter()
                .map(|(name, version)| (name.to_string(), version.to_string()))
                .collect(),
        }
    }

    /// Apply the `[project]` section of the user config.
    pub fn with_project(mut self, project: &ProjectConfig) -> Self {
        self.version = project.version.clone();
        self.edition = project.edition.clone();
        self.authors = project.authors.clone();
        self
    }
}

/// Render a single `name = version` line, inline tables passed through as-is.
pub(crate) fn dependency_line(name: &str, version: &str) -> String {
    if version.contains('{') {
        format!("{} = {}", name, version)
    } else {
        format!("{} = \"{}\"", name, version)
    }
}

impl GeneratedFile for CargoToml {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("Cargo.toml")
    }

    fn render(&self) -> String {
        let mut out = format!(
            "[package]\nname = \"{}\"\nversion = \"{}\"\nedition = \"{}\"\n",
            self.name, self.version, self.edition
        );

        if !self.authors.is_empty() {
            let authors: Vec<String> = self.authors.iter().map(|a| format!("\"{}\"", a)).collect();
            out.push_str(&format!("authors = [{}]\n", authors.join(", ")));
        }

        out.push_str("\n[dependencies]\n");
        for (dep_name, dep_version) in &self.dependencies {
            out.push_str(&dependency_line(dep_name, dep_version));
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependency_section_is_last() {
        let rendered = CargoToml::new("demo").render();
        let deps = rendered.find("[dependencies]").unwrap();
        assert!(rendered[deps..].lines().skip(1).all(|l| !l.starts_with('[')));
        assert!(rendered.ends_with('\n'));
    }

    #[test]
    fn test_authors_rendered_when_configured() {
        let project = ProjectConfig {
            authors: vec!["Ada <ada@example.com>".to_string()],
            ..ProjectConfig::default()
        };
        let rendered = CargoToml::new("demo").with_project(&project).render();
        assert!(rendered.contains("authors = [\"Ada <ada@example.com>\"]\n"));

        let rendered = CargoToml::new("demo").render();
        assert!(!rendered.contains("authors"));
    }

    #[test]
    fn test_dependency_line() {
        assert_eq!(dependency_line("anyhow", "1"), "anyhow = \"1\"");
        assert_eq!(
            dependency_line("serde", r#"{ version = "1" }"#),
            r#"serde = { version = "1" }"#
        );
    }
}
