use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for hatch-core operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to write '{path}'")]
    #[diagnostic(code(hatch::write_failure))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read '{path}'")]
    #[diagnostic(code(hatch::read_failure))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("anchor '{anchor}' not found{}", location(.path))]
    #[diagnostic(
        code(hatch::missing_anchor),
        help("the file was left untouched; it may have been edited since it was generated")
    )]
    MissingAnchor { anchor: char, path: Option<PathBuf> },

    #[error("invalid argument: {message}")]
    #[diagnostic(code(hatch::invalid_argument))]
    InvalidArgument { message: String },

    #[error("`{command}` failed: {reason}")]
    #[diagnostic(
        code(hatch::external_process),
        help("the project skeleton may be incomplete; fix the problem and run again")
    )]
    ExternalProcess { command: String, reason: String },

    #[error("failed to parse {filename}")]
    #[diagnostic(code(hatch::config_parse))]
    ConfigParse {
        filename: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Create a write error for the given path
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Write {
            path: path.into(),
            source,
        })
    }

    /// Create a read error for the given path
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Read {
            path: path.into(),
            source,
        })
    }

    /// Create a missing anchor error not yet tied to a file
    pub fn missing_anchor(anchor: char) -> Box<Self> {
        Box::new(Error::MissingAnchor { anchor, path: None })
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidArgument {
            message: message.into(),
        })
    }

    /// Create an external process error
    pub fn external_process(command: impl Into<String>, reason: impl Into<String>) -> Box<Self> {
        Box::new(Error::ExternalProcess {
            command: command.into(),
            reason: reason.into(),
        })
    }

    /// Create a config parse error from a toml error with source context
    pub fn config_parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::ConfigParse {
            filename: filename.to_string(),
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Attach a file path to a missing anchor error; other errors pass through.
    pub fn at_path(self: Box<Self>, at: impl Into<PathBuf>) -> Box<Self> {
        match *self {
            Error::MissingAnchor { anchor, path: None } => Box::new(Error::MissingAnchor {
                anchor,
                path: Some(at.into()),
            }),
            other => Box::new(other),
        }
    }
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" in '{}'", p.display()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_anchor_message() {
        let err = Error::missing_anchor(';');
        assert_eq!(err.to_string(), "anchor ';' not found");

        let err = err.at_path("src/routes/config.rs");
        assert_eq!(
            err.to_string(),
            "anchor ';' not found in 'src/routes/config.rs'"
        );
    }

    #[test]
    fn test_at_path_keeps_other_errors() {
        let err = Error::invalid_argument("n must be positive").at_path("x.rs");
        assert!(matches!(*err, Error::InvalidArgument { .. }));
    }

    #[test]
    fn test_external_process_message() {
        let err = Error::external_process("cargo new demo", "exit status: 101");
        assert_eq!(err.to_string(), "`cargo new demo` failed: exit status: 101");
    }
}
