use std::path::{Path, PathBuf};

use hatch_core::{GeneratedFile, ProjectNames};

/// The src/error.rs file: the project's error enum and its conversions
pub struct ErrorRs {
    pub error_type: String,
}

impl ErrorRs {
    pub fn new(names: &ProjectNames) -> Self {
        Self {
            error_type: names.error_type(),
        }
    }
}

impl GeneratedFile for ErrorRs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("src").join("error.rs")
    }

    fn render(&self) -> String {
        format!(
            r#"use std::fmt;

/// Application error returned by route handlers
#[derive(Debug)]
pub enum {ty} {{
    AnyhowError(anyhow::Error),
    SqlError(sqlx::Error),
}}

impl fmt::Display for {ty} {{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {{
        match self {{
            {ty}::AnyhowError(err) => write!(f, "{{}}", err),
            {ty}::SqlError(err) => write!(f, "database error: {{}}", err),
        }}
    }}
}}

impl actix_web::error::ResponseError for {ty} {{}}

impl From<anyhow::Error> for {ty} {{
    fn from(err: anyhow::Error) -> {ty} {{
        {ty}::AnyhowError(err)
    }}
}}

impl From<sqlx::Error> for {ty} {{
    fn from(err: sqlx::Error) -> {ty} {{
        {ty}::SqlError(err)
    }}
}}
"#,
            ty = self.error_type
        )
    }
}
