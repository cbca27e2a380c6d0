use std::path::{Path, PathBuf};

use hatch_core::{GeneratedFile, ProjectNames};

/// The src/routes/web.rs file serving the built frontend
pub struct WebRoutes {
    pub error_type: String,
}

impl WebRoutes {
    pub fn new(names: &ProjectNames) -> Self {
        Self {
            error_type: names.error_type(),
        }
    }
}

impl GeneratedFile for WebRoutes {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("src").join("routes").join("web.rs")
    }

    fn render(&self) -> String {
        format!(
            r#"use crate::error::{ty};
use actix_files::{{Files, NamedFile}};
use actix_web::get;

const DIST_DIR: &str = "src/web/dist";

/// Serve the frontend entry page
#[get("")]
pub async fn get_index() -> Result<NamedFile, {ty}> {{
    Ok(NamedFile::open(format!("{{}}/index.html", DIST_DIR)).map_err(anyhow::Error::from)?)
}}

/// Serve the bundled scripts, styles and images emitted by vite
pub fn assets() -> Files {{
    Files::new("/assets", format!("{{}}/assets", DIST_DIR))
}}
"#,
            ty = self.error_type
        )
    }
}
