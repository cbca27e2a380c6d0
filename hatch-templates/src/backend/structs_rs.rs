use std::path::{Path, PathBuf};

use hatch_core::GeneratedFile;

/// The src/structs.rs file holding the shared application state
pub struct StructsRs;

impl GeneratedFile for StructsRs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("src").join("structs.rs")
    }

    fn render(&self) -> String {
        r#"use sqlx::PgPool;
use std::sync::Mutex;

#[derive(Debug)]
pub struct AppState {
    pub active_cnx: Mutex<u32>,
    pub db_pool: PgPool,
    pub max_payload_size: usize,
}
"#
        .to_string()
    }
}
