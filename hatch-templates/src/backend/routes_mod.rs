use std::path::{Path, PathBuf};

use hatch_core::GeneratedFile;

/// The src/routes/mod.rs module declarations
pub struct RoutesMod;

impl GeneratedFile for RoutesMod {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("src").join("routes").join("mod.rs")
    }

    fn render(&self) -> String {
        "pub mod config;\npub mod example;\n".to_string()
    }
}
