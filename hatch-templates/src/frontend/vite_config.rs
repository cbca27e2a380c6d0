use std::path::{Path, PathBuf};

use hatch_core::{Flavor, GeneratedFile};

use super::WEB_DIR;

/// The vite.config.ts build configuration, replacing the template's own.
///
/// Keeps the flavor's framework plugin and adds tailwind. The build lands in
/// `dist/`, which is where the generated web routes serve from.
pub struct ViteConfig {
    pub flavor: Flavor,
}

impl ViteConfig {
    pub fn new(flavor: Flavor) -> Self {
        Self { flavor }
    }
}

impl GeneratedFile for ViteConfig {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(WEB_DIR).join("vite.config.ts")
    }

    fn render(&self) -> String {
        let mut imports = vec!["import { defineConfig } from 'vite'".to_string()];
        let mut plugins = Vec::new();
        if let Some((import, call)) = self.flavor.vite_plugin() {
            imports.push(import.to_string());
            plugins.push(call);
        }
        imports.push("import tailwindcss from '@tailwindcss/vite'".to_string());
        plugins.push("tailwindcss()");

        format!(
            r#"{imports}

export default defineConfig({{
  base: '/',
  plugins: [{plugins}],
  build: {{
    outDir: 'dist',
    emptyOutDir: true,
  }},
}})
"#,
            imports = imports.join("\n"),
            plugins = plugins.join(", "),
        )
    }
}
