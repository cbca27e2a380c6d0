//! Frontend (vite) files written on top of the create-vite skeleton.

mod vite_config;

pub use vite_config::ViteConfig;

/// Directory of the web project, relative to the backend project root.
pub const WEB_DIR: &str = "src/web";
