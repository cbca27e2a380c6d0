//! Core utilities for the hatch project scaffolder.
//!
//! Naming conversions, in-place template patching, generated-file writing
//! and user configuration.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod file;
mod flavor;
mod naming;
mod patch;

pub use config::{Config, FrontendConfig, ProjectConfig, ServerConfig};
pub use error::{Error, Result};
// File operations
pub use file::GeneratedFile;
pub use flavor::Flavor;
// Naming
pub use naming::{
    Convention, ProjectNames, TitleCaseIdentifier, dash_case_to_title_case, find_nth_occurrence,
    snake_case_to_title_case, to_dash_case, to_snake_case, to_title_case_identifier,
};
// Patching
pub use patch::{
    Anchor, PatchFile, PatchRequest, append_declaration, prepend_declaration,
    splice_before_last_anchor, splice_before_nth_anchor,
};
