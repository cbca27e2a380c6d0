//! File templates for hatch-generated projects.
//!
//! Each renderer implements [`hatch_core::GeneratedFile`], so it knows its own
//! path relative to the project root. Texts that are spliced into existing
//! files instead of written whole live in [`patches`].

pub mod backend;
pub mod frontend;
pub mod patches;

pub use backend::{
    CargoToml, ErrorRs, ExampleRoute, MainRs, RouteConfig, RoutesMod, StructsRs, WebRoutes,
};
pub use frontend::ViteConfig;
