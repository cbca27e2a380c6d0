use std::path::{Path, PathBuf};

use hatch_core::GeneratedFile;

/// The src/routes/config.rs file registering every service.
///
/// The statement registering the services must stay the last `;` in the
/// file: the web frontend patch splices its services in front of it.
pub struct RouteConfig;

impl GeneratedFile for RouteConfig {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("src").join("routes").join("config.rs")
    }

    fn render(&self) -> String {
        r#"use crate::routes;
use actix_web::web;

/// Configures all the api routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/example")
            .service(routes::example::echo)
            .service(routes::example::welcome),
    );
}
"#
        .to_string()
    }
}
