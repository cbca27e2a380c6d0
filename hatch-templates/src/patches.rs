//! Text spliced into already generated files when the web frontend is added.

use hatch_core::{Anchor, PatchRequest};

use crate::backend::dependency_line;

/// Dependency serving the frontend's static files.
pub const WEB_DEPENDENCY: (&str, &str) = ("actix-files", "0.6.2");

/// `pub mod web;` for src/routes/mod.rs
pub fn web_module_declaration() -> PatchRequest {
    PatchRequest::append("pub mod web;\n")
}

/// Services for src/routes/config.rs.
///
/// Replaces the closing `;` of the last registration and re-closes the
/// function after chaining the web scope and the asset service.
pub fn web_services() -> PatchRequest {
    PatchRequest::new(
        Anchor::BeforeLast(';'),
        r#"
    .service(web::scope("/web").service(routes::web::get_index))
    .service(routes::web::assets());
}
"#,
    )
}

/// `actix-files` line for Cargo.toml; `[dependencies]` is the last table.
pub fn web_dependency() -> PatchRequest {
    let (name, version) = WEB_DEPENDENCY;
    PatchRequest::append(format!("{}\n", dependency_line(name, version)))
}

/// Tailwind import at the top of the frontend's global stylesheet.
pub fn tailwind_import() -> PatchRequest {
    PatchRequest::prepend("@import \"tailwindcss\";")
}
