use std::path::{Path, PathBuf};

use hatch_core::{GeneratedFile, ProjectNames};

/// The src/routes/example.rs file with an echo and a greeting endpoint
pub struct ExampleRoute {
    pub error_type: String,
}

impl ExampleRoute {
    pub fn new(names: &ProjectNames) -> Self {
        Self {
            error_type: names.error_type(),
        }
    }
}

impl GeneratedFile for ExampleRoute {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("src").join("routes").join("example.rs")
    }

    fn render(&self) -> String {
        format!(
            r#"use crate::{{error::{ty}, structs::AppState}};
use actix_web::{{
    get, post,
    web::{{self, Data}},
    HttpResponse, Responder,
}};

/// Echo back the payload of a POST request
#[post("/echo")]
pub async fn echo(_state: Data<AppState>, payload: String) -> Result<HttpResponse, {ty}> {{
    Ok(HttpResponse::Ok().body(payload))
}}

#[get("/{{name}}")]
pub async fn welcome(path: web::Path<String>) -> impl Responder {{
    HttpResponse::Ok().body(format!("Hello {{}}", path.into_inner()))
}}
"#,
            ty = self.error_type
        )
    }
}
