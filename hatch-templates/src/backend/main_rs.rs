use std::path::{Path, PathBuf};

use hatch_core::{GeneratedFile, ServerConfig};

/// The src/main.rs entry point: database pool, shared state and the HTTP server
pub struct MainRs {
    pub server: ServerConfig,
    /// Edition of the generated crate; `set_var` is unsafe from 2024 on
    pub edition: String,
}

impl MainRs {
    pub fn new(server: ServerConfig) -> Self {
        Self {
            server,
            edition: "2021".to_string(),
        }
    }

    pub fn with_edition(mut self, edition: impl Into<String>) -> Self {
        self.edition = edition.into();
        self
    }

    fn set_log_level(&self) -> &'static str {
        let edition: u16 = self.edition.parse().unwrap_or(2021);
        if edition >= 2024 {
            "// SAFETY: no other thread is running yet\n        \
             unsafe { std::env::set_var(\"RUST_LOG\", \"debug\") };"
        } else {
            "std::env::set_var(\"RUST_LOG\", \"debug\");"
        }
    }
}

impl GeneratedFile for MainRs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("src").join("main.rs")
    }

    fn render(&self) -> String {
        format!(
            r#"mod error;
mod routes;
mod structs;

use actix_web::{{web::Data, App, HttpServer}};
use anyhow::Result;
use dotenv::dotenv;
use sqlx::postgres::PgPoolOptions;
use std::{{sync::Mutex, time::Duration}};
use structs::AppState;

#[actix_web::main]
async fn main() -> Result<()> {{
    if std::env::var("RUST_LOG").is_err() {{
        {set_log_level}
    }}
    env_logger::init();
    dotenv().ok();

    let db_url = std::env::var("{database_env}")?;
    let db_pool = PgPoolOptions::new()
        .max_connections({max_connections})
        .max_lifetime(Duration::new(6, 0))
        .connect(&db_url)
        .await?;

    // Shared across requests: active connection count, database pool and payload cap.
    let app_state = Data::new(AppState {{
        active_cnx: Mutex::new(0),
        max_payload_size: {max_payload_size},
        db_pool,
    }});

    Ok(HttpServer::new(move || {{
        App::new()
            .app_data(app_state.clone())
            .configure(routes::config::configure_routes)
    }})
    .bind(("{host}", {port}))?
    .run()
    .await?)
}}
"#,
            set_log_level = self.set_log_level(),
            database_env = self.server.database_env,
            max_connections = self.server.max_connections,
            max_payload_size = self.server.max_payload_size,
            host = self.server.host,
            port = self.server.port,
        )
    }
}
