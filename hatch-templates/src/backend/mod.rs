//! Backend (actix-web) skeleton files.

mod cargo_toml;
mod error_rs;
mod example_route;
mod main_rs;
mod route_config;
mod routes_mod;
mod structs_rs;
mod web_routes;

pub use cargo_toml::CargoToml;
pub(crate) use cargo_toml::dependency_line;
pub use error_rs::ErrorRs;
pub use example_route::ExampleRoute;
pub use main_rs::MainRs;
pub use route_config::RouteConfig;
pub use routes_mod::RoutesMod;
pub use structs_rs::StructsRs;
pub use web_routes::WebRoutes;
