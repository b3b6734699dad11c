//! pokedex-server: HTTP server for a small Pokemon catalog
//!
//! Stores records in one PostgreSQL table and answers browser requests with
//! server-rendered pages and table-row fragments.

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod templates;

pub use config::DbConfig;
pub use http::{build_router, run_server, AppState, ServerConfig};
pub use templates::Templates;
