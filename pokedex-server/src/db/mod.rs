//! Database layer - connection pool, schema bootstrap and repositories
//!
//! One shared `PgPool`; every repository call is a single statement with
//! no surrounding transaction.

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
pub use schema::ensure_schema;
