//! pokedex - serve the Pokemon catalog over HTTP
//!
//! Reads the database settings from `DB_*` environment variables (a `.env`
//! file in the working directory is honoured), prepares the `pokemon` table
//! and runs the server until Ctrl+C or SIGTERM. Any startup failure ends the
//! process with a non-zero exit code.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use pokedex_server::db::{create_pool, ensure_schema};
use pokedex_server::{run_server, AppState, DbConfig, ServerConfig, Templates};

mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "pokedex",
    author,
    version,
    about = "Small Pokemon catalog served as HTML over PostgreSQL"
)]
struct Cli {
    /// Address to bind to
    #[arg(long, short = 'b', env = "POKEDEX_BIND", default_value = "0.0.0.0:8080")]
    bind: SocketAddr,

    /// PostgreSQL host
    #[arg(long, env = "DB_HOST", default_value = "localhost")]
    db_host: String,

    /// PostgreSQL port
    #[arg(long, env = "DB_PORT", default_value_t = 5432)]
    db_port: u16,

    /// PostgreSQL user
    #[arg(long, env = "DB_USER", default_value = "postgres")]
    db_user: String,

    /// PostgreSQL password
    #[arg(long, env = "DB_PASSWORD", default_value = "", hide_env_values = true)]
    db_password: String,

    /// Database name
    #[arg(long, env = "DB_NAME", default_value = "pokemon")]
    db_name: String,

    /// Debug logging (ignored when RUST_LOG is set)
    #[arg(long)]
    debug: bool,
}

impl Cli {
    fn db_config(&self) -> DbConfig {
        DbConfig {
            host: self.db_host.clone(),
            port: self.db_port,
            user: self.db_user.clone(),
            password: self.db_password.clone(),
            database: self.db_name.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is fine
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    run(cli).await
}

async fn run(cli: Cli) -> Result<()> {
    let templates = Templates::load().context("Failed to parse templates")?;

    let db = cli.db_config();
    info!(host = %db.host, port = db.port, database = %db.database, "connecting to PostgreSQL");
    let pool = create_pool(db.connect_options())
        .await
        .context("Failed to connect to database")?;
    info!("connected to PostgreSQL");

    ensure_schema(&pool)
        .await
        .context("Failed to create pokemon table")?;

    let config = ServerConfig { bind_addr: cli.bind };
    run_server(AppState::new(pool, templates), config)
        .await
        .context("Server error")?;

    Ok(())
}
