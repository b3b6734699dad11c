//! Database connection settings
//!
//! The binary fills these from `DB_HOST`, `DB_PORT`, `DB_USER`,
//! `DB_PASSWORD` and `DB_NAME`.

use std::fmt;

use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// Connection parameters for the PostgreSQL server
#[derive(Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: String::new(),
            database: "pokemon".to_string(),
        }
    }
}

impl DbConfig {
    /// Build sqlx connect options. TLS is disabled.
    pub fn connect_options(&self) -> PgConnectOptions {
        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.database)
            .ssl_mode(PgSslMode::Disable);

        if self.password.is_empty() {
            options
        } else {
            options.password(&self.password)
        }
    }
}

// Password stays out of logs
impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("database", &self.database)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = DbConfig::default();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 5432);
        assert_eq!(config.database, "pokemon");
    }

    #[test]
    fn connect_options_carry_fields() {
        let config = DbConfig {
            host: "db.internal".into(),
            port: 6543,
            user: "ash".into(),
            password: "pallet".into(),
            database: "pokedex".into(),
        };
        let options = config.connect_options();
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_username(), "ash");
        assert_eq!(options.get_database(), Some("pokedex"));
    }

    #[test]
    fn debug_redacts_password() {
        let config = DbConfig {
            password: "hunter2".into(),
            ..DbConfig::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("***"));
    }
}
