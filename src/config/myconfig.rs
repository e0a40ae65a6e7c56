use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub database: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub host: String,
    pub run_migrations: bool,
}

impl Config {
    /// Builds the configuration from the three positional arguments
    /// (`<dbname> <port> <user>`) layered with environment overrides.
    /// The password defaults to empty, matching the target server's
    /// trust setup.
    pub fn init(database: &str, port: &str, user: &str) -> Result<Self> {
        let port = port
            .parse::<u16>()
            .context("<port> must be a valid u16 integer")?;

        let host = std::env::var("CAFE_DB_HOST").unwrap_or_else(|_| "localhost".to_string());
        let password = std::env::var("CAFE_DB_PASSWORD").unwrap_or_default();

        let run_migrations = std::env::var("RUN_MIGRATIONS")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        Ok(Self {
            database: database.to_string(),
            port,
            user: user.to_string(),
            password,
            host,
            run_migrations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn init_parses_port() {
        let config = Config::init("cafe", "5432", "alice").unwrap();
        assert_eq!(config.database, "cafe");
        assert_eq!(config.port, 5432);
        assert_eq!(config.user, "alice");
    }

    #[test]
    fn init_rejects_bad_port() {
        assert!(Config::init("cafe", "not-a-port", "alice").is_err());
        assert!(Config::init("cafe", "70000", "alice").is_err());
    }
}
