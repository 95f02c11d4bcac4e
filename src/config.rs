//! Environment-driven configuration, read once at process start.

use sqlx::postgres::{PgConnectOptions, PgSslMode};

#[derive(Clone, Debug)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub server: ServerSettings,
}

#[derive(Clone, Debug)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub ssl: bool,
    /// When set, a failed connection at startup aborts the process instead of
    /// degrading to per-request errors.
    pub required: bool,
}

#[derive(Clone, Debug)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Origins granted CORS access.
    pub allowed_origins: Vec<String>,
}

impl Settings {
    /// Read everything from the environment, with development defaults.
    /// `.env` is honored when the caller loads it first.
    pub fn from_env() -> Self {
        Self {
            database: DatabaseSettings {
                host: env_or("DB_HOST", "localhost"),
                port: env_parse("DB_PORT", 5432),
                user: env_or("DB_USER", ""),
                password: env_or("DB_PASS", ""),
                name: env_or("DB_NAME", ""),
                ssl: env_parse("DB_SSL", false),
                required: env_parse("DB_REQUIRED", false),
            },
            server: ServerSettings {
                host: env_or("HOST", "0.0.0.0"),
                port: env_parse("PORT", 4000),
                allowed_origins: vec![env_or("FRONTEND_URL", "http://localhost:5173")],
            },
        }
    }
}

impl DatabaseSettings {
    pub fn connect_options(&self) -> PgConnectOptions {
        let ssl_mode = if self.ssl {
            PgSslMode::Require
        } else {
            PgSslMode::Prefer
        };
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
            .ssl_mode(ssl_mode)
    }
}

impl ServerSettings {
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn socket_addr_joins_host_and_port() {
        let server = ServerSettings {
            host: "0.0.0.0".to_string(),
            port: 4000,
            allowed_origins: vec!["http://localhost:5173".to_string()],
        };
        assert_eq!(server.socket_addr(), "0.0.0.0:4000");
    }

    #[test]
    fn env_parse_falls_back_on_garbage() {
        std::env::set_var("PRODUCTS_API_TEST_PORT", "not-a-port");
        let port: u16 = env_parse("PRODUCTS_API_TEST_PORT", 4000);
        assert_eq!(port, 4000);
        std::env::remove_var("PRODUCTS_API_TEST_PORT");
    }
}
