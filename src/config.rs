use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database: DatabaseConfig {
                url: env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "sqlite:data/temajuk.db".to_string()),
            },
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: match env::var("SERVER_PORT") {
                    Ok(raw) => raw.parse().unwrap_or_else(|_| {
                        tracing::warn!("invalid SERVER_PORT '{}', falling back to 8000", raw);
                        8000
                    }),
                    Err(_) => 8000,
                },
            },
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use std::env;

    #[test]
    fn malformed_server_port_falls_back_to_default() {
        env::set_var("SERVER_PORT", "not-a-port");
        let config = Config::from_env().unwrap();
        assert_eq!(config.server.port, 8000);
        env::remove_var("SERVER_PORT");
    }
}
