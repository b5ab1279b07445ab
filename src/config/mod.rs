// Configuration module entry point
// Loads settings from config.toml, environment, and defaults

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{Config, LoggingConfig, ServerConfig, StorageConfig};

impl Config {
    /// Load configuration from the default `config.toml` location
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from the specified file path (without extension)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SERVER"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("storage.data_dir", "data")?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .build()?;

        let mut cfg: Self = settings.try_deserialize()?;

        // The bare PORT variable wins over file and defaults
        if let Ok(port) = std::env::var("PORT") {
            cfg.server.port = port
                .parse()
                .map_err(|_| config::ConfigError::Message(format!("invalid PORT value: {port}")))?;
        }

        Ok(cfg)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config_file() {
        let cfg = Config::load_from("no-such-config-file").expect("load");
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.storage.data_dir, "data");
        assert_eq!(cfg.logging.level, "info");
        assert!(cfg.logging.access_log);
    }

    #[test]
    fn test_socket_addr_round_trip() {
        let cfg = Config::load_from("no-such-config-file").expect("load");
        let addr = cfg.socket_addr().expect("addr");
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
    }
}
