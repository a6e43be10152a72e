use crate::error::{AppError, Result};
use std::{env, path::PathBuf};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub assets: AssetsConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_size: usize,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct AssetsConfig {
    pub dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            server: ServerConfig {
                host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                port: lookup("PORT")
                    .unwrap_or_else(|| "3000".to_string())
                    .parse()
                    .map_err(|_| AppError::ConfigError("Invalid PORT value".to_string()))?,
                max_body_size: lookup("MAX_BODY_SIZE")
                    .unwrap_or_else(|| "1048576".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::ConfigError("Invalid MAX_BODY_SIZE value".to_string())
                    })?,
            },
            cors: CorsConfig {
                allowed_origins: lookup("FRONTEND_URL")
                    .map(|origins| {
                        origins
                            .split(',')
                            .map(|s| s.trim().to_string())
                            .filter(|s| !s.is_empty())
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            assets: AssetsConfig {
                dir: lookup("ASSETS_DIR")
                    .unwrap_or_else(|| "assets".to_string())
                    .into(),
            },
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_port_3000() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server_address(), "0.0.0.0:3000");
        assert_eq!(config.assets.dir, PathBuf::from("assets"));
        assert!(config.cors.allowed_origins.is_empty());
    }

    #[test]
    fn reads_port_and_origins() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("FRONTEND_URL", "http://a.test, http://b.test"),
        ])
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(
            config.cors.allowed_origins,
            vec!["http://a.test", "http://b.test"]
        );
    }

    #[test]
    fn invalid_port_is_a_config_error() {
        let err = config_from(&[("PORT", "porta")]).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }
}
