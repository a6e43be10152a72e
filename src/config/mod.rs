mod app_config;

pub use app_config::{AppConfig, AssetsConfig, CorsConfig, ServerConfig};
