pub mod app;
pub mod config;
pub mod error;
pub mod flash;
pub mod middleware;
pub mod models;
pub mod registry;
pub mod routes;
pub mod utils;
pub mod views;

pub use app::AppState;
pub use config::AppConfig;
pub use error::{AppError, Result};
pub use registry::ProductRegistry;
