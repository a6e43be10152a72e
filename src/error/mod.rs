mod app_error;

pub use app_error::{AppError, UNHANDLED_MESSAGE};

pub type Result<T> = std::result::Result<T, AppError>;
