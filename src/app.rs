use std::any::Any;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    middleware,
    response::{IntoResponse, Response},
};
use tower_http::{
    catch_panic::CatchPanicLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};

use crate::{
    config::AppConfig,
    error::{AppError, Result},
    flash::FlashStore,
    middleware::session_middleware,
    registry::ProductRegistry,
    routes,
};

#[derive(Clone)]
pub struct AppState {
    pub registry: ProductRegistry,
    pub flash: FlashStore,
}

impl AppState {
    pub fn new(registry: ProductRegistry) -> Self {
        Self {
            registry,
            flash: FlashStore::new(),
        }
    }
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    AppError::InternalError(format!("Handler panicked: {}", detail)).into_response()
}

pub fn build(config: &AppConfig, registry: ProductRegistry) -> Result<Router> {
    build_with_state(config, AppState::new(registry))
}

/// Same as [`build`], for callers that keep a handle on the shared state.
pub fn build_with_state(config: &AppConfig, state: AppState) -> Result<Router> {

    let allowed_origins: Vec<HeaderValue> = config
        .cors
        .allowed_origins
        .iter()
        .map(|origin| {
            origin.parse::<HeaderValue>().map_err(|_| {
                AppError::ConfigError(format!("Invalid CORS origin: {}", origin))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([http::header::CONTENT_TYPE])
        .allow_origin(allowed_origins);

    if !config.assets.dir.is_dir() {
        tracing::warn!(
            "Assets directory {} not found, static files will return 404",
            config.assets.dir.display()
        );
    }

    let app = routes::create_router()
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ))
        .merge(routes::health_router())
        .fallback_service(ServeDir::new(&config.assets.dir))
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(cors)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}
