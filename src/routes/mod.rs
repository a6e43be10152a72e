mod health;
mod pages;
mod products;

use axum::{Router, routing::get};

use crate::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index))
        .route("/novo-produto", get(pages::new_product))
        .route(
            "/produtos",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/produtos/{id}",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
}

pub fn health_router() -> Router<AppState> {
    Router::new().route("/health", get(health::health_check))
}
