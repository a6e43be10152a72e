use axum::{
    Extension,
    extract::{OriginalUri, State},
    response::Html,
};

use crate::{
    AppState,
    error::Result,
    flash::FlashMessages,
    views::{self, INDEX_TEMPLATE, NEW_PRODUCT_TEMPLATE, ViewContext},
};

fn current_url(uri: &OriginalUri) -> String {
    uri.0
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.0.path().to_string())
}

pub async fn index(
    State(state): State<AppState>,
    Extension(flash): Extension<FlashMessages>,
    uri: OriginalUri,
) -> Result<Html<String>> {
    let ctx = ViewContext::new("Minha página", current_url(&uri), flash)
        .with_products(state.registry.list());

    Ok(Html(views::render(INDEX_TEMPLATE, &ctx)?))
}

pub async fn new_product(
    Extension(flash): Extension<FlashMessages>,
    uri: OriginalUri,
) -> Result<Html<String>> {
    let ctx = ViewContext::new("Novo produto", current_url(&uri), flash);

    Ok(Html(views::render(NEW_PRODUCT_TEMPLATE, &ctx)?))
}
