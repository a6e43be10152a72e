use axum::{
    Extension, Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::{
    AppState,
    error::{AppError, Result},
    flash::FlashKind,
    middleware::Session,
    models::{Product, ProductForm},
    registry::{NOT_FOUND_MESSAGE, RegistryError},
    utils::{extractors::FormOrJson, parse::parse_int_prefix},
};

const CREATED_MESSAGE: &str = "Produto salvo com sucesso!";
const CREATE_INVALID_MESSAGE: &str = "Corpo da requisição inválido.";
const REMOVED_MESSAGE: &str = "Produto removido com sucesso!";

fn product_id(raw: &str) -> Result<u32> {
    parse_int_prefix(raw).ok_or_else(|| AppError::NotFound(NOT_FOUND_MESSAGE.to_string()))
}

/// Unreadable bodies propagate; a missing or unusable one counts as empty.
fn form_input(
    body: std::result::Result<FormOrJson<ProductForm>, AppError>,
) -> Result<ProductForm> {
    match body {
        Ok(FormOrJson(form)) => Ok(form),
        Err(AppError::BadRequest(_)) => Ok(ProductForm::default()),
        Err(e) => Err(e),
    }
}

/// Queues a flash message unless the client has not kept a session cookie,
/// in which case nobody would ever read it back.
fn notify(state: &AppState, session: Session, kind: FlashKind, message: &str) {
    if session.is_new {
        tracing::debug!("Skipping flash for request without session cookie");
        return;
    }
    state.flash.push(session.id, kind, message);
}

fn redirect(location: &'static str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.registry.list())
}

pub async fn get_product(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
) -> Result<Json<Product>> {
    let found =
        product_id(&id).and_then(|id| state.registry.find_by_id(id).map_err(AppError::from));

    match found {
        Ok(product) => Ok(Json(product)),
        Err(e) => {
            if matches!(e, AppError::NotFound(_)) {
                notify(&state, session, FlashKind::Error, NOT_FOUND_MESSAGE);
            }
            Err(e)
        }
    }
}

pub async fn create_product(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    body: std::result::Result<FormOrJson<ProductForm>, AppError>,
) -> Result<Response> {
    let input = form_input(body)?.into_input();

    match state.registry.create(input) {
        Ok(_) => {
            notify(&state, session, FlashKind::Success, CREATED_MESSAGE);
            Ok(redirect("/"))
        }
        Err(RegistryError::InvalidInput) => {
            notify(&state, session, FlashKind::Error, CREATE_INVALID_MESSAGE);
            Ok(redirect("/novo-produto"))
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: std::result::Result<FormOrJson<ProductForm>, AppError>,
) -> Result<Json<Product>> {
    // the body is read before the id is looked at
    let input = form_input(body)?.into_input();
    let id = product_id(&id)?;

    let updated = state.registry.update(id, input)?;

    Ok(Json(updated))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = product_id(&id)?;

    state.registry.delete(id)?;
    notify(&state, session, FlashKind::Success, REMOVED_MESSAGE);

    Ok(StatusCode::NO_CONTENT)
}
