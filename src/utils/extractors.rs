use axum::{
    Form, Json,
    body::Bytes,
    extract::{
        FromRequest, Request,
        rejection::{FormRejection, JsonRejection},
    },
    http::header,
};
use serde::de::DeserializeOwned;

use crate::{error::AppError, registry::INVALID_BODY_MESSAGE};

/// Accepts either a JSON or a URL-encoded body, chosen by `Content-Type`.
///
/// Rejects with `AppError::BadRequest` when the body is absent, has an
/// unsupported content type or does not fit `T`. A body that cannot be read
/// (over the size limit, broken stream) or is not valid JSON rejects with
/// `AppError::InternalError`.
#[derive(Debug, Clone)]
pub struct FormOrJson<T>(pub T);

fn is_json(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|content_type| content_type.trim_start().starts_with("application/json"))
        .unwrap_or(false)
}

fn unusable_body() -> AppError {
    AppError::BadRequest(INVALID_BODY_MESSAGE.to_string())
}

fn json_failure(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonDataError(e) => {
            tracing::debug!("JSON body does not match the expected fields: {}", e);
            unusable_body()
        }
        other => AppError::InternalError(format!("Malformed JSON body: {}", other)),
    }
}

fn form_failure(rejection: FormRejection) -> AppError {
    match rejection {
        FormRejection::InvalidFormContentType(_) => unusable_body(),
        FormRejection::FailedToDeserializeForm(e) => {
            tracing::debug!("Form body does not match the expected fields: {}", e);
            unusable_body()
        }
        FormRejection::FailedToDeserializeFormBody(e) => {
            tracing::debug!("Form body does not match the expected fields: {}", e);
            unusable_body()
        }
        other => AppError::InternalError(format!("Failed to read form body: {}", other)),
    }
}

impl<T, S> FromRequest<S> for FormOrJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_json(&req) {
            let bytes = Bytes::from_request(req, state)
                .await
                .map_err(|e| AppError::InternalError(format!("Failed to read JSON body: {}", e)))?;

            // an empty JSON body carries no fields, like a missing one
            if bytes.is_empty() {
                return Err(unusable_body());
            }

            let Json(value) = Json::<T>::from_bytes(&bytes).map_err(json_failure)?;
            Ok(Self(value))
        } else {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(form_failure)?;
            Ok(Self(value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Fields {
        nome: Option<String>,
    }

    fn request(content_type: Option<&str>, body: &'static str) -> Request {
        let mut builder = axum::http::Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        builder.body(Body::from(body)).unwrap()
    }

    async fn extract(req: Request) -> Result<FormOrJson<Fields>, AppError> {
        FormOrJson::<Fields>::from_request(req, &()).await
    }

    #[tokio::test]
    async fn reads_json_and_form_bodies() {
        let json = extract(request(Some("application/json"), r#"{"nome":"Caneta"}"#))
            .await
            .unwrap();
        assert_eq!(json.0.nome.as_deref(), Some("Caneta"));

        let form = extract(request(
            Some("application/x-www-form-urlencoded"),
            "nome=Caneta",
        ))
        .await
        .unwrap();
        assert_eq!(form.0.nome.as_deref(), Some("Caneta"));
    }

    #[tokio::test]
    async fn malformed_json_is_an_internal_error() {
        let err = extract(request(Some("application/json"), "{not json"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InternalError(_)));
    }

    #[tokio::test]
    async fn missing_content_type_is_a_bad_request() {
        let err = extract(request(None, "nome=Caneta")).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn mismatched_json_shape_is_a_bad_request() {
        let err = extract(request(Some("application/json"), "[1, 2]"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
