use axum::{
    extract::{Request, State},
    http::{HeaderValue, header},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::AppState;

pub const SESSION_COOKIE: &str = "vitrine.sid";

/// Identifies the browser session a request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub id: Uuid,
    /// The request carried no session cookie; the id is only offered back.
    pub is_new: bool,
}

fn session_from_cookies(req: &Request) -> Option<Uuid> {
    req.headers()
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value).ok())
}

/// Resolves the session, drains its pending flash messages into the request
/// and issues a session cookie on first contact.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let existing = session_from_cookies(&req);
    let session = Session {
        id: existing.unwrap_or_else(Uuid::new_v4),
        is_new: existing.is_none(),
    };

    let messages = state.flash.take(session.id);
    req.extensions_mut().insert(session);
    req.extensions_mut().insert(messages);

    let mut response = next.run(req).await;

    if session.is_new {
        let cookie = format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax",
            SESSION_COOKIE, session.id
        );
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(e) => tracing::warn!("Failed to build session cookie: {}", e),
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn reads_session_among_other_cookies() {
        let id = Uuid::new_v4();
        let req = axum::http::Request::builder()
            .header(header::COOKIE, format!("theme=dark; {}={}", SESSION_COOKIE, id))
            .body(Body::empty())
            .unwrap();

        assert_eq!(session_from_cookies(&req), Some(id));
    }

    #[test]
    fn ignores_malformed_session_cookie() {
        let req = axum::http::Request::builder()
            .header(header::COOKIE, format!("{}=not-a-uuid", SESSION_COOKIE))
            .body(Body::empty())
            .unwrap();

        assert_eq!(session_from_cookies(&req), None);
    }
}
