//! Bearer-shape guard for the write and list routes.
//!
//! Only the header's shape is checked. The token is never verified; it is passed
//! downstream in a `token` request header and as a [`BearerToken`] extension.
//!
//! ```rust,ignore
//! Router::new()
//!     .route("/todos", get(list_todos).route_layer(from_fn(require_bearer)))
//! ```

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use http::{header::AUTHORIZATION, HeaderName, HeaderValue};

use super::types::ApiError;

pub const TOKEN_HEADER: HeaderName = HeaderName::from_static("token");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerToken(pub String);

/// Splits `Authorization` on its first space and returns the trimmed token.
pub fn bearer_token(value: Option<&HeaderValue>) -> Result<&str, ApiError> {
    let raw = value
        .ok_or(ApiError::Unauthorized)?
        .to_str()
        .map_err(|_| ApiError::Unauthorized)?;
    let (scheme, token) = raw.split_once(' ').ok_or(ApiError::Unauthorized)?;
    if scheme != "Bearer" {
        return Err(ApiError::Unauthorized);
    }
    match token.trim() {
        "" => Err(ApiError::Unauthorized),
        token => Ok(token),
    }
}

pub async fn require_bearer(mut request: Request, next: Next) -> Response {
    let token = match bearer_token(request.headers().get(AUTHORIZATION)) {
        Ok(token) => token.to_owned(),
        Err(e) => {
            tracing::debug!(path = %request.uri().path(), "rejected request without bearer token");
            return e.into_response();
        }
    };
    let Ok(value) = HeaderValue::from_str(&token) else {
        return ApiError::Unauthorized.into_response();
    };
    request.headers_mut().insert(TOKEN_HEADER, value);
    request.extensions_mut().insert(BearerToken(token));
    next.run(request).await
}
