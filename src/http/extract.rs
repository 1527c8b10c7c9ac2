//! Request decoding for the todo routes.
//!
//! Both extractors collapse every framework rejection into
//! [`ApiError::MalformedRequest`] so clients always get the JSON envelope with a 400.

use axum::async_trait;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::types::ApiError;
use crate::domain::todo::TodoId;

/// JSON body that rejects with `400 Invalid Request` instead of axum's 415/422 responses.
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(%rejection, "rejected request body");
                Err(ApiError::MalformedRequest)
            }
        }
    }
}

/// `:id` path segment parsed as a signed integer.
pub struct TodoPath(pub TodoId);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for TodoPath {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::MalformedRequest)?;
        raw.parse().map(TodoPath).map_err(|_| ApiError::MalformedRequest)
    }
}
