use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::todo_service::TodoError;
use crate::domain::todo::Todo;

/// JSON envelope shared by every endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub todo: Option<Todo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub todos: Option<Vec<Todo>>,
}

impl ApiResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self { success: true, message: message.into(), todo: None, todos: None }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self { success: false, ..Self::ok(message) }
    }

    pub fn with_todo(mut self, todo: Todo) -> Self {
        self.todo = Some(todo);
        self
    }

    pub fn with_todos(mut self, todos: Vec<Todo>) -> Self {
        self.todos = Some(todos);
        self
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid Request")]
    MalformedRequest,
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Todo Not Found")]
    NotFound,
    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedRequest => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<TodoError> for ApiError {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::NotFound(_) => ApiError::NotFound,
            TodoError::Store(e) => ApiError::Internal(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(err) = &self {
            tracing::error!(error = %err, "request failed");
        }
        (self.status(), axum::Json(ApiResponse::failure(self.to_string()))).into_response()
    }
}
