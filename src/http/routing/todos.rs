use axum::{extract::State, handler::Handler, middleware::from_fn, routing::get, Router, Json};
use axum::http::StatusCode;

use crate::{
    application::todo_service::TodoService,
    domain::todo::{CreateTodo, UpdateTodo},
    http::{
        auth::require_bearer,
        extract::{TodoPath, ValidJson},
        types::{ApiError, ApiResponse},
    },
};

#[derive(Clone)]
pub struct AppState<S: TodoService> { pub service: S }

type ApiResult = Result<(StatusCode, Json<ApiResponse>), ApiError>;

/// Listing, creating and updating require a bearer header; fetching and deleting a single todo do not.
pub fn router<S: TodoService + Clone + Send + Sync + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/todos", get(list_todos::<S>).post(create_todo::<S>).route_layer(from_fn(require_bearer)))
        .route(
            "/todos/:id",
            get(get_todo::<S>)
                .patch(update_todo::<S>.layer(from_fn(require_bearer)))
                .delete(delete_todo::<S>),
        )
        .with_state(state)
}

async fn list_todos<S: TodoService>(State(state): State<AppState<S>>) -> ApiResult {
    let todos = state.service.list().await?;
    let message = if todos.is_empty() { "No Todos Found" } else { "Todo Fetched Successfully" };
    Ok((StatusCode::OK, Json(ApiResponse::ok(message).with_todos(todos))))
}

async fn create_todo<S: TodoService>(State(state): State<AppState<S>>, ValidJson(payload): ValidJson<CreateTodo>) -> ApiResult {
    let todo = state.service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok("Todo Added Successfully").with_todo(todo))))
}

async fn get_todo<S: TodoService>(State(state): State<AppState<S>>, TodoPath(id): TodoPath) -> ApiResult {
    let todo = state.service.get(id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::ok("Todo Fetched Successfully").with_todo(todo))))
}

async fn update_todo<S: TodoService>(State(state): State<AppState<S>>, TodoPath(id): TodoPath, ValidJson(payload): ValidJson<UpdateTodo>) -> ApiResult {
    let todo = state.service.update(id, payload).await?;
    Ok((StatusCode::OK, Json(ApiResponse::ok("Todo Updated Successfully").with_todo(todo))))
}

async fn delete_todo<S: TodoService>(State(state): State<AppState<S>>, TodoPath(id): TodoPath) -> ApiResult {
    state.service.delete(id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::ok("Todo Deleted Successfully"))))
}
