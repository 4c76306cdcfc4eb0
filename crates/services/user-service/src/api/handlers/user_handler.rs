//! User JSON handlers.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::Json,
    routing::get,
    Router,
};

use common::{AppError, AppResult};
use domain::{user_added_message, CreateUser, UserResponse};

use crate::api::extractors::PayloadJson;
use crate::api::response::{ApiResponse, Created, UserList};
use crate::api::state::AppState;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/ping", get(ping))
        .route("/:id", get(get_user))
}

/// Liveness check
#[utoipa::path(
    get,
    path = "/users/ping",
    tag = "Users",
    responses(
        (status = 200, description = "Service is alive")
    )
)]
pub async fn ping(State(state): State<AppState>) -> Json<ApiResponse<()>> {
    Json(ApiResponse::message(state.user_service.ping()))
}

/// Add a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User added"),
        (status = 400, description = "Invalid payload or email already exists")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    PayloadJson(payload): PayloadJson<CreateUser>,
) -> AppResult<Created<ApiResponse<()>>> {
    let user = state.user_service.create_user(payload).await?;
    Ok(Created(ApiResponse::message(user_added_message(&user.email))))
}

/// Get a single user
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found"),
        (status = 404, description = "User does not exist")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<ApiResponse<UserResponse>>> {
    // Ids that cannot even be decoded are unknown ids too
    let Path(id) = id.map_err(|_| AppError::UserNotFound)?;
    let user = state.user_service.get_user(&id).await?;
    Ok(Json(ApiResponse::success(UserResponse::from(user))))
}

/// List all users in creation order
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users")
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<ApiResponse<UserList>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(ApiResponse::success(UserList {
        users: users.into_iter().map(UserResponse::from).collect(),
    })))
}
