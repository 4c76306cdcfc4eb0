//! HTML index handlers.

use axum::{
    extract::{rejection::FormRejection, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};

use common::{AppError, AppResult};
use domain::CreateUser;

use crate::api::state::AppState;
use crate::api::views::render_index;

/// Create index routes
pub fn index_routes() -> Router<AppState> {
    Router::new().route("/", get(index).post(add_user))
}

/// Render all users as HTML
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let users = state.user_service.list_users().await?;
    Ok(Html(render_index(&users, None)))
}

/// Add a user from the HTML form, then redirect back to the listing
pub async fn add_user(
    State(state): State<AppState>,
    form: Result<Form<CreateUser>, FormRejection>,
) -> AppResult<Response> {
    let result = match form {
        Ok(Form(payload)) => state.user_service.create_user(payload).await,
        Err(rejection) => {
            tracing::debug!("Rejected form body: {}", rejection.body_text());
            Err(AppError::InvalidPayload)
        }
    };

    match result {
        Ok(_) => Ok(Redirect::to("/").into_response()),
        Err(e) if e.is_client_error() => {
            let users = state.user_service.list_users().await?;
            let page = render_index(&users, Some(&e.user_message()));
            Ok((e.status(), Html(page)).into_response())
        }
        Err(e) => Err(e),
    }
}
