//! OpenAPI documentation.

use utoipa::OpenApi;

use domain::{CreateUser, UserResponse};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::user_handler::ping,
        crate::api::handlers::user_handler::create_user,
        crate::api::handlers::user_handler::get_user,
        crate::api::handlers::user_handler::list_users,
    ),
    components(schemas(CreateUser, UserResponse)),
    tags(
        (name = "Users", description = "User directory endpoints"),
    )
)]
pub struct ApiDoc;
