//! Success response shapes.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use domain::{UserResponse, STATUS_SUCCESS};

/// Standard success envelope: `{"status": "success", "data"?, "message"?}`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: STATUS_SUCCESS,
            data: Some(data),
            message: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_SUCCESS,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// Payload of the user listing
#[derive(Debug, Serialize)]
pub struct UserList {
    pub users: Vec<UserResponse>,
}

/// Created response helper for POST endpoints
pub struct Created<T: Serialize>(pub T);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_response_omits_data() {
        let json = serde_json::to_value(ApiResponse::message("pong!")).unwrap();
        assert_eq!(json, serde_json::json!({"status": "success", "message": "pong!"}));
    }

    #[test]
    fn empty_listing_keeps_users_key() {
        let json = serde_json::to_value(ApiResponse::success(UserList { users: vec![] })).unwrap();
        assert_eq!(json, serde_json::json!({"status": "success", "data": {"users": []}}));
    }
}
