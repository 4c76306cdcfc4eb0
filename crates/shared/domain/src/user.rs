//! User domain entity and related types.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::DomainError;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    /// Creation timestamp, assigned by the store
    pub active_since: DateTime<Utc>,
}

/// User creation payload as submitted by a client.
///
/// Both fields are optional so that a missing key and an empty object are
/// rejected by validation instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateUser {
    /// Display name
    #[cfg_attr(feature = "openapi", schema(example = "Luis Alcantara"))]
    pub username: Option<String>,
    /// Email address, unique across users
    #[cfg_attr(feature = "openapi", schema(example = "luisalcantara@upeu.edu.pe"))]
    pub email: Option<String>,
}

impl CreateUser {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            email: Some(email.into()),
        }
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

fn required(field: &'static str) -> ValidationError {
    let mut error = ValidationError::new("required");
    error.message = Some(Cow::Owned(format!("{} is required", field)));
    error
}

impl Validate for CreateUser {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if is_blank(self.username.as_deref()) {
            errors.add("username", required("username"));
        }
        if is_blank(self.email.as_deref()) {
            errors.add("email", required("email"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Validated user creation data, ready to be persisted.
///
/// Values are trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    username: String,
    email: String,
}

impl NewUser {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Split into `(username, email)`.
    pub fn into_parts(self) -> (String, String) {
        (self.username, self.email)
    }
}

impl TryFrom<CreateUser> for NewUser {
    type Error = DomainError;

    fn try_from(payload: CreateUser) -> Result<Self, Self::Error> {
        payload.validate().map_err(|e| {
            let mut fields: Vec<String> = e
                .field_errors()
                .into_iter()
                .map(|(field, _)| field.to_string())
                .collect();
            fields.sort();
            DomainError::invalid_payload(format!("missing {}", fields.join(", ")))
        })?;

        match (payload.username, payload.email) {
            (Some(username), Some(email)) => Ok(Self {
                username: username.trim().to_string(),
                email: email.trim().to_string(),
            }),
            _ => Err(DomainError::invalid_payload("missing fields")),
        }
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserResponse {
    /// Unique user identifier
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: i32,
    /// Display name
    #[cfg_attr(feature = "openapi", schema(example = "Luis Alcantara"))]
    pub username: String,
    /// Email address
    #[cfg_attr(feature = "openapi", schema(example = "luisalcantara@upeu.edu.pe"))]
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}
