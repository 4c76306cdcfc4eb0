//! Domain-level constants.
//!
//! Fixed, user-facing messages and the demo data used to seed a fresh
//! database.

// =============================================================================
// Response status markers
// =============================================================================

/// Status marker for successful responses
pub const STATUS_SUCCESS: &str = "success";

/// Status marker for failed responses
pub const STATUS_FAIL: &str = "fail";

// =============================================================================
// Messages
// =============================================================================

/// Liveness acknowledgement
pub const MSG_PONG: &str = "pong!";

/// Create payload was empty, malformed or missing a required field
pub const MSG_INVALID_PAYLOAD: &str = "Invalid payload.";

/// Email is already taken by another user
pub const MSG_DUPLICATE_EMAIL: &str = "this email already exists.";

/// Lookup key was malformed or matched no user
pub const MSG_USER_NOT_FOUND: &str = "user not exists";

/// Confirmation message for a newly added user
pub fn user_added_message(email: &str) -> String {
    format!("{} was added!", email)
}

// =============================================================================
// Seed data
// =============================================================================

/// Demo users inserted by the `seed-db` command, as `(username, email)`.
pub const SEED_USERS: &[(&str, &str)] = &[
    ("Luis Alcantara", "luisalcantara@upeu.edu.pe"),
    ("david", "david@upeu.edu.pe"),
];
