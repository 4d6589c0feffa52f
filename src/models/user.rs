use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::JsonBody;
use crate::error::{AppError, AppResult};

/// `name` and `email` are JSON values because a created user echoes the
/// request input verbatim, whatever its type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: u32,
    pub name: Value,
    pub email: Value,
}

impl User {
    fn sample(id: u32, name: &str, email: &str) -> Self {
        Self {
            id,
            name: Value::from(name),
            email: Value::from(email),
        }
    }
}

/// Fixed sample set, rebuilt on every call.
pub fn sample_users() -> Vec<User> {
    vec![
        User::sample(1, "John Doe", "john@example.com"),
        User::sample(2, "Jane Smith", "jane@example.com"),
    ]
}

// ── Request payload ───────────────────────────────────────────────────────────

/// Permissive decode of a create-user body. `null` counts as absent.
#[derive(Debug, Default, Deserialize)]
pub struct CreateUser {
    pub name: Option<Value>,
    pub email: Option<Value>,
}

impl CreateUser {
    pub fn from_body(body: &JsonBody) -> Self {
        serde_json::from_value(Value::Object(body.clone())).unwrap_or_default()
    }

    /// Builds the record that would be stored as `id`.
    pub fn into_user(self, id: u32) -> AppResult<User> {
        match (self.name, self.email) {
            (Some(name), Some(email)) => Ok(User { id, name, email }),
            _ => Err(AppError::Validation("Name and email are required")),
        }
    }
}
