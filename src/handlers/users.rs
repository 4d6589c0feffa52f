use axum::http::{Method, StatusCode};

use crate::{
    error::{AppError, AppResult},
    models::{sample_users, CreateUser, JsonBody},
    response::{Created, Listing, Reply},
};

pub fn handle(method: &Method, body: &JsonBody) -> AppResult<Reply> {
    match *method {
        Method::GET => list_users(),
        Method::POST => create_user(body),
        _ => Err(AppError::MethodNotAllowed),
    }
}

// ── List ──────────────────────────────────────────────────────────────────────

fn list_users() -> AppResult<Reply> {
    Reply::json(StatusCode::OK, &Listing::new(sample_users()))
}

// ── Create ────────────────────────────────────────────────────────────────────

/// Validates and echoes the new user; the sample set is left untouched.
fn create_user(body: &JsonBody) -> AppResult<Reply> {
    let next_id = sample_users().len() as u32 + 1;
    let user = CreateUser::from_body(body).into_user(next_id)?;

    Reply::json(
        StatusCode::CREATED,
        &Created::new("User created successfully", user),
    )
}
