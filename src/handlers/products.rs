use std::collections::HashMap;

use axum::http::{Method, StatusCode};

use crate::{
    coerce,
    error::{AppError, AppResult},
    models::{sample_products, CreateProduct, JsonBody},
    response::{Created, Listing, Reply, Single},
};

pub fn handle(
    method: &Method,
    body: &JsonBody,
    query: &HashMap<String, String>,
) -> AppResult<Reply> {
    match *method {
        Method::GET => match requested_id(query) {
            Some(id) => get_product(id),
            None => list_products(),
        },
        Method::POST => create_product(body),
        _ => Err(AppError::MethodNotAllowed),
    }
}

/// `?id=` coerced to an integer. Zero, including anything non-numeric, means
/// "no id" and the full list is returned instead of an error.
fn requested_id(query: &HashMap<String, String>) -> Option<i64> {
    query
        .get("id")
        .map(|raw| coerce::str_to_i64(raw))
        .filter(|&id| id != 0)
}

// ── List ──────────────────────────────────────────────────────────────────────

fn list_products() -> AppResult<Reply> {
    Reply::json(StatusCode::OK, &Listing::new(sample_products()))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

fn get_product(id: i64) -> AppResult<Reply> {
    let product = sample_products()
        .into_iter()
        .find(|p| i64::from(p.id) == id)
        .ok_or(AppError::NotFound("Product not found"))?;

    Reply::json(StatusCode::OK, &Single::new(product))
}

// ── Create ────────────────────────────────────────────────────────────────────

fn create_product(body: &JsonBody) -> AppResult<Reply> {
    let next_id = sample_products().len() as u32 + 1;
    let product = CreateProduct::from_body(body).into_product(next_id)?;

    Reply::json(
        StatusCode::CREATED,
        &Created::new("Product created successfully", product),
    )
}
