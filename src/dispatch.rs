//! Request dispatcher: path normalization, lenient body parsing and the
//! static route table. Everything in here is a pure function of the request.

use std::collections::HashMap;

use axum::http::{Method, StatusCode};

use crate::{
    config::ServerInfo,
    error::AppError,
    handlers,
    models::JsonBody,
    response::Reply,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Root,
    Users,
    Products,
    Health,
}

impl Route {
    /// Exact match against an already normalized path.
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Route::Root),
            "/api/users" => Some(Route::Users),
            "/api/products" => Some(Route::Products),
            "/api/health" => Some(Route::Health),
            _ => None,
        }
    }
}

/// Empty and `/` become `/`; otherwise at most one trailing slash is dropped.
pub fn normalize_path(raw: &str) -> &str {
    if raw.is_empty() || raw == "/" {
        return "/";
    }
    raw.strip_suffix('/').unwrap_or(raw)
}

/// Anything that is not a JSON object (including garbage) reads as `{}`.
pub fn parse_body(raw: &[u8]) -> JsonBody {
    if raw.is_empty() {
        return JsonBody::new();
    }
    match serde_json::from_slice(raw) {
        Ok(serde_json::Value::Object(map)) => map,
        _ => JsonBody::new(),
    }
}

pub fn dispatch(
    method: &Method,
    path: &str,
    raw_body: &[u8],
    query: &HashMap<String, String>,
    server: &ServerInfo,
) -> Reply {
    if *method == Method::OPTIONS {
        return Reply::empty(StatusCode::OK);
    }

    let Some(route) = Route::from_path(normalize_path(path)) else {
        return AppError::NotFound("Endpoint not found").into_reply();
    };

    let body = parse_body(raw_body);
    let result = match route {
        Route::Root => handlers::root::handle(method),
        Route::Users => handlers::users::handle(method, &body),
        Route::Products => handlers::products::handle(method, &body, query),
        Route::Health => handlers::health::handle(method, server),
    };

    result.unwrap_or_else(AppError::into_reply)
}
