use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::AppResult;

pub const JSON: &str = "application/json";
pub const HTML: &str = "text/html; charset=utf-8";

/// A fully rendered response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Empty,
    Json(Vec<u8>),
    Html(String),
}

/// Status plus rendered body; what the dispatcher hands back for every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: StatusCode,
    pub payload: Payload,
}

impl Reply {
    pub fn empty(status: StatusCode) -> Self {
        Self {
            status,
            payload: Payload::Empty,
        }
    }

    pub fn html(status: StatusCode, page: String) -> Self {
        Self {
            status,
            payload: Payload::Html(page),
        }
    }

    pub fn json<T: Serialize>(status: StatusCode, body: &T) -> AppResult<Self> {
        Ok(Self {
            status,
            payload: Payload::Json(serde_json::to_vec(body)?),
        })
    }

    /// Infallible variant for bodies that are already a `serde_json::Value`.
    pub fn json_value(status: StatusCode, body: &serde_json::Value) -> Self {
        Self {
            status,
            payload: Payload::Json(body.to_string().into_bytes()),
        }
    }

    pub fn content_type(&self) -> Option<&'static str> {
        match self.payload {
            Payload::Empty => None,
            Payload::Json(_) => Some(JSON),
            Payload::Html(_) => Some(HTML),
        }
    }

    pub fn body(&self) -> &[u8] {
        match &self.payload {
            Payload::Empty => &[],
            Payload::Json(bytes) => bytes,
            Payload::Html(page) => page.as_bytes(),
        }
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        let content_type = self.content_type();
        let mut response = match self.payload {
            Payload::Empty => self.status.into_response(),
            Payload::Json(bytes) => (self.status, bytes).into_response(),
            Payload::Html(page) => (self.status, page).into_response(),
        };
        if let Some(ct) = content_type {
            response
                .headers_mut()
                .insert(header::CONTENT_TYPE, HeaderValue::from_static(ct));
        }
        response
    }
}

// ── Envelopes ─────────────────────────────────────────────────────────────────

/// `{success, data: [...], count}`
#[derive(Debug, Serialize)]
pub struct Listing<T> {
    pub success: bool,
    pub data: Vec<T>,
    pub count: usize,
}

impl<T> Listing<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

/// `{success, data: {...}}`
#[derive(Debug, Serialize)]
pub struct Single<T> {
    pub success: bool,
    pub data: T,
}

impl<T> Single<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// `{success, message, data: {...}}`
#[derive(Debug, Serialize)]
pub struct Created<T> {
    pub success: bool,
    pub message: &'static str,
    pub data: T,
}

impl<T> Created<T> {
    pub fn new(message: &'static str, data: T) -> Self {
        Self {
            success: true,
            message,
            data,
        }
    }
}
