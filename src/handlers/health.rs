use axum::http::{Method, StatusCode};
use chrono::{DateTime, Local};
use serde::Serialize;

use crate::{
    config::ServerInfo,
    error::{AppError, AppResult},
    response::Reply,
};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Serialize)]
pub struct HealthReport<'a> {
    pub success: bool,
    pub status: &'static str,
    pub timestamp: String,
    pub server: &'a ServerInfo,
}

pub fn handle(method: &Method, server: &ServerInfo) -> AppResult<Reply> {
    if *method != Method::GET {
        return Err(AppError::MethodNotAllowed);
    }
    Reply::json(StatusCode::OK, &report(server, Local::now()))
}

fn report(server: &ServerInfo, now: DateTime<Local>) -> HealthReport<'_> {
    HealthReport {
        success: true,
        status: "healthy",
        timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
        server,
    }
}
