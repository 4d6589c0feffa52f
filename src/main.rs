use std::sync::Arc;

use anyhow::Context;
use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use tracing::info;

mod coerce;
mod config;
mod dispatch;
mod error;
mod handlers;
mod models;
mod response;

use crate::config::{Config, ServerInfo};

/// Shared application state. Read-only; nothing a request does is kept.
#[derive(Clone)]
pub struct AppState {
    pub server: Arc<ServerInfo>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,sample_api=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Sample API  — Rust + Axum           ║");
    info!("║  users · products · health           ║");
    info!("╚══════════════════════════════════════╝");

    let state = AppState {
        server: Arc::new(config.server_info()),
    };

    let app = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Listening on http://{}", addr);
    info!("Quick-start: GET http://{}/ for the endpoint list", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped.");
    Ok(())
}

fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        // Routing is exact-match on a normalized path, so the dispatcher owns it.
        .fallback(handlers::serve)
        // ── Middleware ──────────────────────────────────────────────────────
        // Allowed methods/headers go on every response, not only on preflight.
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections...");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        build_router(AppState {
            server: Arc::new(ServerInfo::default()),
        })
    }

    async fn send(method: Method, uri: &str, body: &str) -> Response {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        app().oneshot(request).await.unwrap()
    }

    async fn json_of(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn unknown_path_is_404_json() {
        let response = send(Method::GET, "/api/orders", "").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
        assert_eq!(json_of(response).await, json!({ "error": "Endpoint not found" }));
    }

    #[tokio::test]
    async fn users_round_trip_does_not_persist() {
        let response = send(Method::POST, "/api/users", r#"{"name":"A","email":"b@c.com"}"#).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(json_of(response).await["data"]["id"], 3);

        let response = send(Method::GET, "/api/users", "").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_of(response).await;
        assert_eq!(body["count"], 2);
        assert_eq!(body["data"].as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn empty_user_body_is_400() {
        let response = send(Method::POST, "/api/users", "{}").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_of(response).await,
            json!({ "error": "Name and email are required" })
        );
    }

    #[tokio::test]
    async fn product_query_parameter() {
        let response = send(Method::GET, "/api/products?id=2", "").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_of(response).await["data"]["name"], "Mouse");

        let response = send(Method::GET, "/api/products?id=999", "").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = send(Method::GET, "/api/products/?id=abc", "").await;
        assert_eq!(json_of(response).await["count"], 3);
    }

    #[tokio::test]
    async fn options_is_empty_200_everywhere() {
        for uri in ["/", "/api/products", "/nowhere"] {
            let request = Request::builder()
                .method(Method::OPTIONS)
                .uri(uri)
                .header(header::ORIGIN, "http://example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap();
            let response = app().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            assert!(bytes.is_empty(), "{uri}");
        }
    }

    #[tokio::test]
    async fn bare_options_is_empty_200() {
        let response = send(Method::OPTIONS, "/nowhere", "").await;
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn every_response_carries_cors_headers() {
        let cases = [
            (Method::GET, "/api/health", StatusCode::OK),
            (Method::POST, "/api/users", StatusCode::BAD_REQUEST),
            (Method::GET, "/api/missing", StatusCode::NOT_FOUND),
            (Method::DELETE, "/api/users", StatusCode::METHOD_NOT_ALLOWED),
        ];
        for (method, uri, expected) in cases {
            let request = Request::builder()
                .method(method)
                .uri(uri)
                .header(header::ORIGIN, "http://example.com")
                .body(Body::empty())
                .unwrap();
            let response = app().oneshot(request).await.unwrap();
            assert_eq!(response.status(), expected, "{uri}");

            let headers = response.headers();
            assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*", "{uri}");
            assert_eq!(
                headers[header::ACCESS_CONTROL_ALLOW_METHODS],
                "GET, POST, PUT, DELETE, OPTIONS",
                "{uri}"
            );
            assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type", "{uri}");
        }
    }

    #[tokio::test]
    async fn cors_headers_without_origin() {
        let response = send(Method::GET, "/api/users", "").await;
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert!(response.headers().contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
    }

    #[tokio::test]
    async fn preflight_lists_allowed_methods_and_headers() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/users")
            .header(header::ORIGIN, "http://example.com")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        let methods = response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS]
            .to_str()
            .unwrap()
            .to_string();
        for m in ["GET", "POST", "PUT", "DELETE", "OPTIONS"] {
            assert!(methods.contains(m), "{methods}");
        }
        let allowed = response.headers()[header::ACCESS_CONTROL_ALLOW_HEADERS]
            .to_str()
            .unwrap()
            .to_ascii_lowercase();
        assert!(allowed.contains("content-type"));
    }

    #[tokio::test]
    async fn root_is_html() {
        let response = send(Method::GET, "/", "").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let page = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(page.contains("<title>Sample API</title>"));
    }

    #[tokio::test]
    async fn health_is_healthy() {
        let response = send(Method::GET, "/api/health", "").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_of(response).await;
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn wrong_method_is_405() {
        let response = send(Method::DELETE, "/api/products", "").await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(json_of(response).await["error"], "Method not allowed");
    }
}
