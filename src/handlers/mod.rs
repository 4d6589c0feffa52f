pub mod health;
pub mod products;
pub mod root;
pub mod users;

use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{Method, Uri},
};
use tracing::debug;

use crate::{dispatch, response::Reply, AppState};

/// Catch-all axum handler: every request goes through the dispatcher.
pub async fn serve(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    query: Option<Query<HashMap<String, String>>>,
    body: Bytes,
) -> Reply {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    let reply = dispatch::dispatch(&method, uri.path(), &body, &query, &state.server);

    debug!(
        method = %method,
        path = uri.path(),
        status = reply.status.as_u16(),
        "Dispatched request"
    );

    reply
}
