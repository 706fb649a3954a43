//! Routes served by the scaffold server.

use axum::extract::Query;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::debug;

/// Builds the application router.
pub fn router() -> Router {
    Router::new().route("/", get(hello))
}

#[derive(Debug, Deserialize)]
struct HelloParams {
    name: Option<String>,
}

/// Returns a JSON-encoded greeting, personalized via `?name=`.
async fn hello(Query(params): Query<HelloParams>) -> Json<String> {
    let name = params.name.as_deref().unwrap_or("World");
    debug!(%name, "serving hello");
    Json(format!("Hello, {name}!"))
}
