use axum::Json;
use serde_json::{Value, json};

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Landing message")
    )
)]
pub async fn home() -> Json<Value> {
    Json(json!({ "message": "Home Page :-)" }))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy")
    )
)]
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "library-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
