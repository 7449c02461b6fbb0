use crate::model::HealthResponse;
use axum::Json;

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Landing route. Unknown short codes are redirected here.
pub async fn home_handler() -> &'static str {
    "quicklink: POST /links to shorten, GET /stats for statistics\n"
}
