use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
};

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Report that the server is up.
///
/// # Returns
/// - `200 OK` - Plain text body `OK`
#[utoipa::path(
    get,
    path = "/api/healthz",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Server is up", body = String, content_type = "text/plain")
    ),
)]
pub async fn healthz() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        "OK",
    )
}
