use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
};

use crate::{
    model::api::ErrorDto,
    server::{error::AppError, service::admin::AdminService, state::AppState},
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// Render the admin metrics page.
///
/// # Arguments
/// - `state` - Application state containing the visit counter
///
/// # Returns
/// - `200 OK` - HTML page reporting how many times the file server was visited
#[utoipa::path(
    get,
    path = "/admin/metrics",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "HTML page reporting file server visits", body = String, content_type = "text/html")
    ),
)]
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    let page = AdminService::new(&state.db, &state.visits, state.platform).metrics_page();

    Html(page)
}

/// Reset the server to a clean state.
///
/// Deletes every user and zeroes the visit counter. Only available when the server
/// runs on the `dev` platform.
///
/// # Arguments
/// - `state` - Application state containing the database connection, counter and platform
///
/// # Returns
/// - `200 OK` - Users deleted and counter reset
/// - `403 Forbidden` - Server is not running on the dev platform
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/admin/reset",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "All users deleted and visit counter reset"),
        (status = 403, description = "Server is not running on the dev platform", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    AdminService::new(&state.db, &state.visits, state.platform)
        .reset()
        .await?;

    Ok(StatusCode::OK)
}
