use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::server::service::metrics::VisitCounter;

/// Counts every request passing through before handing it on.
///
/// Applied to the static file server so the admin page can report visits.
pub async fn count_visits(
    State(visits): State<VisitCounter>,
    request: Request,
    next: Next,
) -> Response {
    let hits = visits.increment();
    tracing::trace!(hits, path = %request.uri().path(), "File server visit");

    next.run(request).await
}
