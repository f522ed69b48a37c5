use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        chirp::{CleanedChirpDto, CreateChirpDto, ValidateChirpDto},
        user::{CreateUserDto, UserDto},
    },
    server::{
        controller::{admin, chirp, health, user},
        middleware::metrics::count_visits,
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthz,
        admin::metrics,
        admin::reset,
        user::create_user,
        chirp::validate_chirp,
        chirp::create_chirp,
    ),
    components(schemas(
        ErrorDto,
        CreateUserDto,
        UserDto,
        ValidateChirpDto,
        CreateChirpDto,
        CleanedChirpDto,
    )),
    tags(
        (name = "health", description = "Liveness"),
        (name = "admin", description = "Metrics and development resets"),
        (name = "user", description = "User registration"),
        (name = "chirp", description = "Chirp validation and censorship"),
    )
)]
pub struct ApiDoc;

/// JSON API and admin routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/healthz", get(health::healthz))
        .route("/api/users", post(user::create_user))
        .route("/api/validate_chirp", post(chirp::validate_chirp))
        .route("/api/chirps", post(chirp::create_chirp))
        .route("/admin/metrics", get(admin::metrics))
        .route("/admin/reset", post(admin::reset))
}

/// Static files under `/app`, counted towards the admin metrics.
pub fn file_server(state: &AppState, root: &str) -> Router<AppState> {
    Router::new()
        .nest_service("/app", ServeDir::new(root))
        .layer(middleware::from_fn_with_state(
            state.visits.clone(),
            count_visits,
        ))
}

/// Assembles the complete application.
pub fn app(state: AppState, fileserver_root: &str) -> Router {
    router()
        .merge(file_server(&state, fileserver_root))
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
