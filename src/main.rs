mod model;
mod server;

use crate::server::{
    config::Config, error::AppError, router, service::metrics::VisitCounter, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    tracing::info!("Starting server");

    let state = AppState::new(
        db,
        VisitCounter::new(),
        config.chirp_rules.clone(),
        config.platform,
    );
    let app = router::app(state, &config.fileserver_root);

    let listener = startup::bind_listener(&config).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
