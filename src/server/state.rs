//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Visit counter for the static file server
//! - Chirp validation rules
//! - Deployment platform, which gates admin resets

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{
    config::{ChirpRules, Platform},
    service::metrics::VisitCounter,
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `VisitCounter` wraps an `Arc` around its atomic
/// - `Arc<ChirpRules>` is a reference-counted pointer
/// - `Platform` is `Copy`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Count of requests served by the static file server.
    ///
    /// Incremented by middleware on `/app`, read by the admin metrics page and zeroed
    /// by the admin reset.
    pub visits: VisitCounter,

    /// Length limit and forbidden words applied to chirps.
    pub chirp_rules: Arc<ChirpRules>,

    /// Platform the server runs on.
    pub platform: Platform,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `visits` - Visit counter shared with the file server middleware
    /// - `chirp_rules` - Chirp validation rules
    /// - `platform` - Deployment platform
    pub fn new(
        db: DatabaseConnection,
        visits: VisitCounter,
        chirp_rules: ChirpRules,
        platform: Platform,
    ) -> Self {
        Self {
            db,
            visits,
            chirp_rules: Arc::new(chirp_rules),
            platform,
        }
    }
}
