//! Admin service for metrics reporting and development resets.

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Platform, error::AppError, service::metrics::VisitCounter,
    service::user::UserService,
};

/// Service providing admin operations over the visit counter and user store.
pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
    visits: &'a VisitCounter,
    platform: Platform,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection, visits: &'a VisitCounter, platform: Platform) -> Self {
        Self {
            db,
            visits,
            platform,
        }
    }

    /// Renders the admin metrics page with the current visit count.
    pub fn metrics_page(&self) -> String {
        format!(
            "<html>
  <body>
    <h1>Welcome, Chirpy Admin</h1>
    <p>Chirpy has been visited {} times!</p>
  </body>
</html>",
            self.visits.load()
        )
    }

    /// Deletes all users and zeroes the visit counter.
    ///
    /// Only permitted on the development platform.
    ///
    /// # Returns
    /// - `Ok(())` - Users deleted and counter reset
    /// - `Err(AppError::Forbidden)` - Not running on the development platform
    /// - `Err(AppError::DbErr)` - Database error while deleting users
    pub async fn reset(&self) -> Result<(), AppError> {
        if self.platform != Platform::Dev {
            return Err(AppError::Forbidden(
                "Reset is only allowed in dev environment".to_string(),
            ));
        }

        UserService::new(self.db).delete_all_users().await?;
        self.visits.reset();

        tracing::info!("Reset users and visit counter");

        Ok(())
    }
}
