//! User service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParam, User},
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user after checking the email.
    ///
    /// # Arguments
    /// - `param` - Parameters containing the new user's email
    ///
    /// # Returns
    /// - `Ok(User)` - Newly created user
    /// - `Err(AppError::BadRequest)` - Email is empty
    /// - `Err(AppError::Conflict)` - A user with this email already exists
    /// - `Err(AppError::DbErr)` - Database error during query or insert
    pub async fn create_user(&self, param: CreateUserParam) -> Result<User, AppError> {
        if param.email.trim().is_empty() {
            return Err(AppError::BadRequest("Email is required".to_string()));
        }

        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&param.email).await?.is_some() {
            return Err(AppError::Conflict(
                "User with this email already exists".to_string(),
            ));
        }

        let user = user_repo.create(param).await?;

        tracing::info!(user_id = %user.id, "Created user");

        Ok(user)
    }

    /// Deletes every user.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted users
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete_all_users(&self) -> Result<u64, AppError> {
        let deleted = UserRepository::new(self.db).delete_all().await?;

        tracing::info!("Deleted {} users", deleted);

        Ok(deleted)
    }
}
