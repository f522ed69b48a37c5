//! User fixtures for creating in-memory test data.

use chrono::{DateTime, TimeZone, Utc};
use entity::user;
use uuid::Uuid;

/// Default test email.
pub const DEFAULT_EMAIL: &str = "walt@breakingbad.com";

/// Fixed creation timestamp so fixture models compare equal across calls.
fn default_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Creates a user entity model with default values.
///
/// # Default Values
/// - id: nil UUID
/// - created_at / updated_at: `2025-01-01T00:00:00Z`
/// - email: `"walt@breakingbad.com"`
///
/// # Returns
/// - `user::Model` - In-memory user entity
pub fn entity() -> user::Model {
    entity_builder().build()
}

/// Creates a user entity builder for customization.
///
/// # Returns
/// - `UserEntityBuilder` - Builder instance with default values
pub fn entity_builder() -> UserEntityBuilder {
    let now = default_timestamp();
    UserEntityBuilder {
        id: Uuid::nil(),
        created_at: now,
        updated_at: now,
        email: DEFAULT_EMAIL.to_string(),
    }
}

/// Builder for in-memory user entity models.
pub struct UserEntityBuilder {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    email: String,
}

impl UserEntityBuilder {
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn build(self) -> user::Model {
        user::Model {
            id: self.id,
            created_at: self.created_at,
            updated_at: self.updated_at,
            email: self.email,
        }
    }
}
