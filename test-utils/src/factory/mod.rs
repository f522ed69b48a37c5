//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests. Each
//! entity has a `Factory` struct for customization and a `create_*` convenience function
//! for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//!
//! let user = factory::user::UserFactory::new(&db)
//!     .email("custom@example.com")
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod user;

pub use user::create_user;
