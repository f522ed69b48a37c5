//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixture functions build in-memory entity models for unit tests and as default values
//! for factories. Unlike factories, fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let user = fixture::user::entity();
//!
//! let other = fixture::user::entity_builder()
//!     .email("other@example.com")
//!     .build();
//! ```

pub mod user;
