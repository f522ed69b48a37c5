//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer and
//! work with domain models rather than DTOs or entity models.

pub mod admin;
pub mod chirp;
pub mod metrics;
pub mod user;
