//! Request and response DTOs shared by the HTTP API.

pub mod api;
pub mod chirp;
pub mod user;
