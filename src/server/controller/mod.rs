//! HTTP request handlers.
//!
//! Controllers decode requests into parameter models, call the service layer, and
//! convert domain results into DTOs and status codes.

pub mod admin;
pub mod chirp;
pub mod health;
pub mod user;

#[cfg(test)]
mod test;
