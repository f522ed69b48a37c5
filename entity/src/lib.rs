//! SeaORM entity models for the Chirpy database schema.

pub mod prelude;

pub mod user;
