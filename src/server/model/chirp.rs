//! Chirp domain models and parameters.

use crate::model::chirp::{CreateChirpDto, ValidateChirpDto};

/// Reason given when a chirp exceeds the length limit.
pub const CHIRP_TOO_LONG: &str = "Chirp is too long";

/// Outcome of validating a chirp body.
///
/// Exactly one variant is produced per validation. Rejection is an expected result,
/// not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChirpValidation {
    /// The body was refused; nothing was censored.
    Rejected { reason: String },
    /// The body was accepted with forbidden words masked.
    Accepted { cleaned_body: String },
}

/// Parameters for validating a chirp.
#[derive(Debug, Clone)]
pub struct ValidateChirpParam {
    /// Raw chirp text as submitted.
    pub body: String,
    /// Author ID as sent by the client, if any. Carried for logging only.
    pub user_id: Option<String>,
}

impl From<ValidateChirpDto> for ValidateChirpParam {
    fn from(dto: ValidateChirpDto) -> Self {
        Self {
            body: dto.body,
            user_id: None,
        }
    }
}

impl From<CreateChirpDto> for ValidateChirpParam {
    fn from(dto: CreateChirpDto) -> Self {
        Self {
            body: dto.body,
            user_id: dto.user_id,
        }
    }
}
