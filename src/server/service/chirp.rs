//! Chirp validation and censorship.
//!
//! A chirp is accepted when it is no longer than the configured limit. Accepted chirps
//! have every forbidden word replaced by a fixed mask. Matching is case-insensitive and
//! whole-token: the body is split on single spaces only, so runs of spaces produce empty
//! tokens and other whitespace stays inside its token.

use crate::server::{
    config::ChirpRules,
    model::chirp::{ChirpValidation, ValidateChirpParam, CHIRP_TOO_LONG},
};

/// Replacement text for a censored word.
pub const CENSOR_MASK: &str = "****";

/// Validates a chirp body and masks forbidden words.
///
/// Length is counted in characters of the raw body, before censoring. Oversized bodies
/// are rejected without being tokenized.
///
/// # Arguments
/// - `body` - Raw chirp text
/// - `max_length` - Longest accepted body, in characters (inclusive)
/// - `forbidden_words` - Lowercase words to mask
///
/// # Returns
/// - `ChirpValidation::Rejected` - Body longer than `max_length`
/// - `ChirpValidation::Accepted` - Body with each forbidden token replaced by `****`
pub fn validate<S: AsRef<str>>(
    body: &str,
    max_length: usize,
    forbidden_words: &[S],
) -> ChirpValidation {
    if body.chars().count() > max_length {
        return ChirpValidation::Rejected {
            reason: CHIRP_TOO_LONG.to_string(),
        };
    }

    let cleaned_body = body
        .split(' ')
        .map(|token| {
            let lowered = token.to_lowercase();
            if forbidden_words
                .iter()
                .any(|word| word.as_ref() == lowered)
            {
                CENSOR_MASK
            } else {
                token
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    ChirpValidation::Accepted { cleaned_body }
}

/// Service applying the configured chirp rules.
pub struct ChirpService<'a> {
    rules: &'a ChirpRules,
}

impl<'a> ChirpService<'a> {
    pub fn new(rules: &'a ChirpRules) -> Self {
        Self { rules }
    }

    /// Validates a submitted chirp against the configured rules.
    ///
    /// # Arguments
    /// - `param` - Chirp body and optional author ID
    ///
    /// # Returns
    /// - `ChirpValidation` - Rejection reason or cleaned body
    pub fn validate(&self, param: ValidateChirpParam) -> ChirpValidation {
        let result = validate(
            &param.body,
            self.rules.max_length,
            self.rules.forbidden_words.as_slice(),
        );

        match &result {
            ChirpValidation::Rejected { reason } => {
                tracing::debug!(user_id = ?param.user_id, "Chirp rejected: {}", reason)
            }
            ChirpValidation::Accepted { cleaned_body } => {
                let censored = *cleaned_body != param.body;
                tracing::debug!(user_id = ?param.user_id, censored, "Chirp accepted")
            }
        }

        result
    }
}
