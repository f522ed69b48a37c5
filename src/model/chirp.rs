use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ValidateChirpDto {
    #[serde(default)]
    pub body: String,
}

/// Chirp submission from later clients, which also send the author's ID.
///
/// `user_id` is accepted as-is; it is neither checked against the users table nor stored.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateChirpDto {
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CleanedChirpDto {
    pub cleaned_body: String,
}
