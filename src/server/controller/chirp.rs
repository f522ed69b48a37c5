use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        chirp::{CleanedChirpDto, CreateChirpDto, ValidateChirpDto},
    },
    server::{
        error::AppError,
        model::chirp::{ChirpValidation, ValidateChirpParam},
        service::chirp::ChirpService,
        state::AppState,
    },
};

/// Tag for grouping chirp endpoints in OpenAPI documentation
pub static CHIRP_TAG: &str = "chirp";

/// Validate a chirp and mask forbidden words.
///
/// The body is decoded as JSON regardless of the request's content type. A missing
/// `body` field is treated as an empty chirp.
///
/// # Arguments
/// - `state` - Application state containing the chirp rules
/// - `body` - Raw request body holding a `ValidateChirpDto`
///
/// # Returns
/// - `200 OK` - Chirp accepted, with forbidden words replaced by `****`
/// - `400 Bad Request` - Chirp is longer than the configured maximum
/// - `500 Internal Server Error` - Body is not decodable JSON
#[utoipa::path(
    post,
    path = "/api/validate_chirp",
    tag = CHIRP_TAG,
    request_body = ValidateChirpDto,
    responses(
        (status = 200, description = "Chirp accepted, forbidden words masked", body = CleanedChirpDto),
        (status = 400, description = "Chirp is too long", body = ErrorDto),
        (status = 500, description = "Undecodable request body")
    ),
)]
pub async fn validate_chirp(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let payload: ValidateChirpDto = serde_json::from_slice(&body)?;

    respond(&state, ValidateChirpParam::from(payload))
}

/// Submit a chirp on behalf of a user.
///
/// Runs the same validation as `/api/validate_chirp`. The optional `user_id` is accepted
/// but neither checked nor stored.
///
/// # Arguments
/// - `state` - Application state containing the chirp rules
/// - `body` - Raw request body holding a `CreateChirpDto`
///
/// # Returns
/// - `200 OK` - Chirp accepted, with forbidden words replaced by `****`
/// - `400 Bad Request` - Chirp is longer than the configured maximum
/// - `500 Internal Server Error` - Body is not decodable JSON
#[utoipa::path(
    post,
    path = "/api/chirps",
    tag = CHIRP_TAG,
    request_body = CreateChirpDto,
    responses(
        (status = 200, description = "Chirp accepted, forbidden words masked", body = CleanedChirpDto),
        (status = 400, description = "Chirp is too long", body = ErrorDto),
        (status = 500, description = "Undecodable request body")
    ),
)]
pub async fn create_chirp(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let payload: CreateChirpDto = serde_json::from_slice(&body)?;

    respond(&state, ValidateChirpParam::from(payload))
}

fn respond(
    state: &AppState,
    param: ValidateChirpParam,
) -> Result<(StatusCode, Json<CleanedChirpDto>), AppError> {
    match ChirpService::new(&state.chirp_rules).validate(param) {
        ChirpValidation::Rejected { reason } => Err(AppError::BadRequest(reason)),
        ChirpValidation::Accepted { cleaned_body } => {
            Ok((StatusCode::OK, Json(CleanedChirpDto { cleaned_body })))
        }
    }
}
