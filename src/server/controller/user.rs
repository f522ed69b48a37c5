use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, UserDto},
    },
    server::{
        error::AppError, model::user::CreateUserParam, service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register a new user.
///
/// Decodes the body as JSON regardless of content type, trims the email and stores the
/// user with a generated ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `body` - Raw request body holding a `CreateUserDto`
///
/// # Returns
/// - `201 Created` - Successfully created user
/// - `400 Bad Request` - Email missing or blank
/// - `409 Conflict` - A user with this email already exists
/// - `500 Internal Server Error` - Body is not decodable JSON, or a database error
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Successfully created user", body = UserDto),
        (status = 400, description = "Email missing", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Undecodable request body or internal server error")
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let payload: CreateUserDto = serde_json::from_slice(&body)?;

    let user = UserService::new(&state.db)
        .create_user(CreateUserParam::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}
