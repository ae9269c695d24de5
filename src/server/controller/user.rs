use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, UpdateUserNameDto, UserDto},
    },
    server::{
        error::AppError,
        model::user::{CreateUserParam, UpdateUserNameParam, User},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register a new user.
///
/// # Returns
/// - `201 Created` - Successfully created user
/// - `400 Bad Request` - Blank name or malformed email
/// - `409 Conflict` - Email already registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Successfully created user", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateUserParam::from_dto(payload)?;
    let user = UserService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).get_all().await?;
    let dtos: Vec<UserDto> = users.into_iter().map(User::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Rename the user registered under an email address.
#[utoipa::path(
    patch,
    path = "/api/users/email/{email}",
    tag = USER_TAG,
    params(
        ("email" = String, Path, description = "Registered email address")
    ),
    request_body = UpdateUserNameDto,
    responses(
        (status = 200, description = "Successfully renamed user", body = UserDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user_name(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(payload): Json<UpdateUserNameDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdateUserNameParam::from_dto(email, payload)?;
    let user = UserService::new(&state.db).update_name(param).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted user"),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    UserService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
