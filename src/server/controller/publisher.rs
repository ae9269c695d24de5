use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{CountDto, ErrorDto},
        publisher::{
            CreatePublisherDto, PublisherDto, PublisherWithCountDto, UpdatePublisherDto,
        },
    },
    server::{
        error::AppError,
        model::publisher::{CreatePublisherParam, PublisherWithBookCount, UpdatePublisherParam},
        service::publisher::PublisherService,
        state::AppState,
    },
};

/// Tag for grouping publisher endpoints in OpenAPI documentation
pub static PUBLISHER_TAG: &str = "publisher";

/// Create a new publisher.
///
/// # Returns
/// - `201 Created` - Successfully created publisher
/// - `400 Bad Request` - Blank name
/// - `409 Conflict` - Name already taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/publishers",
    tag = PUBLISHER_TAG,
    request_body = CreatePublisherDto,
    responses(
        (status = 201, description = "Successfully created publisher", body = PublisherDto),
        (status = 400, description = "Invalid publisher data", body = ErrorDto),
        (status = 409, description = "Name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_publisher(
    State(state): State<AppState>,
    Json(payload): Json<CreatePublisherDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreatePublisherParam::from_dto(payload)?;
    let publisher = PublisherService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(publisher.into_dto())))
}

/// List all publishers with the number of books each has published.
#[utoipa::path(
    get,
    path = "/api/publishers",
    tag = PUBLISHER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved publishers", body = Vec<PublisherWithCountDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_publishers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let publishers = PublisherService::new(&state.db).get_all().await?;
    let dtos: Vec<PublisherWithCountDto> = publishers
        .into_iter()
        .map(PublisherWithBookCount::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/publishers/{id}",
    tag = PUBLISHER_TAG,
    params(
        ("id" = i32, Path, description = "Publisher ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved publisher", body = PublisherDto),
        (status = 404, description = "Publisher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_publisher(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let publisher = PublisherService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(publisher.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/publishers/name/{name}",
    tag = PUBLISHER_TAG,
    params(
        ("name" = String, Path, description = "Publisher name")
    ),
    responses(
        (status = 200, description = "Successfully retrieved publisher", body = PublisherDto),
        (status = 404, description = "Publisher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_publisher_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let publisher = PublisherService::new(&state.db).get_by_name(&name).await?;

    Ok((StatusCode::OK, Json(publisher.into_dto())))
}

/// Count the books of a publisher.
#[utoipa::path(
    get,
    path = "/api/publishers/{id}/book-count",
    tag = PUBLISHER_TAG,
    params(
        ("id" = i32, Path, description = "Publisher ID")
    ),
    responses(
        (status = 200, description = "Successfully counted books", body = CountDto),
        (status = 404, description = "Publisher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_publisher_book_count(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let count = PublisherService::new(&state.db).count_books(id).await?;

    Ok((StatusCode::OK, Json(CountDto { count })))
}

/// Update a publisher. Omitted fields keep their stored values.
#[utoipa::path(
    put,
    path = "/api/publishers/{id}",
    tag = PUBLISHER_TAG,
    params(
        ("id" = i32, Path, description = "Publisher ID")
    ),
    request_body = UpdatePublisherDto,
    responses(
        (status = 200, description = "Successfully updated publisher", body = PublisherDto),
        (status = 404, description = "Publisher not found", body = ErrorDto),
        (status = 409, description = "Name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_publisher(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePublisherDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdatePublisherParam::from_dto(id, payload);
    let publisher = PublisherService::new(&state.db).update(param).await?;

    Ok((StatusCode::OK, Json(publisher.into_dto())))
}

/// Delete a publisher that has no books.
///
/// # Returns
/// - `204 No Content` - Successfully deleted publisher
/// - `404 Not Found` - Publisher not found
/// - `409 Conflict` - Publisher still has books
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/publishers/{id}",
    tag = PUBLISHER_TAG,
    params(
        ("id" = i32, Path, description = "Publisher ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted publisher"),
        (status = 404, description = "Publisher not found", body = ErrorDto),
        (status = 409, description = "Publisher still has books", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_publisher(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    PublisherService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
