use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        book::{BookDto, BookWithDetailDto, CreateBookDto, UpdateBookDto},
    },
    server::{
        controller::param::TitleSearchParam,
        error::AppError,
        model::book::{Book, CreateBookParam, UpdateBookParam},
        service::book::BookService,
        state::AppState,
    },
};

/// Tag for grouping book endpoints in OpenAPI documentation
pub static BOOK_TAG: &str = "book";

fn into_dtos(books: Vec<Book>) -> Vec<BookDto> {
    books.into_iter().map(Book::into_dto).collect()
}

/// Create a new book, optionally with a detail.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Book data with an optional publisher id and nested detail
///
/// # Returns
/// - `201 Created` - Book with detail and publisher summary
/// - `400 Bad Request` - Blank required field or negative number
/// - `404 Not Found` - Referenced publisher does not exist
/// - `409 Conflict` - ISBN already taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/books",
    tag = BOOK_TAG,
    request_body = CreateBookDto,
    responses(
        (status = 201, description = "Successfully created book", body = BookWithDetailDto),
        (status = 400, description = "Invalid book data", body = ErrorDto),
        (status = 404, description = "Publisher not found", body = ErrorDto),
        (status = 409, description = "ISBN already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_book(
    State(state): State<AppState>,
    Json(payload): Json<CreateBookDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateBookParam::from_dto(payload)?;
    let book = BookService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(book.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/books",
    tag = BOOK_TAG,
    responses(
        (status = 200, description = "Successfully retrieved books", body = Vec<BookDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_books(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let books = BookService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(into_dtos(books))))
}

/// Get a book together with its detail and publisher summary.
#[utoipa::path(
    get,
    path = "/api/books/{id}",
    tag = BOOK_TAG,
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved book", body = BookWithDetailDto),
        (status = 404, description = "Book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let book = BookService::new(&state.db).get_with_detail(id).await?;

    Ok((StatusCode::OK, Json(book.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/books/isbn/{isbn}",
    tag = BOOK_TAG,
    params(
        ("isbn" = String, Path, description = "Book ISBN")
    ),
    responses(
        (status = 200, description = "Successfully retrieved book", body = BookDto),
        (status = 404, description = "Book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_book_by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let book = BookService::new(&state.db).get_by_isbn(&isbn).await?;

    Ok((StatusCode::OK, Json(book.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/books/author/{author}",
    tag = BOOK_TAG,
    params(
        ("author" = String, Path, description = "Exact author name")
    ),
    responses(
        (status = 200, description = "Successfully retrieved books", body = Vec<BookDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_books_by_author(
    State(state): State<AppState>,
    Path(author): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let books = BookService::new(&state.db).get_by_author(&author).await?;

    Ok((StatusCode::OK, Json(into_dtos(books))))
}

/// List the books of a publisher.
#[utoipa::path(
    get,
    path = "/api/books/publisher/{publisher_id}",
    tag = BOOK_TAG,
    params(
        ("publisher_id" = i32, Path, description = "Publisher ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved books", body = Vec<BookDto>),
        (status = 404, description = "Publisher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_books_by_publisher(
    State(state): State<AppState>,
    Path(publisher_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let books = BookService::new(&state.db)
        .get_by_publisher_id(publisher_id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(books))))
}

/// Search books whose title contains the given fragment.
#[utoipa::path(
    get,
    path = "/api/books/search",
    tag = BOOK_TAG,
    params(TitleSearchParam),
    responses(
        (status = 200, description = "Successfully searched books", body = Vec<BookDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_books(
    State(state): State<AppState>,
    Query(params): Query<TitleSearchParam>,
) -> Result<impl IntoResponse, AppError> {
    let books = BookService::new(&state.db)
        .search_by_title(&params.title)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(books))))
}

/// Update a book and its detail.
///
/// Omitted fields keep their stored values. Detail fields are merged into the
/// existing detail, or create one when the book has none.
#[utoipa::path(
    put,
    path = "/api/books/{id}",
    tag = BOOK_TAG,
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = UpdateBookDto,
    responses(
        (status = 200, description = "Successfully updated book", body = BookWithDetailDto),
        (status = 400, description = "Invalid book data", body = ErrorDto),
        (status = 404, description = "Book or publisher not found", body = ErrorDto),
        (status = 409, description = "ISBN already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBookDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdateBookParam::from_dto(id, payload)?;
    let book = BookService::new(&state.db).update(param).await?;

    Ok((StatusCode::OK, Json(book.into_dto())))
}

/// Delete a book and its detail.
#[utoipa::path(
    delete,
    path = "/api/books/{id}",
    tag = BOOK_TAG,
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted book"),
        (status = 404, description = "Book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    BookService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
