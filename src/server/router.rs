//! Route table and OpenAPI document for the record store.
//!
//! Every handler carries a `#[utoipa::path]` annotation, so the same `routes!` calls
//! register the axum route and its OpenAPI operation. The collected document is served
//! through Swagger UI at `/docs`.

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        book::{self, BOOK_TAG},
        department::{self, DEPARTMENT_TAG},
        publisher::{self, PUBLISHER_TAG},
        student::{self, STUDENT_TAG},
        user::{self, USER_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Registrar API",
        description = "Departments, students, publishers, books and users"
    ),
    tags(
        (name = DEPARTMENT_TAG, description = "Departments and their student counts"),
        (name = STUDENT_TAG, description = "Students and their details"),
        (name = PUBLISHER_TAG, description = "Publishers and their book counts"),
        (name = BOOK_TAG, description = "Books and their details"),
        (name = USER_TAG, description = "Registered users")
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            department::get_departments,
            department::create_department
        ))
        .routes(routes!(
            department::get_department,
            department::update_department,
            department::delete_department
        ))
        .routes(routes!(department::get_department_by_code))
        .routes(routes!(department::get_department_by_name))
        .routes(routes!(department::get_department_student_count))
        .routes(routes!(student::get_students, student::create_student))
        .routes(routes!(
            student::get_student,
            student::update_student,
            student::delete_student
        ))
        .routes(routes!(student::get_student_by_number))
        .routes(routes!(student::get_students_by_department))
        .routes(routes!(
            publisher::get_publishers,
            publisher::create_publisher
        ))
        .routes(routes!(
            publisher::get_publisher,
            publisher::update_publisher,
            publisher::delete_publisher
        ))
        .routes(routes!(publisher::get_publisher_by_name))
        .routes(routes!(publisher::get_publisher_book_count))
        .routes(routes!(book::get_books, book::create_book))
        .routes(routes!(book::get_book, book::update_book, book::delete_book))
        .routes(routes!(book::get_book_by_isbn))
        .routes(routes!(book::get_books_by_author))
        .routes(routes!(book::get_books_by_publisher))
        .routes(routes!(book::search_books))
        .routes(routes!(user::get_users, user::create_user))
        .routes(routes!(user::get_user, user::delete_user))
        .routes(routes!(user::update_user_name))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", api))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new())
                .on_response(DefaultOnResponse::new().level(tracing::Level::INFO)),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
