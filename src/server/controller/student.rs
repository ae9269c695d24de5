use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        student::{CreateStudentDto, StudentDto, StudentProfileDto, UpdateStudentDto},
    },
    server::{
        error::AppError,
        model::student::{CreateStudentParam, Student, UpdateStudentParam},
        service::student::StudentService,
        state::AppState,
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "student";

/// Create a new student, optionally with a detail.
///
/// The student and its detail are written in one transaction; a failed check leaves
/// neither behind.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Student data with an optional department id and nested detail
///
/// # Returns
/// - `201 Created` - Student profile with detail and department
/// - `400 Bad Request` - Blank required field or malformed email
/// - `404 Not Found` - Referenced department does not exist
/// - `409 Conflict` - Student number, email or phone number already taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/students",
    tag = STUDENT_TAG,
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Successfully created student", body = StudentProfileDto),
        (status = 400, description = "Invalid student data", body = ErrorDto),
        (status = 404, description = "Department not found", body = ErrorDto),
        (status = 409, description = "Unique value already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    Json(payload): Json<CreateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateStudentParam::from_dto(payload)?;
    let profile = StudentService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(profile.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/students",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved students", body = Vec<StudentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let students = StudentService::new(&state.db).get_all().await?;
    let dtos: Vec<StudentDto> = students.into_iter().map(Student::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a student together with its detail and department.
#[utoipa::path(
    get,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved student", body = StudentProfileDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let profile = StudentService::new(&state.db).get_profile(id).await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/students/number/{student_number}",
    tag = STUDENT_TAG,
    params(
        ("student_number" = String, Path, description = "Student number")
    ),
    responses(
        (status = 200, description = "Successfully retrieved student", body = StudentDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_by_number(
    State(state): State<AppState>,
    Path(student_number): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let student = StudentService::new(&state.db)
        .get_by_student_number(&student_number)
        .await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// List the students of a department.
#[utoipa::path(
    get,
    path = "/api/students/department/{department_id}",
    tag = STUDENT_TAG,
    params(
        ("department_id" = i32, Path, description = "Department ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved students", body = Vec<StudentDto>),
        (status = 404, description = "Department not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students_by_department(
    State(state): State<AppState>,
    Path(department_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let students = StudentService::new(&state.db)
        .get_by_department_id(department_id)
        .await?;
    let dtos: Vec<StudentDto> = students.into_iter().map(Student::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Update a student and its detail.
///
/// Omitted fields keep their stored values. Detail fields are merged into the
/// existing detail, or create one when the student has none.
///
/// # Returns
/// - `200 OK` - Updated student profile
/// - `400 Bad Request` - Malformed email, or a new detail lacks address or phone number
/// - `404 Not Found` - Student or referenced department not found
/// - `409 Conflict` - Student number, email or phone number already taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Successfully updated student", body = StudentProfileDto),
        (status = 400, description = "Invalid student data", body = ErrorDto),
        (status = 404, description = "Student or department not found", body = ErrorDto),
        (status = 409, description = "Unique value already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdateStudentParam::from_dto(id, payload)?;
    let profile = StudentService::new(&state.db).update(param).await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

/// Delete a student and its detail.
#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted student"),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    StudentService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
