use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{CountDto, ErrorDto},
        department::{
            CreateDepartmentDto, DepartmentDto, DepartmentWithCountDto, UpdateDepartmentDto,
        },
    },
    server::{
        error::AppError,
        model::department::{
            CreateDepartmentParam, DepartmentWithStudentCount, UpdateDepartmentParam,
        },
        service::department::DepartmentService,
        state::AppState,
    },
};

/// Tag for grouping department endpoints in OpenAPI documentation
pub static DEPARTMENT_TAG: &str = "department";

/// Create a new department.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Department name and code
///
/// # Returns
/// - `201 Created` - Successfully created department
/// - `400 Bad Request` - Blank name or code
/// - `409 Conflict` - Name or code already taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/departments",
    tag = DEPARTMENT_TAG,
    request_body = CreateDepartmentDto,
    responses(
        (status = 201, description = "Successfully created department", body = DepartmentDto),
        (status = 400, description = "Invalid department data", body = ErrorDto),
        (status = 409, description = "Name or code already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_department(
    State(state): State<AppState>,
    Json(payload): Json<CreateDepartmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateDepartmentParam::from_dto(payload)?;
    let department = DepartmentService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(department.into_dto())))
}

/// List all departments with the number of students in each.
///
/// # Returns
/// - `200 OK` - Departments in insertion order with student counts
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/departments",
    tag = DEPARTMENT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved departments", body = Vec<DepartmentWithCountDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_departments(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let departments = DepartmentService::new(&state.db).get_all().await?;
    let dtos: Vec<DepartmentWithCountDto> = departments
        .into_iter()
        .map(DepartmentWithStudentCount::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a department by id.
#[utoipa::path(
    get,
    path = "/api/departments/{id}",
    tag = DEPARTMENT_TAG,
    params(
        ("id" = i32, Path, description = "Department ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved department", body = DepartmentDto),
        (status = 404, description = "Department not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_department(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let department = DepartmentService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(department.into_dto())))
}

/// Get a department by its unique code.
#[utoipa::path(
    get,
    path = "/api/departments/code/{code}",
    tag = DEPARTMENT_TAG,
    params(
        ("code" = String, Path, description = "Department code")
    ),
    responses(
        (status = 200, description = "Successfully retrieved department", body = DepartmentDto),
        (status = 404, description = "Department not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_department_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let department = DepartmentService::new(&state.db).get_by_code(&code).await?;

    Ok((StatusCode::OK, Json(department.into_dto())))
}

/// Get a department by its unique name.
#[utoipa::path(
    get,
    path = "/api/departments/name/{name}",
    tag = DEPARTMENT_TAG,
    params(
        ("name" = String, Path, description = "Department name")
    ),
    responses(
        (status = 200, description = "Successfully retrieved department", body = DepartmentDto),
        (status = 404, description = "Department not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_department_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let department = DepartmentService::new(&state.db).get_by_name(&name).await?;

    Ok((StatusCode::OK, Json(department.into_dto())))
}

/// Count the students enrolled in a department.
#[utoipa::path(
    get,
    path = "/api/departments/{id}/student-count",
    tag = DEPARTMENT_TAG,
    params(
        ("id" = i32, Path, description = "Department ID")
    ),
    responses(
        (status = 200, description = "Successfully counted students", body = CountDto),
        (status = 404, description = "Department not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_department_student_count(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let count = DepartmentService::new(&state.db).count_students(id).await?;

    Ok((StatusCode::OK, Json(CountDto { count })))
}

/// Update a department's name and/or code.
///
/// Omitted fields keep their stored values.
///
/// # Returns
/// - `200 OK` - Successfully updated department
/// - `404 Not Found` - Department not found
/// - `409 Conflict` - New name or code already taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/departments/{id}",
    tag = DEPARTMENT_TAG,
    params(
        ("id" = i32, Path, description = "Department ID")
    ),
    request_body = UpdateDepartmentDto,
    responses(
        (status = 200, description = "Successfully updated department", body = DepartmentDto),
        (status = 404, description = "Department not found", body = ErrorDto),
        (status = 409, description = "Name or code already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_department(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateDepartmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdateDepartmentParam::from_dto(id, payload);
    let department = DepartmentService::new(&state.db).update(param).await?;

    Ok((StatusCode::OK, Json(department.into_dto())))
}

/// Delete a department.
///
/// Refused while any student still references the department.
///
/// # Returns
/// - `204 No Content` - Successfully deleted department
/// - `404 Not Found` - Department not found
/// - `409 Conflict` - Department still has students
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/departments/{id}",
    tag = DEPARTMENT_TAG,
    params(
        ("id" = i32, Path, description = "Department ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted department"),
        (status = 404, description = "Department not found", body = ErrorDto),
        (status = 409, description = "Department still has students", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_department(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    DepartmentService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
