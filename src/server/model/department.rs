//! Department domain models and parameters.
//!
//! A department groups students. It is a parent record: it exposes a student count
//! rather than its students, and cannot be deleted while any student references it.

use crate::{
    model::department::{
        CreateDepartmentDto, DepartmentDto, DepartmentWithCountDto, UpdateDepartmentDto,
    },
    server::{error::record::RecordError, model::validate},
};

/// Academic department with a unique name and a unique short code.
#[derive(Debug, Clone, PartialEq)]
pub struct Department {
    pub id: i32,
    /// Unique display name, e.g. "Computer Science".
    pub name: String,
    /// Unique short code, e.g. "CS".
    pub code: String,
}

impl Department {
    pub const ENTITY: &'static str = "Department";

    pub fn into_dto(self) -> DepartmentDto {
        DepartmentDto {
            id: self.id,
            name: self.name,
            code: self.code,
        }
    }

    /// Converts an entity model to a department domain model at the repository boundary.
    pub fn from_entity(entity: entity::department::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            code: entity.code,
        }
    }
}

/// Department paired with the number of students enrolled in it.
#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentWithStudentCount {
    pub department: Department,
    pub student_count: u64,
}

impl DepartmentWithStudentCount {
    pub fn into_dto(self) -> DepartmentWithCountDto {
        DepartmentWithCountDto {
            id: self.department.id,
            name: self.department.name,
            code: self.department.code,
            student_count: self.student_count,
        }
    }
}

/// Validated parameters for creating a department.
#[derive(Debug, Clone)]
pub struct CreateDepartmentParam {
    pub name: String,
    pub code: String,
}

impl CreateDepartmentParam {
    /// Validates the request and builds the create parameters.
    ///
    /// # Returns
    /// - `Ok(CreateDepartmentParam)` - Name and code are present
    /// - `Err(RecordError::Validation)` - Name or code is blank
    pub fn from_dto(dto: CreateDepartmentDto) -> Result<Self, RecordError> {
        Ok(Self {
            name: validate::required("name", dto.name)?,
            code: validate::required("code", dto.code)?,
        })
    }
}

/// Partial update of a department; `None` leaves the stored value untouched.
#[derive(Debug, Clone)]
pub struct UpdateDepartmentParam {
    pub id: i32,
    pub name: Option<String>,
    pub code: Option<String>,
}

impl UpdateDepartmentParam {
    pub fn from_dto(id: i32, dto: UpdateDepartmentDto) -> Self {
        Self {
            id,
            name: validate::provided(dto.name),
            code: validate::provided(dto.code),
        }
    }
}
