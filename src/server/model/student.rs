//! Student domain models and parameters.
//!
//! A student optionally belongs to a department and exclusively owns at most one
//! detail record. The detail is never loaded with the student unless a read path asks
//! for it, and it is created, updated and deleted only through its student.

use chrono::NaiveDate;

use crate::{
    model::student::{
        CreateStudentDetailDto, CreateStudentDto, StudentDetailDto, StudentDto,
        StudentProfileDto, UpdateStudentDetailDto, UpdateStudentDto,
    },
    server::{
        error::record::RecordError,
        model::{department::Department, validate},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: i32,
    pub name: String,
    /// Unique enrollment number, e.g. "CS001".
    pub student_number: String,
    pub department_id: Option<i32>,
}

impl Student {
    pub const ENTITY: &'static str = "Student";

    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            id: self.id,
            name: self.name,
            student_number: self.student_number,
            department_id: self.department_id,
        }
    }

    pub fn from_entity(entity: entity::student::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            student_number: entity.student_number,
            department_id: entity.department_id,
        }
    }
}

/// Personal details owned by exactly one student.
///
/// Phone number and email are unique across all details.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentDetail {
    pub id: i32,
    pub student_id: i32,
    pub address: String,
    pub phone_number: String,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

impl StudentDetail {
    pub const ENTITY: &'static str = "StudentDetail";

    pub fn into_dto(self) -> StudentDetailDto {
        StudentDetailDto {
            id: self.id,
            address: self.address,
            phone_number: self.phone_number,
            email: self.email,
            date_of_birth: self.date_of_birth,
        }
    }

    pub fn from_entity(entity: entity::student_detail::Model) -> Self {
        Self {
            id: entity.id,
            student_id: entity.student_id,
            address: entity.address,
            phone_number: entity.phone_number,
            email: entity.email,
            date_of_birth: entity.date_of_birth,
        }
    }
}

/// Student joined with its detail, if one exists.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentWithDetail {
    pub student: Student,
    pub detail: Option<StudentDetail>,
}

/// Student joined with its detail and department.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentProfile {
    pub student: Student,
    pub detail: Option<StudentDetail>,
    pub department: Option<Department>,
}

impl StudentProfile {
    pub fn into_dto(self) -> StudentProfileDto {
        StudentProfileDto {
            id: self.student.id,
            name: self.student.name,
            student_number: self.student.student_number,
            detail: self.detail.map(StudentDetail::into_dto),
            department: self.department.map(Department::into_dto),
        }
    }
}

/// Required and optional fields of a detail row about to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStudentDetail {
    pub address: String,
    pub phone_number: String,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

impl NewStudentDetail {
    /// Validates a nested detail request.
    ///
    /// A blank email is treated as no email.
    pub fn from_dto(dto: CreateStudentDetailDto) -> Result<Self, RecordError> {
        let email = validate::provided(dto.email);
        if let Some(email) = &email {
            validate::email("email", email)?;
        }

        Ok(Self {
            address: validate::required("address", dto.address)?,
            phone_number: validate::required("phone_number", dto.phone_number)?,
            email,
            date_of_birth: dto.date_of_birth,
        })
    }
}

/// Named options for merging into a student's detail.
///
/// Every field is optional; `None` keeps the stored value. When the student has no
/// detail yet the options must carry an address and a phone number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentDetailOptions {
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

impl StudentDetailOptions {
    pub fn from_dto(dto: UpdateStudentDetailDto) -> Result<Self, RecordError> {
        let email = validate::provided(dto.email);
        if let Some(email) = &email {
            validate::email("email", email)?;
        }

        Ok(Self {
            address: validate::provided(dto.address),
            phone_number: validate::provided(dto.phone_number),
            email,
            date_of_birth: dto.date_of_birth,
        })
    }

    /// Turns the options into a new detail row for a student that has none.
    ///
    /// # Returns
    /// - `Ok(NewStudentDetail)` - Address and phone number were provided
    /// - `Err(RecordError::Validation)` - A field required for a new detail is missing
    pub fn into_new(self) -> Result<NewStudentDetail, RecordError> {
        let address = self
            .address
            .ok_or_else(|| RecordError::validation("address", "is required for a new detail"))?;
        let phone_number = self.phone_number.ok_or_else(|| {
            RecordError::validation("phone_number", "is required for a new detail")
        })?;

        Ok(NewStudentDetail {
            address,
            phone_number,
            email: self.email,
            date_of_birth: self.date_of_birth,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateStudentParam {
    pub name: String,
    pub student_number: String,
    pub department_id: Option<i32>,
    pub detail: Option<NewStudentDetail>,
}

impl CreateStudentParam {
    /// Validates the request, including the nested detail, and builds the create parameters.
    pub fn from_dto(dto: CreateStudentDto) -> Result<Self, RecordError> {
        Ok(Self {
            name: validate::required("name", dto.name)?,
            student_number: validate::required("student_number", dto.student_number)?,
            department_id: dto.department_id,
            detail: dto.detail.map(NewStudentDetail::from_dto).transpose()?,
        })
    }
}

/// Partial update of a student and, optionally, its detail.
#[derive(Debug, Clone)]
pub struct UpdateStudentParam {
    pub id: i32,
    pub name: Option<String>,
    pub student_number: Option<String>,
    pub department_id: Option<i32>,
    pub detail: Option<StudentDetailOptions>,
}

impl UpdateStudentParam {
    pub fn from_dto(id: i32, dto: UpdateStudentDto) -> Result<Self, RecordError> {
        Ok(Self {
            id,
            name: validate::provided(dto.name),
            student_number: validate::provided(dto.student_number),
            department_id: dto.department_id,
            detail: dto.detail.map(StudentDetailOptions::from_dto).transpose()?,
        })
    }
}
