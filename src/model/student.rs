use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::department::DepartmentDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentDto {
    pub id: i32,
    pub name: String,
    pub student_number: String,
    pub department_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentDetailDto {
    pub id: i32,
    pub address: String,
    pub phone_number: String,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

/// Student together with its detail and the department it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentProfileDto {
    pub id: i32,
    pub name: String,
    pub student_number: String,
    pub detail: Option<StudentDetailDto>,
    pub department: Option<DepartmentDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateStudentDto {
    pub name: String,
    pub student_number: String,
    #[serde(default)]
    pub department_id: Option<i32>,
    #[serde(default)]
    pub detail: Option<CreateStudentDetailDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateStudentDetailDto {
    pub address: String,
    pub phone_number: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateStudentDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub student_number: Option<String>,
    #[serde(default)]
    pub department_id: Option<i32>,
    #[serde(default)]
    pub detail: Option<UpdateStudentDetailDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateStudentDetailDto {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
}
