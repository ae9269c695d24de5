use crate::server::{data::department::DepartmentRepository, model::department::CreateDepartmentParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_students;
mod create;
mod delete;
mod find_by_code;
mod get_all_with_student_counts;
mod update;
