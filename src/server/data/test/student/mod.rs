use crate::server::data::{student::StudentRepository, student_detail::StudentDetailRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_department_id;
mod get_profile;
mod get_with_detail;
mod update;
