use crate::server::{
    data::student_detail::StudentDetailRepository, model::student::NewStudentDetail,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_by_student_id;
mod find_by_email;
mod update;
