use crate::server::{data::book_detail::BookDetailRepository, model::book::BookDetailOptions};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_by_book_id;
mod update;
