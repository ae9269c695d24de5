use crate::server::data::{
    book::{BookRepository, NewBook},
    book_detail::BookDetailRepository,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_author;
mod get_with_detail;
mod search_by_title;
mod update;
