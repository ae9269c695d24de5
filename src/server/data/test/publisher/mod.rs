use crate::server::{data::publisher::PublisherRepository, model::publisher::CreatePublisherParam};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_books;
mod create;
mod delete;
mod get_all_with_book_counts;
mod update;
