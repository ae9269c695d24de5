use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::publisher::PublisherSummaryDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookDto {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub price: Option<i32>,
    pub publish_date: Option<NaiveDate>,
    pub publisher_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookDetailDto {
    pub id: i32,
    pub description: Option<String>,
    pub language: Option<String>,
    pub page_count: Option<i32>,
    pub edition: Option<String>,
    pub cover_image_url: Option<String>,
}

/// Book together with its detail and a summary of its publisher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookWithDetailDto {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub price: Option<i32>,
    pub publish_date: Option<NaiveDate>,
    pub detail: Option<BookDetailDto>,
    pub publisher: Option<PublisherSummaryDto>,
}

/// Detail fields accepted on both book create and book update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct BookDetailInputDto {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub page_count: Option<i32>,
    #[serde(default)]
    pub edition: Option<String>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateBookDto {
    pub title: String,
    pub author: String,
    pub isbn: String,
    #[serde(default)]
    pub price: Option<i32>,
    #[serde(default)]
    pub publish_date: Option<NaiveDate>,
    #[serde(default)]
    pub publisher_id: Option<i32>,
    #[serde(default)]
    pub detail: Option<BookDetailInputDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateBookDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default)]
    pub price: Option<i32>,
    #[serde(default)]
    pub publish_date: Option<NaiveDate>,
    #[serde(default)]
    pub publisher_id: Option<i32>,
    #[serde(default)]
    pub detail: Option<BookDetailInputDto>,
}
