use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PublisherDto {
    pub id: i32,
    pub name: String,
    pub established_date: Option<NaiveDate>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PublisherWithCountDto {
    pub id: i32,
    pub name: String,
    pub established_date: Option<NaiveDate>,
    pub address: Option<String>,
    pub book_count: u64,
}

/// Publisher fields exposed when embedded in a book response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PublisherSummaryDto {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePublisherDto {
    pub name: String,
    #[serde(default)]
    pub established_date: Option<NaiveDate>,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdatePublisherDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub established_date: Option<NaiveDate>,
    #[serde(default)]
    pub address: Option<String>,
}
