//! Publisher domain models and parameters.

use chrono::NaiveDate;

use crate::{
    model::publisher::{
        CreatePublisherDto, PublisherDto, PublisherSummaryDto, PublisherWithCountDto,
        UpdatePublisherDto,
    },
    server::{error::record::RecordError, model::validate},
};

/// Book publisher with a unique name.
#[derive(Debug, Clone, PartialEq)]
pub struct Publisher {
    pub id: i32,
    pub name: String,
    pub established_date: Option<NaiveDate>,
    pub address: Option<String>,
}

impl Publisher {
    pub const ENTITY: &'static str = "Publisher";

    pub fn into_dto(self) -> PublisherDto {
        PublisherDto {
            id: self.id,
            name: self.name,
            established_date: self.established_date,
            address: self.address,
        }
    }

    pub fn from_entity(entity: entity::publisher::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            established_date: entity.established_date,
            address: entity.address,
        }
    }
}

/// Publisher paired with the number of books it has published.
#[derive(Debug, Clone, PartialEq)]
pub struct PublisherWithBookCount {
    pub publisher: Publisher,
    pub book_count: u64,
}

impl PublisherWithBookCount {
    pub fn into_dto(self) -> PublisherWithCountDto {
        PublisherWithCountDto {
            id: self.publisher.id,
            name: self.publisher.name,
            established_date: self.publisher.established_date,
            address: self.publisher.address,
            book_count: self.book_count,
        }
    }
}

/// Identifying fields of a publisher, embedded in book responses.
#[derive(Debug, Clone, PartialEq)]
pub struct PublisherSummary {
    pub id: i32,
    pub name: String,
}

impl PublisherSummary {
    pub fn into_dto(self) -> PublisherSummaryDto {
        PublisherSummaryDto {
            id: self.id,
            name: self.name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePublisherParam {
    pub name: String,
    pub established_date: Option<NaiveDate>,
    pub address: Option<String>,
}

impl CreatePublisherParam {
    /// Validates the request and builds the create parameters.
    ///
    /// A blank address is stored as no address.
    pub fn from_dto(dto: CreatePublisherDto) -> Result<Self, RecordError> {
        Ok(Self {
            name: validate::required("name", dto.name)?,
            established_date: dto.established_date,
            address: validate::provided(dto.address),
        })
    }
}

/// Partial update of a publisher; `None` leaves the stored value untouched.
#[derive(Debug, Clone)]
pub struct UpdatePublisherParam {
    pub id: i32,
    pub name: Option<String>,
    pub established_date: Option<NaiveDate>,
    pub address: Option<String>,
}

impl UpdatePublisherParam {
    pub fn from_dto(id: i32, dto: UpdatePublisherDto) -> Self {
        Self {
            id,
            name: validate::provided(dto.name),
            established_date: dto.established_date,
            address: validate::provided(dto.address),
        }
    }
}
