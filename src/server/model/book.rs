//! Book domain models and parameters.

use chrono::NaiveDate;

use crate::{
    model::book::{
        BookDetailDto, BookDetailInputDto, BookDto, BookWithDetailDto, CreateBookDto,
        UpdateBookDto,
    },
    server::{
        error::record::RecordError,
        model::{publisher::PublisherSummary, validate},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    /// Unique ISBN.
    pub isbn: String,
    /// Price in the smallest currency unit.
    pub price: Option<i32>,
    pub publish_date: Option<NaiveDate>,
    pub publisher_id: Option<i32>,
}

impl Book {
    pub const ENTITY: &'static str = "Book";

    pub fn into_dto(self) -> BookDto {
        BookDto {
            id: self.id,
            title: self.title,
            author: self.author,
            isbn: self.isbn,
            price: self.price,
            publish_date: self.publish_date,
            publisher_id: self.publisher_id,
        }
    }

    pub fn from_entity(entity: entity::book::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            author: entity.author,
            isbn: entity.isbn,
            price: entity.price,
            publish_date: entity.publish_date,
            publisher_id: entity.publisher_id,
        }
    }
}

/// Descriptive data owned by exactly one book.
#[derive(Debug, Clone, PartialEq)]
pub struct BookDetail {
    pub id: i32,
    pub book_id: i32,
    pub description: Option<String>,
    pub language: Option<String>,
    pub page_count: Option<i32>,
    pub edition: Option<String>,
    pub cover_image_url: Option<String>,
}

impl BookDetail {
    pub fn into_dto(self) -> BookDetailDto {
        BookDetailDto {
            id: self.id,
            description: self.description,
            language: self.language,
            page_count: self.page_count,
            edition: self.edition,
            cover_image_url: self.cover_image_url,
        }
    }

    pub fn from_entity(entity: entity::book_detail::Model) -> Self {
        Self {
            id: entity.id,
            book_id: entity.book_id,
            description: entity.description,
            language: entity.language,
            page_count: entity.page_count,
            edition: entity.edition,
            cover_image_url: entity.cover_image_url,
        }
    }

    /// Overwrites the fields the options provide and keeps the rest.
    pub fn merge(&mut self, options: BookDetailOptions) {
        if let Some(description) = options.description {
            self.description = Some(description);
        }
        if let Some(language) = options.language {
            self.language = Some(language);
        }
        if let Some(page_count) = options.page_count {
            self.page_count = Some(page_count);
        }
        if let Some(edition) = options.edition {
            self.edition = Some(edition);
        }
        if let Some(cover_image_url) = options.cover_image_url {
            self.cover_image_url = Some(cover_image_url);
        }
    }
}

/// Book joined with its detail and a summary of its publisher.
#[derive(Debug, Clone, PartialEq)]
pub struct BookWithDetail {
    pub book: Book,
    pub detail: Option<BookDetail>,
    pub publisher: Option<PublisherSummary>,
}

impl BookWithDetail {
    pub fn into_dto(self) -> BookWithDetailDto {
        BookWithDetailDto {
            id: self.book.id,
            title: self.book.title,
            author: self.book.author,
            isbn: self.book.isbn,
            price: self.book.price,
            publish_date: self.book.publish_date,
            detail: self.detail.map(BookDetail::into_dto),
            publisher: self.publisher.map(PublisherSummary::into_dto),
        }
    }
}

/// Named options for a book's detail; every field is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookDetailOptions {
    pub description: Option<String>,
    pub language: Option<String>,
    pub page_count: Option<i32>,
    pub edition: Option<String>,
    pub cover_image_url: Option<String>,
}

impl BookDetailOptions {
    pub fn from_dto(dto: BookDetailInputDto) -> Result<Self, RecordError> {
        validate::non_negative("page_count", dto.page_count)?;

        Ok(Self {
            description: validate::provided(dto.description),
            language: validate::provided(dto.language),
            page_count: dto.page_count,
            edition: validate::provided(dto.edition),
            cover_image_url: validate::provided(dto.cover_image_url),
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateBookParam {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub price: Option<i32>,
    pub publish_date: Option<NaiveDate>,
    pub publisher_id: Option<i32>,
    pub detail: Option<BookDetailOptions>,
}

impl CreateBookParam {
    pub fn from_dto(dto: CreateBookDto) -> Result<Self, RecordError> {
        validate::non_negative("price", dto.price)?;

        Ok(Self {
            title: validate::required("title", dto.title)?,
            author: validate::required("author", dto.author)?,
            isbn: validate::required("isbn", dto.isbn)?,
            price: dto.price,
            publish_date: dto.publish_date,
            publisher_id: dto.publisher_id,
            detail: dto.detail.map(BookDetailOptions::from_dto).transpose()?,
        })
    }
}

/// Partial update of a book; only provided fields overwrite stored values.
#[derive(Debug, Clone)]
pub struct UpdateBookParam {
    pub id: i32,
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub price: Option<i32>,
    pub publish_date: Option<NaiveDate>,
    pub publisher_id: Option<i32>,
    pub detail: Option<BookDetailOptions>,
}

impl UpdateBookParam {
    pub fn from_dto(id: i32, dto: UpdateBookDto) -> Result<Self, RecordError> {
        validate::non_negative("price", dto.price)?;

        Ok(Self {
            id,
            title: validate::provided(dto.title),
            author: validate::provided(dto.author),
            isbn: validate::provided(dto.isbn),
            price: dto.price,
            publish_date: dto.publish_date,
            publisher_id: dto.publisher_id,
            detail: dto.detail.map(BookDetailOptions::from_dto).transpose()?,
        })
    }
}
