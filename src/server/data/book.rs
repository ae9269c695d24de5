//! Book data repository for database operations.

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    FromQueryResult, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};

use crate::server::model::{
    book::{Book, BookDetail, BookWithDetail},
    publisher::PublisherSummary,
};

/// Fields of a book row about to be inserted.
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub price: Option<i32>,
    pub publish_date: Option<NaiveDate>,
    pub publisher_id: Option<i32>,
}

/// Flattened row of a book left-joined with its detail and publisher.
#[derive(Debug, FromQueryResult)]
struct BookWithDetailRow {
    id: i32,
    title: String,
    author: String,
    isbn: String,
    price: Option<i32>,
    publish_date: Option<NaiveDate>,
    publisher_id: Option<i32>,
    detail_id: Option<i32>,
    description: Option<String>,
    language: Option<String>,
    page_count: Option<i32>,
    edition: Option<String>,
    cover_image_url: Option<String>,
    publisher_name: Option<String>,
}

impl BookWithDetailRow {
    fn into_book_with_detail(self) -> BookWithDetail {
        let detail = self.detail_id.map(|detail_id| BookDetail {
            id: detail_id,
            book_id: self.id,
            description: self.description,
            language: self.language,
            page_count: self.page_count,
            edition: self.edition,
            cover_image_url: self.cover_image_url,
        });

        let publisher = self
            .publisher_id
            .zip(self.publisher_name)
            .map(|(id, name)| PublisherSummary { id, name });

        BookWithDetail {
            book: Book {
                id: self.id,
                title: self.title,
                author: self.author,
                isbn: self.isbn,
                price: self.price,
                publish_date: self.publish_date,
                publisher_id: self.publisher_id,
            },
            detail,
            publisher,
        }
    }
}

pub struct BookRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new book without any detail.
    ///
    /// # Returns
    /// - `Ok(Book)` - The created book
    /// - `Err(DbErr)` - Database error, including a unique violation on the ISBN
    pub async fn create(&self, book: NewBook) -> Result<Book, DbErr> {
        let entity = entity::book::ActiveModel {
            title: ActiveValue::Set(book.title),
            author: ActiveValue::Set(book.author),
            isbn: ActiveValue::Set(book.isbn),
            price: ActiveValue::Set(book.price),
            publish_date: ActiveValue::Set(book.publish_date),
            publisher_id: ActiveValue::Set(book.publisher_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Book::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Book>, DbErr> {
        let entity = entity::prelude::Book::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Book::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Book>, DbErr> {
        let entities = entity::prelude::Book::find()
            .order_by_asc(entity::book::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Book::from_entity).collect())
    }

    pub async fn find_by_isbn(&self, isbn: &str) -> Result<Option<Book>, DbErr> {
        let entity = entity::prelude::Book::find()
            .filter(entity::book::Column::Isbn.eq(isbn))
            .one(self.db)
            .await?;

        Ok(entity.map(Book::from_entity))
    }

    pub async fn exists_by_isbn(&self, isbn: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Book::find()
            .filter(entity::book::Column::Isbn.eq(isbn))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets the books of an author in insertion order
    pub async fn get_by_author(&self, author: &str) -> Result<Vec<Book>, DbErr> {
        let entities = entity::prelude::Book::find()
            .filter(entity::book::Column::Author.eq(author))
            .order_by_asc(entity::book::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Book::from_entity).collect())
    }

    /// Gets the books of a publisher in insertion order
    pub async fn get_by_publisher_id(&self, publisher_id: i32) -> Result<Vec<Book>, DbErr> {
        let entities = entity::prelude::Book::find()
            .filter(entity::book::Column::PublisherId.eq(publisher_id))
            .order_by_asc(entity::book::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Book::from_entity).collect())
    }

    /// Gets the books whose title contains `fragment`, in insertion order
    pub async fn search_by_title(&self, fragment: &str) -> Result<Vec<Book>, DbErr> {
        let entities = entity::prelude::Book::find()
            .filter(entity::book::Column::Title.contains(fragment))
            .order_by_asc(entity::book::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Book::from_entity).collect())
    }

    /// Writes the book's own fields back to its row. The detail is left untouched.
    pub async fn update(&self, book: Book) -> Result<Book, DbErr> {
        let entity = entity::book::ActiveModel {
            id: ActiveValue::Unchanged(book.id),
            title: ActiveValue::Set(book.title),
            author: ActiveValue::Set(book.author),
            isbn: ActiveValue::Set(book.isbn),
            price: ActiveValue::Set(book.price),
            publish_date: ActiveValue::Set(book.publish_date),
            publisher_id: ActiveValue::Set(book.publisher_id),
        }
        .update(self.db)
        .await?;

        Ok(Book::from_entity(entity))
    }

    /// Deletes a book row. The detail row must be removed first.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Book::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    /// Gets a book with its detail and publisher summary in one join query.
    pub async fn get_with_detail(&self, id: i32) -> Result<Option<BookWithDetail>, DbErr> {
        use entity::{book, book_detail, publisher};

        let row = entity::prelude::Book::find_by_id(id)
            .select_only()
            .column(book::Column::Id)
            .column(book::Column::Title)
            .column(book::Column::Author)
            .column(book::Column::Isbn)
            .column(book::Column::Price)
            .column(book::Column::PublishDate)
            .column(book::Column::PublisherId)
            .column_as(book_detail::Column::Id, "detail_id")
            .column(book_detail::Column::Description)
            .column(book_detail::Column::Language)
            .column(book_detail::Column::PageCount)
            .column(book_detail::Column::Edition)
            .column(book_detail::Column::CoverImageUrl)
            .column_as(publisher::Column::Name, "publisher_name")
            .join(JoinType::LeftJoin, book::Relation::BookDetail.def())
            .join(JoinType::LeftJoin, book::Relation::Publisher.def())
            .into_model::<BookWithDetailRow>()
            .one(self.db)
            .await?;

        Ok(row.map(BookWithDetailRow::into_book_with_detail))
    }
}
