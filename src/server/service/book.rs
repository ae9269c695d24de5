//! Book service.
//!
//! Mirrors the student service for the publisher/book/detail graph: books are checked
//! for a unique ISBN, may reference an existing publisher, and own at most one detail
//! that is written and deleted alongside them.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::{
        book::{BookRepository, NewBook},
        book_detail::BookDetailRepository,
        publisher::PublisherRepository,
    },
    error::{
        record::{unique_violation, RecordError},
        AppError,
    },
    model::{
        book::{Book, BookWithDetail, CreateBookParam, UpdateBookParam},
        publisher::{Publisher, PublisherSummary},
    },
    service::reject,
};

pub struct BookService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a book and, when provided, its detail in one transaction.
    ///
    /// # Returns
    /// - `Ok(BookWithDetail)` - The created book with detail and publisher summary
    /// - `Err(AppError::RecordErr(Conflict))` - The ISBN is already taken
    /// - `Err(AppError::RecordErr(NotFound))` - The publisher does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, param: CreateBookParam) -> Result<BookWithDetail, AppError> {
        let txn = self.db.begin().await?;
        let books = BookRepository::new(&txn);

        if books.exists_by_isbn(&param.isbn).await? {
            return Err(reject(RecordError::duplicate(
                Book::ENTITY,
                "isbn",
                param.isbn,
            )));
        }
        let publisher = match param.publisher_id {
            Some(publisher_id) => Some(find_publisher(&txn, publisher_id).await?),
            None => None,
        };

        let candidates = vec![("isbn", param.isbn.clone())];
        let book = books
            .create(NewBook {
                title: param.title,
                author: param.author,
                isbn: param.isbn,
                price: param.price,
                publish_date: param.publish_date,
                publisher_id: param.publisher_id,
            })
            .await
            .map_err(unique_violation(Book::ENTITY, candidates))?;

        let detail = match param.detail {
            Some(options) => Some(
                BookDetailRepository::new(&txn)
                    .create(book.id, options)
                    .await?,
            ),
            None => None,
        };

        txn.commit().await?;

        tracing::info!("Created book {} ({})", book.id, book.isbn);

        Ok(BookWithDetail {
            book,
            detail,
            publisher: publisher.map(|publisher| PublisherSummary {
                id: publisher.id,
                name: publisher.name,
            }),
        })
    }

    /// Gets a book with its detail and publisher summary.
    pub async fn get_with_detail(&self, id: i32) -> Result<BookWithDetail, AppError> {
        BookRepository::new(self.db)
            .get_with_detail(id)
            .await?
            .ok_or_else(|| RecordError::not_found(Book::ENTITY, "id", id).into())
    }

    pub async fn get_all(&self) -> Result<Vec<Book>, AppError> {
        Ok(BookRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_isbn(&self, isbn: &str) -> Result<Book, AppError> {
        BookRepository::new(self.db)
            .find_by_isbn(isbn)
            .await?
            .ok_or_else(|| RecordError::not_found(Book::ENTITY, "isbn", isbn).into())
    }

    pub async fn get_by_author(&self, author: &str) -> Result<Vec<Book>, AppError> {
        Ok(BookRepository::new(self.db).get_by_author(author).await?)
    }

    /// Lists the books of an existing publisher in insertion order.
    pub async fn get_by_publisher_id(&self, publisher_id: i32) -> Result<Vec<Book>, AppError> {
        find_publisher(self.db, publisher_id).await?;

        Ok(BookRepository::new(self.db)
            .get_by_publisher_id(publisher_id)
            .await?)
    }

    pub async fn search_by_title(&self, fragment: &str) -> Result<Vec<Book>, AppError> {
        Ok(BookRepository::new(self.db).search_by_title(fragment).await?)
    }

    /// Applies a partial update to a book and merges the nested detail options.
    ///
    /// Only fields present in the parameters overwrite stored values. A book without a
    /// detail gets one created from the options.
    pub async fn update(&self, param: UpdateBookParam) -> Result<BookWithDetail, AppError> {
        let txn = self.db.begin().await?;
        let books = BookRepository::new(&txn);
        let details = BookDetailRepository::new(&txn);

        let mut book = books
            .get_by_id(param.id)
            .await?
            .ok_or_else(|| RecordError::not_found(Book::ENTITY, "id", param.id))?;

        if let Some(title) = param.title {
            book.title = title;
        }
        if let Some(author) = param.author {
            book.author = author;
        }
        if let Some(isbn) = param.isbn {
            if isbn != book.isbn && books.exists_by_isbn(&isbn).await? {
                return Err(reject(RecordError::duplicate(Book::ENTITY, "isbn", isbn)));
            }
            book.isbn = isbn;
        }
        if let Some(price) = param.price {
            book.price = Some(price);
        }
        if let Some(publish_date) = param.publish_date {
            book.publish_date = Some(publish_date);
        }
        if let Some(publisher_id) = param.publisher_id {
            find_publisher(&txn, publisher_id).await?;
            book.publisher_id = Some(publisher_id);
        }

        let candidates = vec![("isbn", book.isbn.clone())];
        let book = books
            .update(book)
            .await
            .map_err(unique_violation(Book::ENTITY, candidates))?;

        if let Some(options) = param.detail {
            match details.get_by_book_id(book.id).await? {
                Some(mut detail) => {
                    detail.merge(options);
                    details.update(detail).await?;
                }
                None => {
                    details.create(book.id, options).await?;
                }
            }
        }

        let updated = books
            .get_with_detail(book.id)
            .await?
            .ok_or_else(|| RecordError::not_found(Book::ENTITY, "id", book.id))?;

        txn.commit().await?;

        tracing::info!("Updated book {}", book.id);

        Ok(updated)
    }

    /// Deletes a book together with its detail.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if BookRepository::new(&txn).get_by_id(id).await?.is_none() {
            return Err(RecordError::not_found(Book::ENTITY, "id", id).into());
        }

        let removed_details = delete_book_cascade(&txn, id).await?;

        txn.commit().await?;

        tracing::info!("Deleted book {} and {} detail row(s)", id, removed_details);

        Ok(())
    }
}

/// Deletes a book's detail row and then the book row.
///
/// Runs on the caller's connection so it joins the caller's transaction.
///
/// # Returns
/// - `Ok(u64)` - Number of detail rows removed (0 or 1)
/// - `Err(DbErr)` - Database error
pub async fn delete_book_cascade<C: ConnectionTrait>(db: &C, book_id: i32) -> Result<u64, DbErr> {
    let removed = BookDetailRepository::new(db)
        .delete_by_book_id(book_id)
        .await?;
    BookRepository::new(db).delete(book_id).await?;

    Ok(removed)
}

async fn find_publisher<C: ConnectionTrait>(
    db: &C,
    publisher_id: i32,
) -> Result<Publisher, AppError> {
    PublisherRepository::new(db)
        .get_by_id(publisher_id)
        .await?
        .ok_or_else(|| reject(RecordError::not_found(Publisher::ENTITY, "id", publisher_id)))
}
