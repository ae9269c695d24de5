use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::publisher::PublisherRepository,
    error::{
        record::{unique_violation, RecordError},
        AppError,
    },
    model::publisher::{
        CreatePublisherParam, Publisher, PublisherWithBookCount, UpdatePublisherParam,
    },
    service::reject,
};

pub struct PublisherService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PublisherService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a publisher after checking its name is unused.
    pub async fn create(&self, param: CreatePublisherParam) -> Result<Publisher, AppError> {
        let txn = self.db.begin().await?;
        let repo = PublisherRepository::new(&txn);

        if repo.exists_by_name(&param.name).await? {
            return Err(reject(RecordError::duplicate(
                Publisher::ENTITY,
                "name",
                param.name,
            )));
        }

        let candidates = vec![("name", param.name.clone())];
        let publisher = repo
            .create(param)
            .await
            .map_err(unique_violation(Publisher::ENTITY, candidates))?;

        txn.commit().await?;

        tracing::info!("Created publisher {} ({})", publisher.id, publisher.name);

        Ok(publisher)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Publisher, AppError> {
        PublisherRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| RecordError::not_found(Publisher::ENTITY, "id", id).into())
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Publisher, AppError> {
        PublisherRepository::new(self.db)
            .find_by_name(name)
            .await?
            .ok_or_else(|| RecordError::not_found(Publisher::ENTITY, "name", name).into())
    }

    /// Lists every publisher with its book count.
    pub async fn get_all(&self) -> Result<Vec<PublisherWithBookCount>, AppError> {
        Ok(PublisherRepository::new(self.db)
            .get_all_with_book_counts()
            .await?)
    }

    /// Counts the books of an existing publisher.
    pub async fn count_books(&self, id: i32) -> Result<u64, AppError> {
        let repo = PublisherRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(RecordError::not_found(Publisher::ENTITY, "id", id).into());
        }

        Ok(repo.count_books(id).await?)
    }

    /// Applies a partial update to a publisher.
    pub async fn update(&self, param: UpdatePublisherParam) -> Result<Publisher, AppError> {
        let txn = self.db.begin().await?;
        let repo = PublisherRepository::new(&txn);

        let mut publisher = repo
            .get_by_id(param.id)
            .await?
            .ok_or_else(|| RecordError::not_found(Publisher::ENTITY, "id", param.id))?;

        if let Some(name) = param.name {
            if name != publisher.name && repo.exists_by_name(&name).await? {
                return Err(reject(RecordError::duplicate(Publisher::ENTITY, "name", name)));
            }
            publisher.name = name;
        }
        if let Some(established_date) = param.established_date {
            publisher.established_date = Some(established_date);
        }
        if let Some(address) = param.address {
            publisher.address = Some(address);
        }

        let candidates = vec![("name", publisher.name.clone())];
        let publisher = repo
            .update(publisher)
            .await
            .map_err(unique_violation(Publisher::ENTITY, candidates))?;

        txn.commit().await?;

        tracing::info!("Updated publisher {}", publisher.id);

        Ok(publisher)
    }

    /// Deletes a publisher that has no books.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = PublisherRepository::new(&txn);

        if repo.get_by_id(id).await?.is_none() {
            return Err(RecordError::not_found(Publisher::ENTITY, "id", id).into());
        }

        let books = repo.count_books(id).await?;
        if books > 0 {
            return Err(reject(RecordError::has_dependents(
                Publisher::ENTITY,
                id,
                "books",
                books,
            )));
        }

        repo.delete(id).await?;
        txn.commit().await?;

        tracing::info!("Deleted publisher {}", id);

        Ok(())
    }
}
