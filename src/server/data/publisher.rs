//! Publisher data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    FromQueryResult, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};

use crate::server::model::publisher::{
    CreatePublisherParam, Publisher, PublisherWithBookCount,
};

/// Publisher row joined with the number of books referencing it.
#[derive(Debug, FromQueryResult)]
struct PublisherCountRow {
    id: i32,
    name: String,
    established_date: Option<chrono::NaiveDate>,
    address: Option<String>,
    book_count: i64,
}

pub struct PublisherRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PublisherRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new publisher
    pub async fn create(&self, param: CreatePublisherParam) -> Result<Publisher, DbErr> {
        let entity = entity::publisher::ActiveModel {
            name: ActiveValue::Set(param.name),
            established_date: ActiveValue::Set(param.established_date),
            address: ActiveValue::Set(param.address),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Publisher::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Publisher>, DbErr> {
        let entity = entity::prelude::Publisher::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Publisher::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Publisher>, DbErr> {
        let entities = entity::prelude::Publisher::find()
            .order_by_asc(entity::publisher::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Publisher::from_entity).collect())
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Publisher>, DbErr> {
        let entity = entity::prelude::Publisher::find()
            .filter(entity::publisher::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Publisher::from_entity))
    }

    pub async fn exists_by_name(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Publisher::find()
            .filter(entity::publisher::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Writes every publisher field back to its row.
    pub async fn update(&self, publisher: Publisher) -> Result<Publisher, DbErr> {
        let entity = entity::publisher::ActiveModel {
            id: ActiveValue::Unchanged(publisher.id),
            name: ActiveValue::Set(publisher.name),
            established_date: ActiveValue::Set(publisher.established_date),
            address: ActiveValue::Set(publisher.address),
        }
        .update(self.db)
        .await?;

        Ok(Publisher::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Publisher::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Counts the books of a publisher with a single `COUNT` query.
    pub async fn count_books(&self, publisher_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Book::find()
            .filter(entity::book::Column::PublisherId.eq(publisher_id))
            .count(self.db)
            .await
    }

    /// Gets every publisher with its book count in one grouped query.
    pub async fn get_all_with_book_counts(&self) -> Result<Vec<PublisherWithBookCount>, DbErr> {
        let rows = entity::prelude::Publisher::find()
            .select_only()
            .column(entity::publisher::Column::Id)
            .column(entity::publisher::Column::Name)
            .column(entity::publisher::Column::EstablishedDate)
            .column(entity::publisher::Column::Address)
            .column_as(entity::book::Column::Id.count(), "book_count")
            .join(JoinType::LeftJoin, entity::publisher::Relation::Book.def())
            .group_by(entity::publisher::Column::Id)
            .group_by(entity::publisher::Column::Name)
            .group_by(entity::publisher::Column::EstablishedDate)
            .group_by(entity::publisher::Column::Address)
            .order_by_asc(entity::publisher::Column::Id)
            .into_model::<PublisherCountRow>()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| PublisherWithBookCount {
                publisher: Publisher {
                    id: row.id,
                    name: row.name,
                    established_date: row.established_date,
                    address: row.address,
                },
                book_count: row.book_count.max(0) as u64,
            })
            .collect())
    }
}
