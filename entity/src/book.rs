use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "book")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub author: String,
    #[sea_orm(unique)]
    pub isbn: String,
    pub price: Option<i32>,
    pub publish_date: Option<Date>,
    pub publisher_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::publisher::Entity",
        from = "Column::PublisherId",
        to = "super::publisher::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Publisher,
    #[sea_orm(has_one = "super::book_detail::Entity")]
    BookDetail,
}

impl Related<super::publisher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Publisher.def()
    }
}

impl Related<super::book_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookDetail.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
