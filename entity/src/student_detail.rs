use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "student_detail")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Owning student; unique so a detail row is never shared.
    #[sea_orm(unique)]
    pub student_id: i32,
    pub address: String,
    #[sea_orm(unique)]
    pub phone_number: String,
    #[sea_orm(unique)]
    pub email: Option<String>,
    pub date_of_birth: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Student,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
