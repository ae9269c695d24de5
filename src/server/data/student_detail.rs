//! Student detail data repository.
//!
//! Detail rows are owned by their student and are only written through the student
//! service, so there is no lookup by the detail's own id.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::student::{NewStudentDetail, StudentDetail};

pub struct StudentDetailRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentDetailRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the detail row for a student.
    ///
    /// # Returns
    /// - `Ok(StudentDetail)` - The created detail
    /// - `Err(DbErr)` - Database error, including unique violations on the owning
    ///   student, phone number or email
    pub async fn create(
        &self,
        student_id: i32,
        detail: NewStudentDetail,
    ) -> Result<StudentDetail, DbErr> {
        let entity = entity::student_detail::ActiveModel {
            student_id: ActiveValue::Set(student_id),
            address: ActiveValue::Set(detail.address),
            phone_number: ActiveValue::Set(detail.phone_number),
            email: ActiveValue::Set(detail.email),
            date_of_birth: ActiveValue::Set(detail.date_of_birth),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(StudentDetail::from_entity(entity))
    }

    pub async fn get_by_student_id(&self, student_id: i32) -> Result<Option<StudentDetail>, DbErr> {
        let entity = entity::prelude::StudentDetail::find()
            .filter(entity::student_detail::Column::StudentId.eq(student_id))
            .one(self.db)
            .await?;

        Ok(entity.map(StudentDetail::from_entity))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<StudentDetail>, DbErr> {
        let entity = entity::prelude::StudentDetail::find()
            .filter(entity::student_detail::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(StudentDetail::from_entity))
    }

    pub async fn find_by_phone_number(
        &self,
        phone_number: &str,
    ) -> Result<Option<StudentDetail>, DbErr> {
        let entity = entity::prelude::StudentDetail::find()
            .filter(entity::student_detail::Column::PhoneNumber.eq(phone_number))
            .one(self.db)
            .await?;

        Ok(entity.map(StudentDetail::from_entity))
    }

    pub async fn exists_by_email(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::StudentDetail::find()
            .filter(entity::student_detail::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn exists_by_phone_number(&self, phone_number: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::StudentDetail::find()
            .filter(entity::student_detail::Column::PhoneNumber.eq(phone_number))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Writes every detail field back to its row. The owning student never changes.
    pub async fn update(&self, detail: StudentDetail) -> Result<StudentDetail, DbErr> {
        let entity = entity::student_detail::ActiveModel {
            id: ActiveValue::Unchanged(detail.id),
            student_id: ActiveValue::Unchanged(detail.student_id),
            address: ActiveValue::Set(detail.address),
            phone_number: ActiveValue::Set(detail.phone_number),
            email: ActiveValue::Set(detail.email),
            date_of_birth: ActiveValue::Set(detail.date_of_birth),
        }
        .update(self.db)
        .await?;

        Ok(StudentDetail::from_entity(entity))
    }

    /// Deletes the detail row of a student, returning the number of rows removed.
    pub async fn delete_by_student_id(&self, student_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::StudentDetail::delete_many()
            .filter(entity::student_detail::Column::StudentId.eq(student_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
