use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::user::UserRepository,
    error::{
        record::{unique_violation, RecordError},
        AppError,
    },
    model::user::{CreateUserParam, UpdateUserNameParam, User},
    service::reject,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a user after checking the email is unused.
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        let txn = self.db.begin().await?;
        let repo = UserRepository::new(&txn);

        if repo.exists_by_email(&param.email).await? {
            return Err(reject(RecordError::duplicate(
                User::ENTITY,
                "email",
                param.email,
            )));
        }

        let candidates = vec![("email", param.email.clone())];
        let user = repo
            .create(param)
            .await
            .map_err(unique_violation(User::ENTITY, candidates))?;

        txn.commit().await?;

        tracing::info!("Created user {}", user.id);

        Ok(user)
    }

    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| RecordError::not_found(User::ENTITY, "id", id).into())
    }

    /// Renames the user registered under the given email.
    pub async fn update_name(&self, param: UpdateUserNameParam) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .update_name(&param.email, param.name)
            .await?
            .ok_or_else(|| RecordError::not_found(User::ENTITY, "email", &param.email))?;

        tracing::info!("Renamed user {}", user.id);

        Ok(user)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = UserRepository::new(&txn);

        if repo.get_by_id(id).await?.is_none() {
            return Err(RecordError::not_found(User::ENTITY, "id", id).into());
        }

        repo.delete(id).await?;
        txn.commit().await?;

        tracing::info!("Deleted user {}", id);

        Ok(())
    }
}
