//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{CreateUserDto, UpdateUserNameDto, UserDto},
    server::{error::record::RecordError, model::validate},
};

/// Registered user identified by a unique email address.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Set when the user is inserted and never changed afterwards.
    pub created_at: DateTime<Utc>,
}

impl User {
    pub const ENTITY: &'static str = "User";

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    pub email: String,
}

impl CreateUserParam {
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, RecordError> {
        let email = validate::required("email", dto.email)?;
        validate::email("email", &email)?;

        Ok(Self {
            name: validate::required("name", dto.name)?,
            email,
        })
    }
}

/// Renames the user registered under `email`.
#[derive(Debug, Clone)]
pub struct UpdateUserNameParam {
    pub email: String,
    pub name: String,
}

impl UpdateUserNameParam {
    pub fn from_dto(email: String, dto: UpdateUserNameDto) -> Result<Self, RecordError> {
        Ok(Self {
            email,
            name: validate::required("name", dto.name)?,
        })
    }
}
