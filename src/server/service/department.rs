use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::department::DepartmentRepository,
    error::{
        record::{unique_violation, RecordError},
        AppError,
    },
    model::department::{
        CreateDepartmentParam, Department, DepartmentWithStudentCount, UpdateDepartmentParam,
    },
    service::reject,
};

pub struct DepartmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DepartmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a department after checking its code and name are unused.
    ///
    /// # Returns
    /// - `Ok(Department)` - The created department
    /// - `Err(AppError::RecordErr(Conflict))` - Code or name already taken
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, param: CreateDepartmentParam) -> Result<Department, AppError> {
        let txn = self.db.begin().await?;
        let repo = DepartmentRepository::new(&txn);

        if repo.exists_by_code(&param.code).await? {
            return Err(reject(RecordError::duplicate(
                Department::ENTITY,
                "code",
                param.code,
            )));
        }
        if repo.exists_by_name(&param.name).await? {
            return Err(reject(RecordError::duplicate(
                Department::ENTITY,
                "name",
                param.name,
            )));
        }

        let candidates = vec![("code", param.code.clone()), ("name", param.name.clone())];
        let department = repo
            .create(param)
            .await
            .map_err(unique_violation(Department::ENTITY, candidates))?;

        txn.commit().await?;

        tracing::info!("Created department {} ({})", department.id, department.code);

        Ok(department)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Department, AppError> {
        DepartmentRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| RecordError::not_found(Department::ENTITY, "id", id).into())
    }

    pub async fn get_by_code(&self, code: &str) -> Result<Department, AppError> {
        DepartmentRepository::new(self.db)
            .find_by_code(code)
            .await?
            .ok_or_else(|| RecordError::not_found(Department::ENTITY, "code", code).into())
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Department, AppError> {
        DepartmentRepository::new(self.db)
            .find_by_name(name)
            .await?
            .ok_or_else(|| RecordError::not_found(Department::ENTITY, "name", name).into())
    }

    /// Lists every department with its student count.
    pub async fn get_all(&self) -> Result<Vec<DepartmentWithStudentCount>, AppError> {
        Ok(DepartmentRepository::new(self.db)
            .get_all_with_student_counts()
            .await?)
    }

    /// Counts the students of an existing department.
    pub async fn count_students(&self, id: i32) -> Result<u64, AppError> {
        let repo = DepartmentRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(RecordError::not_found(Department::ENTITY, "id", id).into());
        }

        Ok(repo.count_students(id).await?)
    }

    /// Applies a partial update to a department.
    ///
    /// Uniqueness of the code and name is re-checked only when the value actually changes.
    pub async fn update(&self, param: UpdateDepartmentParam) -> Result<Department, AppError> {
        let txn = self.db.begin().await?;
        let repo = DepartmentRepository::new(&txn);

        let mut department = repo
            .get_by_id(param.id)
            .await?
            .ok_or_else(|| RecordError::not_found(Department::ENTITY, "id", param.id))?;

        if let Some(code) = param.code {
            if code != department.code && repo.exists_by_code(&code).await? {
                return Err(reject(RecordError::duplicate(Department::ENTITY, "code", code)));
            }
            department.code = code;
        }
        if let Some(name) = param.name {
            if name != department.name && repo.exists_by_name(&name).await? {
                return Err(reject(RecordError::duplicate(Department::ENTITY, "name", name)));
            }
            department.name = name;
        }

        let candidates = vec![
            ("code", department.code.clone()),
            ("name", department.name.clone()),
        ];
        let department = repo
            .update(department)
            .await
            .map_err(unique_violation(Department::ENTITY, candidates))?;

        txn.commit().await?;

        tracing::info!("Updated department {}", department.id);

        Ok(department)
    }

    /// Deletes a department that has no students.
    ///
    /// # Returns
    /// - `Ok(())` - Department deleted
    /// - `Err(AppError::RecordErr(NotFound))` - No department with this id
    /// - `Err(AppError::RecordErr(Conflict))` - Students still reference the department
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = DepartmentRepository::new(&txn);

        if repo.get_by_id(id).await?.is_none() {
            return Err(RecordError::not_found(Department::ENTITY, "id", id).into());
        }

        let students = repo.count_students(id).await?;
        if students > 0 {
            return Err(reject(RecordError::has_dependents(
                Department::ENTITY,
                id,
                "students",
                students,
            )));
        }

        repo.delete(id).await?;
        txn.commit().await?;

        tracing::info!("Deleted department {}", id);

        Ok(())
    }
}
