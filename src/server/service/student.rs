//! Student service.
//!
//! A student and its detail form one unit: they are created, updated and deleted
//! together inside a single transaction. The detail cascade is explicit code in this
//! module rather than a storage-level side effect.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::{
        department::DepartmentRepository, student::StudentRepository,
        student_detail::StudentDetailRepository,
    },
    error::{
        record::{unique_violation, RecordError},
        AppError,
    },
    model::{
        department::Department,
        student::{
            CreateStudentParam, NewStudentDetail, Student, StudentDetail, StudentDetailOptions,
            StudentProfile, StudentWithDetail, UpdateStudentParam,
        },
    },
    service::reject,
};

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a student and, when provided, its detail in one transaction.
    ///
    /// Checks run in order: student number, detail email, detail phone number, then the
    /// referenced department. No row is written unless every check passes.
    ///
    /// # Returns
    /// - `Ok(StudentProfile)` - The created student with detail and department
    /// - `Err(AppError::RecordErr(Conflict))` - A unique value is already taken
    /// - `Err(AppError::RecordErr(NotFound))` - The department does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, param: CreateStudentParam) -> Result<StudentProfile, AppError> {
        let txn = self.db.begin().await?;
        let students = StudentRepository::new(&txn);

        if students
            .exists_by_student_number(&param.student_number)
            .await?
        {
            return Err(reject(RecordError::duplicate(
                Student::ENTITY,
                "student_number",
                param.student_number,
            )));
        }
        if let Some(detail) = &param.detail {
            ensure_detail_keys_free(
                &txn,
                detail.email.as_deref(),
                Some(detail.phone_number.as_str()),
            )
            .await?;
        }
        let department = match param.department_id {
            Some(department_id) => Some(find_department(&txn, department_id).await?),
            None => None,
        };

        let candidates = vec![("student_number", param.student_number.clone())];
        let student = students
            .create(param.name, param.student_number, param.department_id)
            .await
            .map_err(unique_violation(Student::ENTITY, candidates))?;

        let detail = match param.detail {
            Some(detail) => Some(create_detail(&txn, student.id, detail).await?),
            None => None,
        };

        txn.commit().await?;

        tracing::info!(
            "Created student {} ({}) with detail: {}",
            student.id,
            student.student_number,
            detail.is_some()
        );

        Ok(StudentProfile {
            student,
            detail,
            department,
        })
    }

    /// Gets a student with its detail and department.
    pub async fn get_profile(&self, id: i32) -> Result<StudentProfile, AppError> {
        StudentRepository::new(self.db)
            .get_profile(id)
            .await?
            .ok_or_else(|| RecordError::not_found(Student::ENTITY, "id", id).into())
    }

    pub async fn get_all(&self) -> Result<Vec<Student>, AppError> {
        Ok(StudentRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_student_number(&self, student_number: &str) -> Result<Student, AppError> {
        StudentRepository::new(self.db)
            .find_by_student_number(student_number)
            .await?
            .ok_or_else(|| {
                RecordError::not_found(Student::ENTITY, "student_number", student_number).into()
            })
    }

    /// Lists the students of an existing department in insertion order.
    pub async fn get_by_department_id(&self, department_id: i32) -> Result<Vec<Student>, AppError> {
        find_department(self.db, department_id).await?;

        Ok(StudentRepository::new(self.db)
            .get_by_department_id(department_id)
            .await?)
    }

    /// Applies a partial update to a student and merges the nested detail options.
    ///
    /// A student without a detail gets one created from the options, which then
    /// must carry an address and a phone number. That requirement is checked before
    /// anything is written.
    pub async fn update(&self, param: UpdateStudentParam) -> Result<StudentProfile, AppError> {
        let txn = self.db.begin().await?;
        let students = StudentRepository::new(&txn);

        let StudentWithDetail {
            mut student,
            detail,
        } = students
            .get_with_detail(param.id)
            .await?
            .ok_or_else(|| RecordError::not_found(Student::ENTITY, "id", param.id))?;

        // Resolved before any write so a detail lacking required fields is rejected up front.
        let detail_write = match (detail, param.detail) {
            (Some(current), Some(options)) => Some(DetailWrite::Merge(current, options)),
            (None, Some(options)) => {
                Some(DetailWrite::Create(options.into_new().map_err(reject)?))
            }
            (_, None) => None,
        };

        if let Some(name) = param.name {
            student.name = name;
        }
        if let Some(student_number) = param.student_number {
            if student_number != student.student_number
                && students.exists_by_student_number(&student_number).await?
            {
                return Err(reject(RecordError::duplicate(
                    Student::ENTITY,
                    "student_number",
                    student_number,
                )));
            }
            student.student_number = student_number;
        }
        if let Some(department_id) = param.department_id {
            find_department(&txn, department_id).await?;
            student.department_id = Some(department_id);
        }

        let candidates = vec![("student_number", student.student_number.clone())];
        let student = students
            .update(student)
            .await
            .map_err(unique_violation(Student::ENTITY, candidates))?;

        match detail_write {
            Some(DetailWrite::Merge(current, options)) => {
                merge_detail(&txn, current, options).await?;
            }
            Some(DetailWrite::Create(new_detail)) => {
                ensure_detail_keys_free(
                    &txn,
                    new_detail.email.as_deref(),
                    Some(new_detail.phone_number.as_str()),
                )
                .await?;
                create_detail(&txn, student.id, new_detail).await?;
            }
            None => {}
        }

        let profile = students
            .get_profile(student.id)
            .await?
            .ok_or_else(|| RecordError::not_found(Student::ENTITY, "id", student.id))?;

        txn.commit().await?;

        tracing::info!("Updated student {}", student.id);

        Ok(profile)
    }

    /// Deletes a student together with its detail.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if StudentRepository::new(&txn).get_by_id(id).await?.is_none() {
            return Err(RecordError::not_found(Student::ENTITY, "id", id).into());
        }

        let removed_details = delete_student_cascade(&txn, id).await?;

        txn.commit().await?;

        tracing::info!(
            "Deleted student {} and {} detail row(s)",
            id,
            removed_details
        );

        Ok(())
    }
}

/// Pending change to a student's detail during an update.
enum DetailWrite {
    Merge(StudentDetail, StudentDetailOptions),
    Create(NewStudentDetail),
}

/// Deletes a student's detail row and then the student row.
///
/// Runs on the caller's connection so it joins the caller's transaction.
///
/// # Returns
/// - `Ok(u64)` - Number of detail rows removed (0 or 1)
/// - `Err(DbErr)` - Database error
pub async fn delete_student_cascade<C: ConnectionTrait>(
    db: &C,
    student_id: i32,
) -> Result<u64, DbErr> {
    let removed = StudentDetailRepository::new(db)
        .delete_by_student_id(student_id)
        .await?;
    StudentRepository::new(db).delete(student_id).await?;

    Ok(removed)
}

async fn find_department<C: ConnectionTrait>(
    db: &C,
    department_id: i32,
) -> Result<Department, AppError> {
    DepartmentRepository::new(db)
        .get_by_id(department_id)
        .await?
        .ok_or_else(|| reject(RecordError::not_found(Department::ENTITY, "id", department_id)))
}

/// Fails with a conflict when another detail already holds the email or phone number.
async fn ensure_detail_keys_free<C: ConnectionTrait>(
    db: &C,
    email: Option<&str>,
    phone_number: Option<&str>,
) -> Result<(), AppError> {
    let details = StudentDetailRepository::new(db);

    if let Some(email) = email {
        if details.exists_by_email(email).await? {
            return Err(reject(RecordError::duplicate(
                StudentDetail::ENTITY,
                "email",
                email,
            )));
        }
    }
    if let Some(phone_number) = phone_number {
        if details.exists_by_phone_number(phone_number).await? {
            return Err(reject(RecordError::duplicate(
                StudentDetail::ENTITY,
                "phone_number",
                phone_number,
            )));
        }
    }

    Ok(())
}

fn detail_candidates(
    phone_number: &str,
    email: Option<&String>,
) -> Vec<(&'static str, String)> {
    let mut candidates = vec![("phone_number", phone_number.to_string())];
    if let Some(email) = email {
        candidates.push(("email", email.clone()));
    }
    candidates
}

async fn create_detail<C: ConnectionTrait>(
    db: &C,
    student_id: i32,
    detail: NewStudentDetail,
) -> Result<StudentDetail, AppError> {
    let candidates = detail_candidates(&detail.phone_number, detail.email.as_ref());

    StudentDetailRepository::new(db)
        .create(student_id, detail)
        .await
        .map_err(unique_violation(StudentDetail::ENTITY, candidates))
}

/// Merges options into an existing detail, re-checking unique values only when they change.
async fn merge_detail<C: ConnectionTrait>(
    db: &C,
    mut detail: StudentDetail,
    options: StudentDetailOptions,
) -> Result<StudentDetail, AppError> {
    let changed_email = options
        .email
        .as_deref()
        .filter(|email| detail.email.as_deref() != Some(*email));
    let changed_phone_number = options
        .phone_number
        .as_deref()
        .filter(|phone_number| *phone_number != detail.phone_number);
    ensure_detail_keys_free(db, changed_email, changed_phone_number).await?;

    if let Some(address) = options.address {
        detail.address = address;
    }
    if let Some(phone_number) = options.phone_number {
        detail.phone_number = phone_number;
    }
    if let Some(email) = options.email {
        detail.email = Some(email);
    }
    if let Some(date_of_birth) = options.date_of_birth {
        detail.date_of_birth = Some(date_of_birth);
    }

    let candidates = detail_candidates(&detail.phone_number, detail.email.as_ref());

    StudentDetailRepository::new(db)
        .update(detail)
        .await
        .map_err(unique_violation(StudentDetail::ENTITY, candidates))
}
