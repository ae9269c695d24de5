use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

use super::{duplicate_key, is_not_found};
use crate::server::{
    error::{record::RecordError, AppError},
    model::student::{
        CreateStudentParam, NewStudentDetail, StudentDetailOptions, UpdateStudentParam,
    },
    service::student::StudentService,
};

fn student(name: &str, student_number: &str) -> CreateStudentParam {
    CreateStudentParam {
        name: name.to_string(),
        student_number: student_number.to_string(),
        department_id: None,
        detail: None,
    }
}

fn detail(phone_number: &str, email: Option<&str>) -> NewStudentDetail {
    NewStudentDetail {
        address: "1 Campus Road".to_string(),
        phone_number: phone_number.to_string(),
        email: email.map(str::to_string),
        date_of_birth: None,
    }
}

/// Tests creating a student with a nested detail and a department.
///
/// Expected: Ok with a profile carrying both the detail and the department
#[tokio::test]
async fn creates_student_with_detail_and_department() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_department_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let department = factory::create_department(db).await?;

    let profile = StudentService::new(db)
        .create(CreateStudentParam {
            department_id: Some(department.id),
            detail: Some(detail("010-0000-0001", Some("a@x.com"))),
            ..student("Kim", "CS001")
        })
        .await?;

    assert_eq!(profile.student.student_number, "CS001");
    assert_eq!(profile.department.unwrap().id, department.id);
    let created_detail = profile.detail.unwrap();
    assert_eq!(created_detail.student_id, profile.student.id);
    assert_eq!(created_detail.email.as_deref(), Some("a@x.com"));

    Ok(())
}

/// Tests that a second student with a detail email already in use is rejected.
///
/// Verifies neither the second student nor its detail is written.
///
/// Expected: Conflict on "email", one student and one detail stored
#[tokio::test]
async fn rejects_duplicate_detail_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_department_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = StudentService::new(db);

    service
        .create(CreateStudentParam {
            detail: Some(detail("010-0000-0001", Some("a@x.com"))),
            ..student("Kim", "CS001")
        })
        .await?;

    let err = service
        .create(CreateStudentParam {
            detail: Some(detail("010-0000-0002", Some("a@x.com"))),
            ..student("Lee", "CS002")
        })
        .await
        .unwrap_err();

    assert_eq!(duplicate_key(&err), Some("email"));
    assert_eq!(entity::prelude::Student::find().count(db).await?, 1);
    assert_eq!(entity::prelude::StudentDetail::find().count(db).await?, 1);

    Ok(())
}

/// Tests that duplicate student numbers and phone numbers are rejected.
///
/// Expected: Conflict on "student_number" then "phone_number"
#[tokio::test]
async fn rejects_duplicate_number_and_phone() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_department_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = StudentService::new(db);

    service
        .create(CreateStudentParam {
            detail: Some(detail("010-0000-0001", None)),
            ..student("Kim", "CS001")
        })
        .await?;

    let err = service
        .create(student("Lee", "CS001"))
        .await
        .unwrap_err();
    assert_eq!(duplicate_key(&err), Some("student_number"));

    let err = service
        .create(CreateStudentParam {
            detail: Some(detail("010-0000-0001", None)),
            ..student("Lee", "CS002")
        })
        .await
        .unwrap_err();
    assert_eq!(duplicate_key(&err), Some("phone_number"));

    assert_eq!(entity::prelude::Student::find().count(db).await?, 1);

    Ok(())
}

/// Tests that a student referencing an unknown department is not created.
///
/// Expected: NotFound and no student row
#[tokio::test]
async fn rejects_unknown_department() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_department_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let err = StudentService::new(db)
        .create(CreateStudentParam {
            department_id: Some(999),
            ..student("Kim", "CS001")
        })
        .await
        .unwrap_err();

    assert!(is_not_found(&err));
    assert_eq!(entity::prelude::Student::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a partial update touches only the provided student and detail fields.
///
/// Expected: Ok with new name and address, original number, phone and email
#[tokio::test]
async fn partial_update_keeps_omitted_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_department_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = StudentService::new(db);

    let created = service
        .create(CreateStudentParam {
            detail: Some(detail("010-0000-0001", Some("a@x.com"))),
            ..student("Kim", "CS001")
        })
        .await?;

    let updated = service
        .update(UpdateStudentParam {
            id: created.student.id,
            name: Some("Kim Minji".to_string()),
            student_number: None,
            department_id: None,
            detail: Some(StudentDetailOptions {
                address: Some("2 Library Lane".to_string()),
                ..Default::default()
            }),
        })
        .await?;

    assert_eq!(updated.student.name, "Kim Minji");
    assert_eq!(updated.student.student_number, "CS001");
    let updated_detail = updated.detail.unwrap();
    assert_eq!(updated_detail.address, "2 Library Lane");
    assert_eq!(updated_detail.phone_number, "010-0000-0001");
    assert_eq!(updated_detail.email.as_deref(), Some("a@x.com"));

    Ok(())
}

/// Tests that an update adding a detail to a bare student creates it.
///
/// Expected: Ok with the new detail attached
#[tokio::test]
async fn update_creates_missing_detail() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_department_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = StudentService::new(db);

    let created = service.create(student("Kim", "CS001")).await?;

    let updated = service
        .update(UpdateStudentParam {
            id: created.student.id,
            name: None,
            student_number: None,
            department_id: None,
            detail: Some(StudentDetailOptions {
                address: Some("1 Campus Road".to_string()),
                phone_number: Some("010-0000-0009".to_string()),
                ..Default::default()
            }),
        })
        .await?;

    let created_detail = updated.detail.unwrap();
    assert_eq!(created_detail.student_id, created.student.id);
    assert_eq!(created_detail.phone_number, "010-0000-0009");

    Ok(())
}

/// Tests that an update taking another student's email is rejected and rolled back.
///
/// Expected: Conflict on "email" and the student name unchanged
#[tokio::test]
async fn update_rejects_taken_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_department_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = StudentService::new(db);

    service
        .create(CreateStudentParam {
            detail: Some(detail("010-0000-0001", Some("a@x.com"))),
            ..student("Kim", "CS001")
        })
        .await?;
    let lee = service
        .create(CreateStudentParam {
            detail: Some(detail("010-0000-0002", Some("b@x.com"))),
            ..student("Lee", "CS002")
        })
        .await?;

    let err = service
        .update(UpdateStudentParam {
            id: lee.student.id,
            name: Some("Lee Jun".to_string()),
            student_number: None,
            department_id: None,
            detail: Some(StudentDetailOptions {
                email: Some("a@x.com".to_string()),
                ..Default::default()
            }),
        })
        .await
        .unwrap_err();

    assert_eq!(duplicate_key(&err), Some("email"));
    let stored = service.get_profile(lee.student.id).await?;
    assert_eq!(stored.student.name, "Lee");
    assert_eq!(stored.detail.unwrap().email.as_deref(), Some("b@x.com"));

    Ok(())
}

/// Tests that deleting a student removes its detail row.
///
/// Expected: Ok and no student or detail row for the id
#[tokio::test]
async fn delete_removes_detail() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_department_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (student, _) = factory::helpers::create_student_with_detail(db).await?;
    let service = StudentService::new(db);

    service.delete(student.id).await?;

    assert!(entity::prelude::Student::find_by_id(student.id)
        .one(db)
        .await?
        .is_none());
    let details = entity::prelude::StudentDetail::find()
        .filter(entity::student_detail::Column::StudentId.eq(student.id))
        .count(db)
        .await?;
    assert_eq!(details, 0);
    assert!(is_not_found(&service.delete(student.id).await.unwrap_err()));

    Ok(())
}

/// Tests listing students of a department.
///
/// Expected: Ok with only that department's students, NotFound for an unknown id
#[tokio::test]
async fn lists_students_by_department() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_department_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (department, enrolled) = factory::helpers::create_student_with_department(db).await?;
    factory::create_student(db, None).await?;
    let service = StudentService::new(db);

    let students = service.get_by_department_id(department.id).await?;

    assert_eq!(students.len(), 1);
    assert_eq!(students[0].id, enrolled.id);
    assert_eq!(
        service
            .get_by_student_number(&enrolled.student_number)
            .await?
            .id,
        enrolled.id
    );
    assert!(is_not_found(
        &service.get_by_department_id(999).await.unwrap_err()
    ));

    Ok(())
}

/// Tests that an update adding an incomplete detail to a bare student changes nothing.
///
/// Expected: Validation on "phone_number" and the stored name unchanged
#[tokio::test]
async fn update_rejects_incomplete_new_detail() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_department_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = StudentService::new(db);

    let created = service.create(student("Kim", "CS001")).await?;

    let err = service
        .update(UpdateStudentParam {
            id: created.student.id,
            name: Some("Kim Minji".to_string()),
            student_number: None,
            department_id: None,
            detail: Some(StudentDetailOptions {
                address: Some("1 Campus Road".to_string()),
                ..Default::default()
            }),
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::RecordErr(RecordError::Validation {
            field: "phone_number",
            ..
        })
    ));
    let stored = service.get_profile(created.student.id).await?;
    assert_eq!(stored.student.name, "Kim");
    assert!(stored.detail.is_none());

    Ok(())
}
