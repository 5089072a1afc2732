use super::*;

/// Tests fetching a missing curriculum.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn returns_not_found_for_missing_curriculum() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_curriculum_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CurriculumService::new(db);

    assert!(matches!(
        service.get_by_id(999).await,
        Err(AppError::NotFound {
            entity: EntityKind::Curriculum,
            id: 999
        })
    ));

    Ok(())
}

/// Tests fetching and listing existing curriculums.
///
/// Expected: Ok with the stored curriculum
#[tokio::test]
async fn returns_existing_curriculum() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_curriculum_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let curriculum = factory::create_curriculum(db).await?;

    let service = CurriculumService::new(db);
    let found = service.get_by_id(curriculum.id).await?;

    assert_eq!(found.course_name, curriculum.course_name);
    assert_eq!(service.get_all().await?.len(), 1);

    Ok(())
}
