use super::*;

/// Tests creating a curriculum with disciplines.
///
/// Expected: Ok(Curriculum) with the supplied disciplines
#[tokio::test]
async fn creates_curriculum_with_disciplines() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_curriculum_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_discipline(db).await?;
    let second = factory::create_discipline(db).await?;

    let service = CurriculumService::new(db);
    let curriculum = service
        .create(create_params(vec![first.id, second.id]))
        .await?;

    assert!(curriculum.id > 0);
    assert_eq!(curriculum.course_name, "Physics");
    let mut ids: Vec<i32> = curriculum.disciplines.iter().map(|d| d.id).collect();
    ids.sort();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests that an unknown discipline aborts the create.
///
/// Expected: Err(ReferenceError::Missing) and nothing persisted
#[tokio::test]
async fn rolls_back_when_a_link_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_curriculum_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let discipline = factory::create_discipline(db).await?;

    let service = CurriculumService::new(db);
    let result = service.create(create_params(vec![discipline.id, 999])).await;

    assert!(matches!(
        result,
        Err(AppError::ReferenceErr(ReferenceError::Missing {
            entity: EntityKind::Discipline,
            id: 999
        }))
    ));
    assert_eq!(entity::prelude::Curriculum::find().count(db).await?, 0);
    assert_eq!(entity::prelude::CurriculumDiscipline::find().count(db).await?, 0);

    Ok(())
}
