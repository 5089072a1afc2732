use super::*;

/// Tests linking a discipline to a curriculum.
///
/// Expected: Ok and the discipline appears in the curriculum's set
#[tokio::test]
async fn links_discipline() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_curriculum_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let curriculum = factory::create_curriculum(db).await?;
    let discipline = factory::create_discipline(db).await?;

    let repo = CurriculumRepository::new(db);
    repo.add_discipline(curriculum.id, discipline.id).await?;

    let found = repo.find_by_id(curriculum.id).await?.unwrap();
    assert_eq!(found.disciplines.len(), 1);
    assert_eq!(found.disciplines[0].id, discipline.id);

    Ok(())
}

/// Tests linking the same discipline twice.
///
/// Expected: Err on the second insert, one join row
#[tokio::test]
async fn fails_on_duplicate_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_curriculum_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let curriculum = factory::create_curriculum(db).await?;
    let discipline = factory::create_discipline(db).await?;

    let repo = CurriculumRepository::new(db);
    repo.add_discipline(curriculum.id, discipline.id).await?;

    assert!(repo.add_discipline(curriculum.id, discipline.id).await.is_err());
    let links = entity::prelude::CurriculumDiscipline::find().count(db).await?;
    assert_eq!(links, 1);

    Ok(())
}

/// Tests linking a discipline that does not exist.
///
/// Expected: Err, no join rows
#[tokio::test]
async fn fails_for_nonexistent_discipline() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_curriculum_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let curriculum = factory::create_curriculum(db).await?;

    let repo = CurriculumRepository::new(db);

    assert!(repo.add_discipline(curriculum.id, 999).await.is_err());
    let links = entity::prelude::CurriculumDiscipline::find().count(db).await?;
    assert_eq!(links, 0);

    Ok(())
}
