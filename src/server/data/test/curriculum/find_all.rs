use super::*;

/// Tests listing curriculums with their disciplines.
///
/// Expected: Ok with curriculums ordered by id, each with its own disciplines
#[tokio::test]
async fn returns_each_curriculum_with_its_disciplines() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_curriculum_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_curriculum(db).await?;
    let second = factory::create_curriculum(db).await?;
    let shared = factory::create_discipline(db).await?;
    let only_first = factory::create_discipline(db).await?;

    factory::link_discipline(db, first.id, shared.id).await?;
    factory::link_discipline(db, first.id, only_first.id).await?;
    factory::link_discipline(db, second.id, shared.id).await?;

    let repo = CurriculumRepository::new(db);
    let curriculums = repo.find_all().await?;

    assert_eq!(curriculums.len(), 2);
    assert_eq!(curriculums[0].id, first.id);
    assert_eq!(curriculums[0].disciplines.len(), 2);
    assert_eq!(curriculums[1].id, second.id);
    assert_eq!(curriculums[1].disciplines.len(), 1);
    assert_eq!(curriculums[1].disciplines[0].id, shared.id);

    Ok(())
}

/// Tests listing when there are no curriculums.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list_when_no_curriculums() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_curriculum_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CurriculumRepository::new(db);

    assert!(repo.find_all().await?.is_empty());

    Ok(())
}
