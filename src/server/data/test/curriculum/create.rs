use super::*;

/// Tests creating a curriculum.
///
/// Expected: Ok with generated id, stored fields and no disciplines
#[tokio::test]
async fn creates_curriculum_with_generated_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_curriculum_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CurriculumRepository::new(db);
    let curriculum = repo.create(&create_params()).await?;

    assert!(curriculum.id > 0);
    assert_eq!(curriculum.course_name, "Computer Engineering");
    assert_eq!(curriculum.start_date, fixture::curriculum::default_start_date());
    assert_eq!(curriculum.end_date, fixture::curriculum::default_end_date());
    assert!(curriculum.disciplines.is_empty());

    Ok(())
}

/// Tests that create does not link the supplied disciplines.
///
/// Expected: Ok with no curriculum_disciplines rows
#[tokio::test]
async fn does_not_write_association_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_curriculum_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let discipline = factory::create_discipline(db).await?;

    let repo = CurriculumRepository::new(db);
    let mut params = create_params();
    params.discipline_ids = vec![discipline.id];
    repo.create(&params).await?;

    let links = entity::prelude::CurriculumDiscipline::find().count(db).await?;
    assert_eq!(links, 0);

    Ok(())
}
