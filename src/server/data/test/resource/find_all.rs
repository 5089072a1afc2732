use super::*;

/// Tests listing resources.
///
/// Expected: Ok with every resource ordered by id
#[tokio::test]
async fn returns_all_resources_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, resources) = factory::helpers::create_resources(db, 3).await?;

    let repo = ResourceRepository::new(db);
    let all = repo.find_all().await?;

    let ids: Vec<i32> = all.iter().map(|r| r.id).collect();
    let expected: Vec<i32> = resources.iter().map(|r| r.id).collect();
    assert_eq!(ids, expected);

    Ok(())
}

/// Tests listing with no resources stored.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ResourceRepository::new(db);

    assert!(repo.find_all().await?.is_empty());

    Ok(())
}
