use super::*;

/// Tests updating status and characteristics only.
///
/// Expected: Ok(Some) with new values and unchanged description and type
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (resource_type, resources) = factory::helpers::create_resources(db, 1).await?;

    let repo = ResourceRepository::new(db);
    let updated = repo
        .update(
            resources[0].id,
            UpdateResourceParams {
                status: Some(ResourceStatus::Unavailable),
                characteristics: Some(vec!["4K".to_string()]),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.status, ResourceStatus::Unavailable);
    assert_eq!(updated.characteristics, vec!["4K"]);
    assert_eq!(updated.description, resources[0].description);
    assert_eq!(updated.resource_type_id, resource_type.id);

    Ok(())
}

/// Tests an update with no fields supplied.
///
/// Expected: Ok(Some) with the stored record unchanged
#[tokio::test]
async fn empty_update_returns_current_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, resources) = factory::helpers::create_resources(db, 1).await?;

    let repo = ResourceRepository::new(db);
    let updated = repo
        .update(resources[0].id, UpdateResourceParams::default())
        .await?
        .unwrap();

    assert_eq!(updated.description, resources[0].description);
    assert_eq!(updated.status, resources[0].status);

    Ok(())
}

/// Tests updating a resource that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_resource() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ResourceRepository::new(db);
    let updated = repo
        .update(
            999,
            UpdateResourceParams {
                description: Some("x".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}
