use super::*;

/// Tests listing and fetching resources.
///
/// Expected: get_all returns both resources; get_by_id returns the requested one
#[tokio::test]
async fn gets_all_and_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, resources) = factory::helpers::create_resources(db, 2).await?;

    let service = ResourceService::new(db);

    assert_eq!(service.get_all().await?.len(), 2);
    assert_eq!(service.get_by_id(resources[1].id).await?.id, resources[1].id);

    Ok(())
}

/// Tests fetching a missing resource.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn returns_not_found_for_missing_resource() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ResourceService::new(db);

    assert!(matches!(
        service.get_by_id(999).await,
        Err(AppError::NotFound {
            entity: EntityKind::Resource,
            id: 999
        })
    ));

    Ok(())
}
