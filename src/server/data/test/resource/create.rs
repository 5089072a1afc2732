use super::*;

/// Tests creating a resource.
///
/// Expected: Ok with a generated id and the supplied fields, characteristics in order
#[tokio::test]
async fn creates_resource() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let resource_type = factory::create_resource_type(db).await?;

    let repo = ResourceRepository::new(db);
    let resource = repo.create(create_params(resource_type.id)).await?;

    assert!(resource.id > 0);
    assert_eq!(resource.description, "Epson projector");
    assert_eq!(resource.status, ResourceStatus::Available);
    assert_eq!(resource.characteristics, vec!["HDMI", "VGA"]);
    assert_eq!(resource.resource_type_id, resource_type.id);

    Ok(())
}

/// Tests creating a resource with an unknown resource type.
///
/// Expected: Err and no row inserted
#[tokio::test]
async fn fails_for_nonexistent_resource_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ResourceRepository::new(db);
    let result = repo.create(create_params(999)).await;

    assert!(result.is_err());
    let count = entity::prelude::Resource::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}
