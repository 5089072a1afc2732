use super::*;

/// Tests deleting an unlinked resource.
///
/// Expected: Ok(1) and the row is gone
#[tokio::test]
async fn deletes_resource() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, resources) = factory::helpers::create_resources(db, 1).await?;

    let repo = ResourceRepository::new(db);
    let rows = repo.delete(resources[0].id).await?;

    assert_eq!(rows, 1);
    assert!(repo.find_by_id(resources[0].id).await?.is_none());

    Ok(())
}

/// Tests deleting a resource that a reservation still links.
///
/// Expected: Err, and both the resource and its join row remain
#[tokio::test]
async fn refuses_linked_resource() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;
    let (_, resources) = factory::helpers::create_resources(db, 1).await?;
    factory::link_resource(db, reservation.id, resources[0].id).await?;

    let repo = ResourceRepository::new(db);
    let result = repo.delete(resources[0].id).await;

    assert!(result.is_err());
    assert!(repo.find_by_id(resources[0].id).await?.is_some());
    let links = entity::prelude::ReservationResource::find().count(db).await?;
    assert_eq!(links, 1);

    Ok(())
}

/// Tests deleting a resource that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn reports_zero_rows_for_nonexistent_resource() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ResourceRepository::new(db);

    assert_eq!(repo.delete(999).await?, 0);

    Ok(())
}
