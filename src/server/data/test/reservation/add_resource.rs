use super::*;

/// Tests linking a resource to a reservation.
///
/// Expected: Ok and the resource appears in the reservation's set
#[tokio::test]
async fn links_resource() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;
    let (_, resources) = factory::helpers::create_resources(db, 1).await?;

    let repo = ReservationRepository::new(db);
    repo.add_resource(reservation.id, resources[0].id).await?;

    let found = repo.find_by_id(reservation.id).await?.unwrap();
    assert_eq!(found.resources.len(), 1);
    assert_eq!(found.resources[0].id, resources[0].id);

    Ok(())
}

/// Tests linking the same resource twice.
///
/// Expected: Err on the second insert and a single join row
#[tokio::test]
async fn fails_on_duplicate_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;
    let (_, resources) = factory::helpers::create_resources(db, 1).await?;

    let repo = ReservationRepository::new(db);
    repo.add_resource(reservation.id, resources[0].id).await?;
    let result = repo.add_resource(reservation.id, resources[0].id).await;

    assert!(result.is_err());
    let links = entity::prelude::ReservationResource::find().count(db).await?;
    assert_eq!(links, 1);

    Ok(())
}

/// Tests linking a resource that does not exist.
///
/// Expected: Err and no join rows
#[tokio::test]
async fn fails_for_nonexistent_resource() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;

    let repo = ReservationRepository::new(db);
    let result = repo.add_resource(reservation.id, 999).await;

    assert!(result.is_err());
    let links = entity::prelude::ReservationResource::find().count(db).await?;
    assert_eq!(links, 0);

    Ok(())
}

/// Tests linking to a reservation that does not exist.
///
/// Expected: Err and no join rows
#[tokio::test]
async fn fails_for_nonexistent_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, resources) = factory::helpers::create_resources(db, 1).await?;

    let repo = ReservationRepository::new(db);
    let result = repo.add_resource(999, resources[0].id).await;

    assert!(result.is_err());
    let links = entity::prelude::ReservationResource::find().count(db).await?;
    assert_eq!(links, 0);

    Ok(())
}

/// Tests the existence check used before linking.
///
/// Expected: true for a stored reservation, false otherwise
#[tokio::test]
async fn exists_reflects_stored_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;

    let repo = ReservationRepository::new(db);
    assert!(repo.exists(reservation.id).await?);
    assert!(!repo.exists(999).await?);

    Ok(())
}
