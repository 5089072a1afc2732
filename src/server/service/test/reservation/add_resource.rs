use super::*;

/// Tests adding a resource to a reservation that already has one.
///
/// Expected: Ok(()) and the reservation now holds both resources
#[tokio::test]
async fn grows_resource_set() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;
    let (_, resources) = factory::helpers::create_resources(db, 2).await?;
    factory::link_resource(db, reservation.id, resources[0].id).await?;

    let service = ReservationService::new(db);
    service
        .add_resource(reservation.id, resources[1].id)
        .await?;

    let found = service.get_by_id(reservation.id).await?;
    let mut ids: Vec<i32> = found.resources.iter().map(|r| r.id).collect();
    ids.sort();
    assert_eq!(ids, vec![resources[0].id, resources[1].id]);

    Ok(())
}

/// Tests adding to a missing reservation.
///
/// Expected: Err(AppError::NotFound) and no join rows
#[tokio::test]
async fn returns_not_found_for_missing_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, resources) = factory::helpers::create_resources(db, 1).await?;

    let service = ReservationService::new(db);
    let result = service.add_resource(999, resources[0].id).await;

    assert!(matches!(
        result,
        Err(AppError::NotFound {
            entity: EntityKind::Reservation,
            id: 999
        })
    ));
    assert_eq!(entity::prelude::ReservationResource::find().count(db).await?, 0);

    Ok(())
}

/// Tests adding an already linked resource.
///
/// Expected: Err(ReferenceError::Duplicate)
#[tokio::test]
async fn returns_duplicate_for_existing_link() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;
    let (_, resources) = factory::helpers::create_resources(db, 1).await?;
    factory::link_resource(db, reservation.id, resources[0].id).await?;

    let service = ReservationService::new(db);
    let result = service.add_resource(reservation.id, resources[0].id).await;

    assert!(matches!(
        result,
        Err(AppError::ReferenceErr(ReferenceError::Duplicate { .. }))
    ));
    assert_eq!(entity::prelude::ReservationResource::find().count(db).await?, 1);

    Ok(())
}

/// Tests adding a resource that does not exist.
///
/// Expected: Err(ReferenceError::Missing) naming the resource
#[tokio::test]
async fn returns_missing_for_unknown_resource() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;

    let service = ReservationService::new(db);
    let result = service.add_resource(reservation.id, 999).await;

    assert!(matches!(
        result,
        Err(AppError::ReferenceErr(ReferenceError::Missing {
            entity: EntityKind::Resource,
            id: 999
        }))
    ));

    Ok(())
}
