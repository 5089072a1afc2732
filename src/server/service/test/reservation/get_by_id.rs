use super::*;

/// Tests fetching an existing reservation.
///
/// Expected: Ok(Reservation)
#[tokio::test]
async fn returns_existing_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (lecture, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;

    let service = ReservationService::new(db);
    let found = service.get_by_id(reservation.id).await?;

    assert_eq!(found.id, reservation.id);
    assert_eq!(found.lecture_id, lecture.id);

    Ok(())
}

/// Tests fetching a missing reservation.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn returns_not_found_for_missing_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ReservationService::new(db);
    let result = service.get_by_id(999).await;

    assert!(matches!(
        result,
        Err(AppError::NotFound {
            entity: EntityKind::Reservation,
            id: 999
        })
    ));

    Ok(())
}

/// Tests listing reservations through the service.
///
/// Expected: Ok with every stored reservation
#[tokio::test]
async fn get_all_returns_every_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (lecture, _) = factory::helpers::create_reservation_with_dependencies(db).await?;
    factory::create_reservation(db, lecture.id).await?;

    let service = ReservationService::new(db);

    assert_eq!(service.get_all().await?.len(), 2);

    Ok(())
}
