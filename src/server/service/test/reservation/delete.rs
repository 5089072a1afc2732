use super::*;

/// Tests deleting an existing reservation.
///
/// Expected: Ok(()) and subsequent get is NotFound
#[tokio::test]
async fn deletes_existing_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;

    let service = ReservationService::new(db);
    service.delete(reservation.id).await?;

    assert!(matches!(
        service.get_by_id(reservation.id).await,
        Err(AppError::NotFound { .. })
    ));

    Ok(())
}

/// Tests deleting a missing reservation.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn returns_not_found_when_nothing_deleted() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ReservationService::new(db);

    assert!(matches!(
        service.delete(999).await,
        Err(AppError::NotFound {
            entity: EntityKind::Reservation,
            id: 999
        })
    ));

    Ok(())
}
