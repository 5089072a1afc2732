use super::*;

/// Tests creating a reservation.
///
/// Verifies that the repository inserts the reservation row, assigns it a
/// non-zero id and returns it with an empty resource set.
///
/// Expected: Ok with reservation created
#[tokio::test]
async fn creates_reservation_with_generated_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, _, lecture) = factory::helpers::create_lecture_with_dependencies(db).await?;

    let repo = ReservationRepository::new(db);
    let reservation = repo.create(&create_params(lecture.id)).await?;

    assert!(reservation.id > 0);
    assert_eq!(reservation.lecture_id, lecture.id);
    assert_eq!(reservation.observation, "Bring extension cord");
    assert!(reservation.resources.is_empty());

    let stored = entity::prelude::Reservation::find_by_id(reservation.id)
        .one(db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests that create ignores the supplied resource ids.
///
/// Linking is the caller's job; the repository must not write join rows.
///
/// Expected: Ok with no reservation_resources rows
#[tokio::test]
async fn does_not_write_association_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, _, lecture) = factory::helpers::create_lecture_with_dependencies(db).await?;
    let (_, resources) = factory::helpers::create_resources(db, 2).await?;

    let repo = ReservationRepository::new(db);
    let mut params = create_params(lecture.id);
    params.resource_ids = resources.iter().map(|r| r.id).collect();
    repo.create(&params).await?;

    let links = entity::prelude::ReservationResource::find().count(db).await?;
    assert_eq!(links, 0);

    Ok(())
}

/// Tests creating a reservation for a lecture that does not exist.
///
/// Expected: Err from the lecture foreign key
#[tokio::test]
async fn fails_for_nonexistent_lecture() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReservationRepository::new(db);
    let result = repo.create(&create_params(999)).await;

    assert!(result.is_err());

    Ok(())
}
