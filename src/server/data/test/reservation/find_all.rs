use super::*;

/// Tests listing reservations when none exist.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list_when_no_reservations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReservationRepository::new(db);
    let reservations = repo.find_all().await?;

    assert!(reservations.is_empty());

    Ok(())
}

/// Tests listing reservations, each with its own resource set.
///
/// Expected: Ok with reservations ordered by id and resources not mixed between them
#[tokio::test]
async fn returns_each_reservation_with_its_resources() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (lecture, first) = factory::helpers::create_reservation_with_dependencies(db).await?;
    let second = factory::create_reservation(db, lecture.id).await?;
    let (_, resources) = factory::helpers::create_resources(db, 2).await?;

    factory::link_resource(db, first.id, resources[0].id).await?;
    factory::link_resource(db, first.id, resources[1].id).await?;
    factory::link_resource(db, second.id, resources[1].id).await?;

    let repo = ReservationRepository::new(db);
    let reservations = repo.find_all().await?;

    assert_eq!(reservations.len(), 2);
    assert_eq!(reservations[0].id, first.id);
    assert_eq!(reservations[0].resources.len(), 2);
    assert_eq!(reservations[1].id, second.id);
    assert_eq!(reservations[1].resources.len(), 1);
    assert_eq!(reservations[1].resources[0].id, resources[1].id);

    Ok(())
}
