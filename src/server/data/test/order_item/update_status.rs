use super::*;

/// Tests recording a devolution on an existing item.
///
/// Expected: One row affected, status, devolution and reschedule columns written
#[tokio::test]
async fn updates_status_and_devolution() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_item_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let item = factory::create_order_item(db, 500).await?;
    let returned_at = Utc.with_ymd_and_hms(2025, 3, 10, 14, 30, 0).unwrap();

    let repo = OrderItemRepository::new(db);
    let rows = repo
        .update_status(
            item.id,
            ItemStatusUpdate {
                status: 2,
                returned_at: Some(returned_at),
                returned_by: Some("maria".to_string()),
                rescheduled_next_month: true,
            },
        )
        .await?;

    assert_eq!(rows, 1);

    let stored = repo.get_by_id(item.id).await?.unwrap();
    assert_eq!(stored.status, 2);
    assert_eq!(stored.returned_at, Some(returned_at));
    assert_eq!(stored.returned_by.as_deref(), Some("maria"));
    assert!(stored.rescheduled_next_month);

    Ok(())
}

/// Tests updating an id that does not exist.
///
/// Expected: Ok(0), no error
#[tokio::test]
async fn unknown_id_affects_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_item_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderItemRepository::new(db);
    let rows = repo
        .update_status(
            9999,
            ItemStatusUpdate {
                status: 2,
                returned_at: None,
                returned_by: None,
                rescheduled_next_month: false,
            },
        )
        .await?;

    assert_eq!(rows, 0);

    Ok(())
}
