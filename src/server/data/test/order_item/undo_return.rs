use super::*;

/// Tests undoing a devolution.
///
/// Expected: Status 1, devolution columns cleared, reschedule flag false
#[tokio::test]
async fn clears_devolution() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_item_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let item = factory::order_item::OrderItemFactory::new(db, 500)
        .status(2)
        .returned(Utc::now(), "maria")
        .rescheduled_next_month(true)
        .build()
        .await?;

    let repo = OrderItemRepository::new(db);
    let rows = repo.undo_return(item.id).await?;

    assert_eq!(rows, 1);

    let stored = repo.get_by_id(item.id).await?.unwrap();
    assert_eq!(stored.status, 1);
    assert_eq!(stored.returned_at, None);
    assert_eq!(stored.returned_by, None);
    assert!(!stored.rescheduled_next_month);

    Ok(())
}

/// Tests that an update followed by an undo restores the cleared state.
///
/// Expected: Same observable columns as a fresh in-order item
#[tokio::test]
async fn update_then_undo_restores_item() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_item_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let item = factory::create_order_item(db, 500).await?;

    let repo = OrderItemRepository::new(db);
    repo.update_status(
        item.id,
        ItemStatusUpdate {
            status: 3,
            returned_at: Some(Utc::now()),
            returned_by: Some("joao".to_string()),
            rescheduled_next_month: true,
        },
    )
    .await?;
    repo.undo_return(item.id).await?;

    let stored = repo.get_by_id(item.id).await?.unwrap();
    assert_eq!(stored, item);

    Ok(())
}
