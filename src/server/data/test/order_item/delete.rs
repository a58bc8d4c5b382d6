use super::*;

/// Tests deleting an item.
///
/// Expected: One row removed, item no longer found
#[tokio::test]
async fn deletes_item() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_item_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let item = factory::order_item::OrderItemFactory::new(db, 500)
        .outside_order()
        .status(9)
        .build()
        .await?;

    let repo = OrderItemRepository::new(db);
    assert_eq!(repo.delete(item.id).await?, 1);
    assert!(repo.get_by_id(item.id).await?.is_none());

    Ok(())
}

/// Tests deleting an id that does not exist.
///
/// Expected: Ok(0), other rows untouched
#[tokio::test]
async fn missing_item_deletes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_item_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let item = factory::create_order_item(db, 500).await?;

    let repo = OrderItemRepository::new(db);
    assert_eq!(repo.delete(item.id + 1000).await?, 0);
    assert!(repo.get_by_id(item.id).await?.is_some());

    Ok(())
}
