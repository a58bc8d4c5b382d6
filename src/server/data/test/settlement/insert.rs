use super::*;

fn receipt(reseller_id: i32, order_id: i32, cash: Decimal) -> RegisterReceiptParams {
    RegisterReceiptParams {
        reseller_id,
        order_id,
        cash,
        card: Decimal::ZERO,
        deposit_pix: Decimal::ZERO,
        check: Decimal::ZERO,
        voucher: Decimal::ZERO,
        total_received: cash,
        change: Decimal::ZERO,
    }
}

/// Tests storing a settlement.
///
/// Expected: Row echoed with the given amounts and a server timestamp
#[tokio::test]
async fn stores_amounts_with_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_settlement_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let before = chrono::Utc::now();
    let repo = SettlementRepository::new(db);
    let stored = repo.insert(receipt(10, 500, Decimal::new(20, 0))).await?;

    assert_eq!(stored.reseller_id, 10);
    assert_eq!(stored.order_id, 500);
    assert_eq!(stored.cash, Decimal::new(20, 0));
    assert_eq!(stored.card, Decimal::ZERO);
    assert_eq!(stored.total_received, Decimal::new(20, 0));
    assert!(stored.registered_at >= before - chrono::Duration::seconds(1));

    Ok(())
}

/// Tests registering the same reseller and order twice.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_settlement() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_settlement_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SettlementRepository::new(db);
    repo.insert(receipt(10, 500, Decimal::ONE)).await?;

    let duplicate = repo.insert(receipt(10, 500, Decimal::ONE)).await;
    assert!(duplicate.is_err());

    Ok(())
}
