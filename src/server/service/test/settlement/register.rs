use super::*;

/// Tests registering cash only.
///
/// Expected: 20 in cash, zero for every omitted amount
#[tokio::test]
async fn registers_cash_with_zero_defaults() {
    let test = TestBuilder::new().with_settlement_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let params = RegisterReceiptParams::from_dto(crate::model::settlement::RegisterReceiptsDto {
        rev_cod: Some(10),
        ped_cod: Some(500),
        valor_dinheiro: Some(Decimal::new(20, 0)),
        ..Default::default()
    })
    .unwrap();

    let settlement = SettlementService::new(db).register(params).await.unwrap();

    assert_eq!(settlement.reseller_id, 10);
    assert_eq!(settlement.order_id, 500);
    assert_eq!(settlement.cash, Decimal::new(20, 0));
    assert_eq!(settlement.card, Decimal::ZERO);
    assert_eq!(settlement.deposit_pix, Decimal::ZERO);
    assert_eq!(settlement.check, Decimal::ZERO);
    assert_eq!(settlement.voucher, Decimal::ZERO);
    assert_eq!(settlement.total_received, Decimal::ZERO);
    assert_eq!(settlement.change, Decimal::ZERO);
}
