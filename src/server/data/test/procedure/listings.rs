use super::*;

fn empty_result() -> Vec<BTreeMap<&'static str, Value>> {
    Vec::new()
}

/// Tests the arguments of the item listing for an order.
///
/// Expected: Reseller argument null, order argument set
#[tokio::test]
async fn item_listing_binds_order() -> Result<(), DbErr> {
    let db = MockDatabase::new(DbBackend::Postgres)
        .append_query_results([vec![BTreeMap::from([
            ("IPE_COD", Value::from(1)),
            ("PRO_DES", Value::from("Anel")),
        ])]])
        .into_connection();

    let repo = ProcedureRepository::new(&db);
    let rows = repo
        .items_by_reseller_or_order(OrderItemsFilter::Order(500))
        .await?;

    assert_eq!(rows, vec![json!({ "IPE_COD": 1, "PRO_DES": "Anel" })]);
    assert_eq!(
        db.into_transaction_log(),
        vec![Transaction::from_sql_and_values(
            DbBackend::Postgres,
            "SELECT * FROM sp_consulta_ipe_via_rev($1, $2)",
            [Value::from(None::<i32>), Value::from(Some(500))],
        )]
    );

    Ok(())
}

/// Tests the product listing argument.
///
/// Expected: Single status argument of 1
#[tokio::test]
async fn products_bind_active_status() -> Result<(), DbErr> {
    let db = MockDatabase::new(DbBackend::Postgres)
        .append_query_results([empty_result()])
        .into_connection();

    let repo = ProcedureRepository::new(&db);
    assert!(repo.general_products().await?.is_empty());

    assert_eq!(
        db.into_transaction_log(),
        vec![Transaction::from_sql_and_values(
            DbBackend::Postgres,
            "SELECT * FROM sp_return_cup_digitacao($1)",
            [Value::from(1)],
        )]
    );

    Ok(())
}

/// Tests the fixed arguments of the pending-settlements call.
///
/// Expected: Six arguments in procedure order with the promoter last
#[tokio::test]
async fn pending_settlements_bind_fixed_arguments() -> Result<(), DbErr> {
    let db = MockDatabase::new(DbBackend::Postgres)
        .append_query_results([empty_result()])
        .into_connection();

    let repo = ProcedureRepository::new(&db);
    repo.pending_settlements(PendingSettlementsParams::for_promoter(77))
        .await?;

    assert_eq!(
        db.into_transaction_log(),
        vec![Transaction::from_sql_and_values(
            DbBackend::Postgres,
            "SELECT * FROM sp_cobranca_acerto($1, $2, $3, $4, $5, $6)",
            [
                Value::from(0),
                Value::from(false),
                Value::from(0),
                Value::from(4),
                Value::from(false),
                Value::from(77),
            ],
        )]
    );

    Ok(())
}
