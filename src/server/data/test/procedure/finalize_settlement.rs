use super::*;

/// Tests that the document is passed as one JSON text argument and the first row is
/// returned.
///
/// Expected: Row with FCS_COD and MSG_RETORNO, one call logged with the serialized document
#[tokio::test]
async fn passes_document_as_json_text() -> Result<(), DbErr> {
    let db = MockDatabase::new(DbBackend::Postgres)
        .append_query_results([vec![BTreeMap::from([
            ("FCS_COD", Value::from(42i64)),
            ("MSG_RETORNO", Value::from("SUCESSO")),
        ])]])
        .into_connection();

    let document = json!({ "cad_fcs": [{ "PED_COD": 500 }], "USU_LOG": "maria" });

    let repo = ProcedureRepository::new(&db);
    let row = repo.finalize_settlement(&document).await?.unwrap();

    assert_eq!(row["FCS_COD"], json!(42));
    assert_eq!(row["MSG_RETORNO"], json!("SUCESSO"));

    assert_eq!(
        db.into_transaction_log(),
        vec![Transaction::from_sql_and_values(
            DbBackend::Postgres,
            "SELECT * FROM sp_app_acerto($1)",
            [Value::from(document.to_string())],
        )]
    );

    Ok(())
}

/// Tests a procedure that returns no rows.
///
/// Expected: Ok(None)
#[tokio::test]
async fn none_without_rows() -> Result<(), DbErr> {
    let db = MockDatabase::new(DbBackend::Postgres)
        .append_query_results([Vec::<BTreeMap<&str, Value>>::new()])
        .into_connection();

    let repo = ProcedureRepository::new(&db);
    let row = repo.finalize_settlement(&json!({})).await?;

    assert!(row.is_none());

    Ok(())
}
