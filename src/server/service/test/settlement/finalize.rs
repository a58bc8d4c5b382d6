use super::*;

/// Tests a successful finalization.
///
/// Expected: Ok with the settlement id and message
#[tokio::test]
async fn returns_settlement_id_on_success() {
    let db = MockDatabase::new(DbBackend::Postgres)
        .append_query_results([procedure_row(42, "SUCESSO")])
        .into_connection();

    let result = SettlementService::new(&db).finalize(document()).await.unwrap();

    assert_eq!(result.settlement_id, 42);
    assert_eq!(result.message, "SUCESSO");
}

/// Tests a failure enriched from the error journal.
///
/// Expected: Procedure error with the journal entry as details and MSG_RETORNO as sqlError
#[tokio::test]
async fn failure_uses_error_journal() {
    let db = MockDatabase::new(DbBackend::Postgres)
        .append_query_results([procedure_row(0, "ERRO")])
        .append_query_results([vec![entity::app_error_log::Model {
            id: 9,
            error_number: Some(50000),
            error_message: Some("Pedido já acertado".to_string()),
            error_procedure: Some("sp_app_acerto".to_string()),
            error_line: Some(88),
        }]])
        .into_connection();

    let err = SettlementService::new(&db)
        .finalize(document())
        .await
        .unwrap_err();

    match err {
        AppError::Procedure {
            message,
            details,
            sql_error,
            ..
        } => {
            assert_eq!(message, "Erro ao executar finalização do acerto");
            assert_eq!(
                details,
                "Erro 50000 na procedure sp_app_acerto linha 88: Pedido já acertado"
            );
            assert_eq!(sql_error.as_deref(), Some("ERRO"));
        }
        other => panic!("expected procedure error, got {:?}", other),
    }
}

/// Tests a failure when the journal is empty.
///
/// Expected: Generic detail kept
#[tokio::test]
async fn failure_without_journal_entry_keeps_generic_detail() {
    let db = MockDatabase::new(DbBackend::Postgres)
        .append_query_results([procedure_row(0, "SUCESSO")])
        .append_query_results([Vec::<entity::app_error_log::Model>::new()])
        .into_connection();

    let err = SettlementService::new(&db)
        .finalize(document())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::Procedure { ref details, .. } if details == "Erro ao finalizar acerto"
    ));
}

/// Tests a failure when reading the journal fails too.
///
/// Expected: Generic detail kept, MSG_RETORNO still reported
#[tokio::test]
async fn unreadable_journal_keeps_generic_detail() {
    let db = MockDatabase::new(DbBackend::Postgres)
        .append_query_results([procedure_row(5, "SALDO_INSUFICIENTE")])
        .append_query_errors([DbErr::Custom("log_app_error missing".to_string())])
        .into_connection();

    let err = SettlementService::new(&db)
        .finalize(document())
        .await
        .unwrap_err();

    match err {
        AppError::Procedure {
            details, sql_error, ..
        } => {
            assert_eq!(details, "Erro ao finalizar acerto");
            assert_eq!(sql_error.as_deref(), Some("SALDO_INSUFICIENTE"));
        }
        other => panic!("expected procedure error, got {:?}", other),
    }
}

/// Tests a procedure that returns no rows.
///
/// Expected: Procedure error without sqlError
#[tokio::test]
async fn empty_result_is_reported() {
    let db = MockDatabase::new(DbBackend::Postgres)
        .append_query_results([Vec::<BTreeMap<&str, Value>>::new()])
        .into_connection();

    let err = SettlementService::new(&db)
        .finalize(document())
        .await
        .unwrap_err();

    match err {
        AppError::Procedure {
            message, sql_error, ..
        } => {
            assert_eq!(message, "Stored Procedure não retornou resultado");
            assert_eq!(sql_error, None);
        }
        other => panic!("expected procedure error, got {:?}", other),
    }
}

/// Tests a failing procedure call.
///
/// Expected: Procedure error with the driver message and sqlError "UNKNOWN"
#[tokio::test]
async fn call_failure_is_unknown() {
    let db = MockDatabase::new(DbBackend::Postgres)
        .append_query_errors([DbErr::Custom("deadlock detected".to_string())])
        .into_connection();

    let err = SettlementService::new(&db)
        .finalize(document())
        .await
        .unwrap_err();

    match err {
        AppError::Procedure {
            details, sql_error, ..
        } => {
            assert!(details.contains("deadlock detected"));
            assert_eq!(sql_error.as_deref(), Some("UNKNOWN"));
        }
        other => panic!("expected procedure error, got {:?}", other),
    }
}

/// Tests a procedure call that fails because the connection dropped.
///
/// Expected: Procedure error that still reports a lost connection
#[tokio::test]
async fn dropped_connection_is_detected() {
    let db = MockDatabase::new(DbBackend::Postgres)
        .append_query_errors([DbErr::Conn(RuntimeErr::Internal(
            "connection reset by peer".to_string(),
        ))])
        .into_connection();

    let err = SettlementService::new(&db)
        .finalize(document())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Procedure { source: Some(_), .. }));
    assert!(err.is_connection_lost());
}
