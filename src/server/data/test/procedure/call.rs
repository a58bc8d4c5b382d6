use super::*;

/// Tests PostgreSQL rendering.
///
/// Expected: Function call with numbered placeholders and bound values
#[test]
fn renders_postgres_function_call() {
    let statement = ProcedureCall::new("sp_consulta_ipe_via_rev")
        .arg(Some(10))
        .arg(None::<i32>)
        .statement(DbBackend::Postgres)
        .unwrap();

    assert_eq!(statement.sql, "SELECT * FROM sp_consulta_ipe_via_rev($1, $2)");
    assert_eq!(statement.values.unwrap().0.len(), 2);
}

/// Tests MySQL rendering.
///
/// Expected: CALL with question-mark placeholders
#[test]
fn renders_mysql_call() {
    let statement = ProcedureCall::new("sp_return_cup_digitacao")
        .arg(1)
        .statement(DbBackend::MySql)
        .unwrap();

    assert_eq!(statement.sql, "CALL sp_return_cup_digitacao(?)");
}

/// Tests a call without arguments.
///
/// Expected: Empty argument list
#[test]
fn renders_call_without_arguments() {
    let statement = ProcedureCall::new("sp_ping")
        .statement(DbBackend::Postgres)
        .unwrap();

    assert_eq!(statement.sql, "SELECT * FROM sp_ping()");
}

/// Tests a backend without stored procedures.
///
/// Expected: Err(DbErr::Custom)
#[test]
fn sqlite_has_no_procedures() {
    let result = ProcedureCall::new("sp_app_acerto").statement(DbBackend::Sqlite);

    assert!(matches!(result, Err(DbErr::Custom(_))));
}
