use super::*;

/// Tests reading the newest journal entry.
///
/// Expected: The entry inserted last
#[tokio::test]
async fn returns_newest_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_settlement_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_app_error(db, 1, "sp_app_acerto", 10, "antigo").await?;
    factory::create_app_error(db, 2, "sp_app_acerto", 20, "recente").await?;

    let repo = AppErrorLogRepository::new(db);
    let entry = repo.latest().await?.unwrap();

    assert_eq!(entry.number, Some(2));
    assert_eq!(entry.message.as_deref(), Some("recente"));

    Ok(())
}

/// Tests an empty journal.
///
/// Expected: None
#[tokio::test]
async fn none_when_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_settlement_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AppErrorLogRepository::new(db);
    assert!(repo.latest().await?.is_none());

    Ok(())
}
