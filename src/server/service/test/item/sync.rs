use super::*;

/// Tests a mixed batch covering every action.
///
/// Verifies that update, undo, insert, delete and no-op items are applied in one
/// transaction and counted separately.
///
/// Expected: sincronizados 2, inseridos 1, deletados 1, one outcome per item
#[tokio::test]
async fn applies_mixed_batch() {
    let test = TestBuilder::new().with_item_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let returned = factory::create_order_item(db, 500).await.unwrap();
    let restored = factory::order_item::OrderItemFactory::new(db, 500)
        .status(2)
        .returned(Utc::now(), "maria")
        .build()
        .await
        .unwrap();
    let removed = factory::order_item::OrderItemFactory::new(db, 500)
        .outside_order()
        .status(9)
        .build()
        .await
        .unwrap();

    let items = vec![
        ItemRecord {
            id: Some(returned.id),
            status: Some(2),
            returned_by: Some("joao".to_string()),
            ..Default::default()
        },
        ItemRecord {
            id: Some(restored.id),
            status: Some(1),
            ..Default::default()
        },
        new_outside_item(500, "tmp-1"),
        ItemRecord {
            id: Some(removed.id),
            status: Some(1),
            outside_order: true,
            ..Default::default()
        },
        ItemRecord::default(),
    ];

    let summary = ItemSyncService::new(db).sync(batch(items)).await.unwrap();

    assert_eq!(summary.outcomes.len(), 5);
    assert_eq!(summary.synced(), 2);
    assert_eq!(summary.inserted(), 1);
    assert_eq!(summary.deleted(), 1);
    assert_eq!(summary.outcomes[4], ItemOutcome::NoOp);

    let stored = entity::prelude::OrderItem::find_by_id(returned.id)
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, 2);
    assert_eq!(stored.returned_by.as_deref(), Some("joao"));

    let stored = entity::prelude::OrderItem::find_by_id(restored.id)
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, 1);
    assert_eq!(stored.returned_by, None);

    assert!(entity::prelude::OrderItem::find_by_id(removed.id)
        .one(db)
        .await
        .unwrap()
        .is_none());
}

/// Tests that inserted items report their new id with index and correlation id.
///
/// Expected: Ids distinct from each other and from the existing row
#[tokio::test]
async fn reports_inserted_ids() {
    let test = TestBuilder::new().with_item_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_order_item(db, 500).await.unwrap();

    let summary = ItemSyncService::new(db)
        .sync(batch(vec![
            new_outside_item(500, "a"),
            new_outside_item(500, "b"),
        ]))
        .await
        .unwrap();

    let dto = summary.into_dto();
    let inserted = &dto.detalhes.itens_inseridos;

    assert_eq!(inserted.len(), 2);
    assert_eq!(inserted[0].indice, 0);
    assert_eq!(inserted[1].indice, 1);
    assert_eq!(inserted[0].cup_cdi, Some(Value::from("a")));
    assert_eq!(inserted[1].cup_cdi, Some(Value::from("b")));
    assert_ne!(inserted[0].ipe_cod, inserted[1].ipe_cod);
    assert!(inserted.iter().all(|i| i.ipe_cod != existing.id));
}

/// Tests deleting an outside-order item that was never persisted.
///
/// Expected: Unaffected outcome, no row removed, nothing counted
#[tokio::test]
async fn delete_without_id_is_skipped() {
    let test = TestBuilder::new().with_item_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_order_item(db, 500).await.unwrap();

    let summary = ItemSyncService::new(db)
        .sync(batch(vec![ItemRecord {
            status: Some(1),
            outside_order: true,
            ..Default::default()
        }]))
        .await
        .unwrap();

    assert_eq!(
        summary.outcomes,
        vec![ItemOutcome::Unaffected {
            action: ItemAction::Delete { id: None }
        }]
    );
    assert_eq!(summary.deleted(), 0);
    assert_eq!(
        entity::prelude::OrderItem::find().all(db).await.unwrap().len(),
        1
    );
}

/// Tests updates and undos for ids that do not exist.
///
/// Expected: Unaffected outcomes, sincronizados 0
#[tokio::test]
async fn missing_rows_are_not_counted() {
    let test = TestBuilder::new().with_item_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let summary = ItemSyncService::new(db)
        .sync(batch(vec![
            ItemRecord {
                id: Some(404),
                status: Some(2),
                ..Default::default()
            },
            ItemRecord {
                id: Some(405),
                status: Some(1),
                ..Default::default()
            },
        ]))
        .await
        .unwrap();

    assert_eq!(summary.synced(), 0);
    assert!(summary
        .outcomes
        .iter()
        .all(|o| matches!(o, ItemOutcome::Unaffected { .. })));
}

/// Tests that an item missing mandatory columns fails alone.
///
/// Expected: Failed outcome for the insert, the following update still applied
#[tokio::test]
async fn invalid_item_does_not_abort_batch() {
    let test = TestBuilder::new().with_item_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let item = factory::create_order_item(db, 500).await.unwrap();

    let mut missing_order = new_outside_item(500, "x");
    missing_order.order_id = None;

    let summary = ItemSyncService::new(db)
        .sync(batch(vec![
            missing_order,
            ItemRecord {
                id: Some(item.id),
                status: Some(3),
                ..Default::default()
            },
        ]))
        .await
        .unwrap();

    assert!(matches!(summary.outcomes[0], ItemOutcome::Failed { .. }));
    assert_eq!(summary.outcomes[1], ItemOutcome::Updated { id: item.id });

    let dto = summary.into_dto();
    assert_eq!(dto.detalhes.itens_com_falha.len(), 1);
    assert_eq!(dto.detalhes.itens_com_falha[0].indice, 0);
    assert!(dto.detalhes.itens_com_falha[0].erro.contains("PED_COD"));
}

/// Tests that a statement rejected by the database only discards its own item.
///
/// Uses a trigger that rejects status 7 so the failure happens inside the database,
/// between two successful items.
///
/// Expected: Items before and after the failure committed, failing item untouched
#[tokio::test]
async fn database_failure_is_isolated_to_item() {
    let test = TestBuilder::new().with_item_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    db.execute_unprepared(
        "CREATE TRIGGER reject_status_seven BEFORE UPDATE ON CAD_IPE \
         WHEN NEW.IPE_STA = 7 BEGIN SELECT RAISE(ABORT, 'status 7 rejected'); END;",
    )
    .await
    .unwrap();

    let first = factory::create_order_item(db, 500).await.unwrap();
    let rejected = factory::create_order_item(db, 500).await.unwrap();

    let summary = ItemSyncService::new(db)
        .sync(batch(vec![
            ItemRecord {
                id: Some(first.id),
                status: Some(2),
                ..Default::default()
            },
            ItemRecord {
                id: Some(rejected.id),
                status: Some(7),
                ..Default::default()
            },
            new_outside_item(500, "after"),
        ]))
        .await
        .unwrap();

    assert_eq!(summary.outcomes[0], ItemOutcome::Updated { id: first.id });
    assert!(matches!(summary.outcomes[1], ItemOutcome::Failed { .. }));
    assert!(matches!(summary.outcomes[2], ItemOutcome::Inserted { .. }));

    let stored = entity::prelude::OrderItem::find_by_id(first.id)
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, 2);

    let stored = entity::prelude::OrderItem::find_by_id(rejected.id)
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, 1);

    assert_eq!(
        entity::prelude::OrderItem::find().all(db).await.unwrap().len(),
        3
    );
}

/// Tests the count invariant over a batch with every kind of outcome.
///
/// Expected: Counted items never exceed the batch size
#[tokio::test]
async fn counts_never_exceed_batch() {
    let test = TestBuilder::new().with_item_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let item = factory::create_order_item(db, 500).await.unwrap();

    let items = vec![
        ItemRecord {
            id: Some(item.id),
            status: Some(2),
            reschedule_next_month: Some(Some(true)),
            ..Default::default()
        },
        ItemRecord {
            id: Some(item.id),
            status: Some(1),
            ..Default::default()
        },
        ItemRecord {
            reschedule_next_month: Some(Some(false)),
            ..Default::default()
        },
        new_outside_item(500, "z"),
        ItemRecord::default(),
    ];
    let len = items.len();

    let summary = ItemSyncService::new(db).sync(batch(items)).await.unwrap();

    assert_eq!(summary.outcomes.len(), len);
    assert!(summary.synced() + summary.inserted() + summary.deleted() <= len);
}

/// Tests that a failed commit leaves no trace of the batch.
///
/// A deferred foreign key is broken by a trigger on status 5, so every statement and
/// savepoint succeeds and only the final commit is refused.
///
/// Expected: Err, updated row keeps its status and no inserted row persists
#[tokio::test]
async fn failed_commit_persists_nothing() {
    let test = TestBuilder::new().with_item_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for statement in [
        "PRAGMA foreign_keys = ON;",
        "CREATE TABLE sync_guard_parent (id INTEGER PRIMARY KEY);",
        "CREATE TABLE sync_guard (parent_id INTEGER \
         REFERENCES sync_guard_parent(id) DEFERRABLE INITIALLY DEFERRED);",
        "CREATE TRIGGER guard_status_five AFTER UPDATE ON CAD_IPE \
         WHEN NEW.IPE_STA = 5 BEGIN INSERT INTO sync_guard(parent_id) VALUES (1); END;",
    ] {
        db.execute_unprepared(statement).await.unwrap();
    }

    let item = factory::create_order_item(db, 500).await.unwrap();
    let before = entity::prelude::OrderItem::find().all(db).await.unwrap().len();

    let result = ItemSyncService::new(db)
        .sync(batch(vec![
            new_outside_item(500, "before"),
            ItemRecord {
                id: Some(item.id),
                status: Some(5),
                ..Default::default()
            },
        ]))
        .await;

    assert!(result.is_err());

    let stored = entity::prelude::OrderItem::find_by_id(item.id)
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, item.status);

    let after = entity::prelude::OrderItem::find().all(db).await.unwrap().len();
    assert_eq!(after, before);
}
