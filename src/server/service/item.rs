use sea_orm::{ConnectionTrait, DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::server::{
    data::order_item::OrderItemRepository,
    error::{item::ItemError, AppError},
    model::item::{
        classify, ItemAction, ItemOutcome, ItemRecord, ItemStatusUpdate, NewOrderItem,
        SyncItemsParams, SyncSummary,
    },
};

pub struct ItemSyncService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemSyncService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Applies a synchronization batch in one transaction.
    ///
    /// Items are processed in order. Entries that could not be parsed fail without
    /// touching the database. Each item that touches the database runs in its own
    /// savepoint, so a failing item only discards its own work and is reported in the
    /// summary instead of aborting the batch.
    ///
    /// # Returns
    /// - `Ok(SyncSummary)` - One outcome per item, transaction committed
    /// - `Err(AppError::DbErr)` - The transaction could not be opened or committed;
    ///   nothing was written
    pub async fn sync(&self, params: SyncItemsParams) -> Result<SyncSummary, AppError> {
        let txn = self.db.begin().await?;
        let mut outcomes = Vec::with_capacity(params.items.len());

        for (index, entry) in params.items.into_iter().enumerate() {
            let item = match entry {
                Ok(item) => item,
                Err(err) => {
                    tracing::error!("Item {} rejected: {}", index, err);
                    outcomes.push(ItemOutcome::Failed {
                        error: err.to_string(),
                    });
                    continue;
                }
            };

            let action = classify(&item);

            let outcome = match action {
                ItemAction::NoOp => ItemOutcome::NoOp,
                ItemAction::Delete { id: None } | ItemAction::Update { id: None } => {
                    ItemOutcome::Unaffected { action }
                }
                _ => match apply_isolated(&txn, &item, action).await {
                    Ok(outcome) => outcome,
                    Err(err) => ItemOutcome::Failed {
                        error: err.to_string(),
                    },
                },
            };

            log_outcome(index, &item, &outcome);
            outcomes.push(outcome);
        }

        txn.commit().await?;

        let summary = SyncSummary { outcomes };
        tracing::info!(
            "Synchronized {} item(s): {} updated, {} inserted, {} deleted, {} failed",
            summary.outcomes.len(),
            summary.synced(),
            summary.inserted(),
            summary.deleted(),
            summary.failed()
        );

        Ok(summary)
    }
}

/// Runs one item's action inside a savepoint of the batch transaction.
async fn apply_isolated(
    txn: &DatabaseTransaction,
    item: &ItemRecord,
    action: ItemAction,
) -> Result<ItemOutcome, ItemError> {
    let savepoint = txn.begin().await?;

    match apply(&savepoint, item, action).await {
        Ok(outcome) => {
            savepoint.commit().await?;
            Ok(outcome)
        }
        Err(err) => {
            if let Err(rollback_err) = savepoint.rollback().await {
                tracing::error!("Failed to roll back item savepoint: {}", rollback_err);
            }
            Err(err)
        }
    }
}

async fn apply<C: ConnectionTrait>(
    db: &C,
    item: &ItemRecord,
    action: ItemAction,
) -> Result<ItemOutcome, ItemError> {
    let repo = OrderItemRepository::new(db);

    let outcome = match action {
        ItemAction::Insert => {
            let inserted = repo.insert(NewOrderItem::from_record(item)?).await?;
            ItemOutcome::Inserted {
                id: inserted.id,
                correlation_id: item.correlation_id.clone(),
            }
        }
        ItemAction::Update { id: Some(id) } => {
            let rows = repo
                .update_status(id, ItemStatusUpdate::from_record(item)?)
                .await?;
            touched(rows, ItemOutcome::Updated { id }, action)
        }
        ItemAction::Undo { id } => {
            let rows = repo.undo_return(id).await?;
            touched(rows, ItemOutcome::Undone { id }, action)
        }
        ItemAction::Delete { id: Some(id) } => {
            let rows = repo.delete(id).await?;
            touched(rows, ItemOutcome::Deleted { id }, action)
        }
        ItemAction::Delete { id: None } | ItemAction::Update { id: None } => {
            ItemOutcome::Unaffected { action }
        }
        ItemAction::NoOp => ItemOutcome::NoOp,
    };

    Ok(outcome)
}

fn touched(rows: u64, outcome: ItemOutcome, action: ItemAction) -> ItemOutcome {
    if rows > 0 {
        outcome
    } else {
        ItemOutcome::Unaffected { action }
    }
}

fn log_outcome(index: usize, item: &ItemRecord, outcome: &ItemOutcome) {
    match outcome {
        ItemOutcome::Inserted { id, .. } => {
            tracing::debug!("Item {} inserted as IPE_COD {}", index, id)
        }
        ItemOutcome::Updated { id } => tracing::debug!("Item {} (IPE_COD {}) updated", index, id),
        ItemOutcome::Undone { id } => {
            tracing::debug!("Item {} (IPE_COD {}) devolution undone", index, id)
        }
        ItemOutcome::Deleted { id } => tracing::debug!("Item {} (IPE_COD {}) deleted", index, id),
        ItemOutcome::Unaffected { action } => match item.id {
            Some(id) => tracing::warn!(
                "Item {} (IPE_COD {}): {} matched no row",
                index,
                id,
                action.name()
            ),
            None => tracing::warn!("Item {}: {} skipped, no IPE_COD", index, action.name()),
        },
        ItemOutcome::NoOp => tracing::debug!("Item {}: nothing to do", index),
        ItemOutcome::Failed { error } => {
            tracing::error!("Item {} (IPE_COD {:?}) failed: {}", index, item.id, error)
        }
    }
}
