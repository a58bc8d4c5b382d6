use thiserror::Error;

/// Failure of a single item inside a synchronization batch.
///
/// Recorded against the item and logged; never aborts the batch or its transaction.
#[derive(Error, Debug)]
pub enum ItemError {
    /// The entry is not an object or one of its fields has an unusable shape.
    #[error("Invalid item: {0}")]
    Malformed(String),

    /// The item's action needs a field the client did not send.
    #[error("Missing required field {0}")]
    MissingField(&'static str),

    /// The statement for this item failed and its savepoint was rolled back.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
