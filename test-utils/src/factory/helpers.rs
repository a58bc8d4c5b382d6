//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a company and an active promoter working for it.
///
/// # Arguments
/// - `db` - Database connection
/// - `document` - Promoter document (CPF), also the login secret
///
/// # Returns
/// - `Ok((company, promoter))` - Created rows
/// - `Err(DbErr)` - Database error during creation
pub async fn create_promoter_with_company(
    db: &DatabaseConnection,
    document: &str,
) -> Result<(entity::company::Model, entity::client::Model), DbErr> {
    let company = crate::factory::company::create_company(db).await?;
    let promoter = crate::factory::client::create_promoter(db, company.id, document).await?;

    Ok((company, promoter))
}
