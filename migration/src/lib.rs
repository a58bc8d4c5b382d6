//! Schema for the sales tables this service reads and writes.
//!
//! Production runs against an externally owned database, so these migrations are only
//! applied when `DB_RUN_MIGRATIONS` is enabled (local development) and by the test
//! harness.

pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_company_table;
mod m20260105_000002_create_client_table;
mod m20260105_000003_create_order_item_table;
mod m20260105_000004_create_financial_settlement_table;
mod m20260105_000005_create_discount_type_table;
mod m20260105_000006_create_discount_rule_table;
mod m20260105_000007_create_app_error_log_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_company_table::Migration),
            Box::new(m20260105_000002_create_client_table::Migration),
            Box::new(m20260105_000003_create_order_item_table::Migration),
            Box::new(m20260105_000004_create_financial_settlement_table::Migration),
            Box::new(m20260105_000005_create_discount_type_table::Migration),
            Box::new(m20260105_000006_create_discount_rule_table::Migration),
            Box::new(m20260105_000007_create_app_error_log_table::Migration),
        ]
    }
}
