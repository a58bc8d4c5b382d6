//! SeaORM entities for the externally owned sales database.
//!
//! Table and column names mirror the production schema verbatim; Rust field names
//! describe what each column holds.

pub mod prelude;

pub mod app_error_log;
pub mod client;
pub mod company;
pub mod discount_rule;
pub mod discount_type;
pub mod financial_settlement;
pub mod order_item;
