//! Database repository layer.
//!
//! Repositories wrap SeaORM queries for one table (or one family of stored procedures)
//! and convert entity models into the domain models of `server::model`. Repositories
//! that take part in the item synchronization transaction are generic over
//! `ConnectionTrait` so they run equally on a pool, a transaction or a savepoint.

pub mod app_error_log;
pub mod discount_rule;
pub mod order_item;
pub mod procedure;
pub mod promoter;
pub mod settlement;
