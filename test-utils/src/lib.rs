//! Promoter Sync Test Utils
//!
//! Provides shared testing utilities for the promoter sync API. This crate offers a
//! builder for creating test contexts backed by in-memory SQLite databases, plus factories
//! for the sales tables the API reads and writes.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Row factories with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_item_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_item_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let item = factory::order_item::create_order_item(db, 500).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
