//! Factory methods for creating test data.
//!
//! Each table has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Defaults
//! let item = factory::create_order_item(&db, 500).await?;
//!
//! // Customized
//! let promoter = factory::client::ClientFactory::new(&db, company.id)
//!     .document("12345678900")
//!     .group_id(2)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `company` - Companies (`cad_emp`)
//! - `client` - Clients and promoters (`CAD_CLI`)
//! - `order_item` - Order items (`CAD_IPE`)
//! - `discount_type` / `discount_rule` - Discount bands (`cad_tdp`, `cad_dpd`)
//! - `app_error_log` - Procedure error journal (`log_app_error`)
//! - `helpers` - Unique ids and multi-table setups

pub mod app_error_log;
pub mod client;
pub mod company;
pub mod discount_rule;
pub mod discount_type;
pub mod helpers;
pub mod order_item;

pub use app_error_log::create_app_error;
pub use client::create_promoter;
pub use company::create_company;
pub use discount_rule::create_discount_rule;
pub use discount_type::create_discount_type;
pub use order_item::create_order_item;
