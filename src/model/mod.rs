//! Wire DTOs exchanged with the promoter application.
//!
//! Field names follow the JSON contract the front-end already speaks (upper-case
//! column names and Portuguese keys), so most fields carry a `serde(rename)`.

pub mod api;
pub mod catalog;
pub mod item;
pub mod promoter;
pub mod settlement;
