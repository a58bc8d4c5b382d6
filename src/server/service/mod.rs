//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They own transaction
//! boundaries, apply the business rules that decide what to write, and translate
//! repository results into domain outcomes or `AppError`s.

pub mod catalog;
pub mod item;
pub mod promoter;
pub mod settlement;
