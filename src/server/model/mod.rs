//! Server-side domain models and parameter types.
//!
//! This module contains the types the service layer works with. Request DTOs are
//! validated into parameter types at the controller boundary (`from_dto`), entity models
//! are converted into domain models at the repository boundary, and domain models are
//! turned back into DTOs (`into_dto`) before leaving the controller.

pub mod catalog;
pub mod item;
pub mod promoter;
pub mod settlement;
