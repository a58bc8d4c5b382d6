//! HTTP request handlers.
//!
//! Controllers convert request DTOs into validated parameters, acquire the database pool,
//! call the matching service and convert the result back into a response DTO. Every
//! failure is tagged with the endpoint's client-facing message through
//! `AppError::context`.

pub mod catalog;
pub mod item;
pub mod promoter;
pub mod settlement;

#[cfg(test)]
mod test;
