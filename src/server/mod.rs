//! Server-side API backend.
//!
//! The backend follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, validation and DTO conversion
//! - **Service Layer** (`service/`) - Business rules such as the item sync batch and
//!   settlement finalization
//! - **Data Layer** (`data/`) - Repositories over SeaORM entities and stored procedure calls
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based settings
//! - **Connection** (`connection`) - Lazily (re)established database pool
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Tracing, connector construction and shutdown signal
//! - **Router** (`router`) - Route table, middleware and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the request and dispatches it to a controller
//! 2. **Controller** converts the DTO to params and acquires a database handle
//! 3. **Service** applies business rules through the data layer
//! 4. **Controller** converts the resulting domain model back into a DTO

pub mod config;
pub mod connection;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
