use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Add entity tables (or request the full migrated schema), then call
/// `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Client, Company};
///
/// let test = TestBuilder::new()
///     .with_table(Company)
///     .with_table(Client)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// Run the migration crate instead of the entity-derived statements.
    migrations: bool,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            migrations: false,
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the order item table used by synchronization.
    pub fn with_item_tables(self) -> Self {
        self.with_table(OrderItem)
    }

    /// Adds the tables used by settlement registration and finalization.
    pub fn with_settlement_tables(self) -> Self {
        self.with_table(FinancialSettlement).with_table(AppErrorLog)
    }

    /// Adds the client and company tables used by promoter login.
    pub fn with_promoter_tables(self) -> Self {
        self.with_table(Company).with_table(Client)
    }

    /// Adds the discount type and rule tables.
    pub fn with_discount_tables(self) -> Self {
        self.with_table(DiscountType).with_table(DiscountRule)
    }

    /// Creates the schema through the migration crate, as `DB_RUN_MIGRATIONS` would.
    ///
    /// Any tables added with `with_table()` are ignored.
    pub fn with_migrations(mut self) -> Self {
        self.migrations = true;
        self
    }

    /// Builds and initializes the test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect, create tables or migrate
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        if self.migrations {
            setup.with_migrations().await?;
        } else {
            setup.with_tables(self.tables).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
