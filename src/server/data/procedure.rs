//! Stored procedure calls.
//!
//! The sales database exposes part of its logic as stored procedures. They are invoked
//! through [`ProcedureCall`], which binds every argument positionally and renders the
//! call syntax for the connected backend. Result rows are returned as JSON objects keyed
//! by the procedure's column names, untouched.

use sea_orm::{ConnectionTrait, DbBackend, DbErr, FromQueryResult, Statement, Value};
use serde_json::Value as JsonValue;

use crate::server::model::catalog::{OrderItemsFilter, PendingSettlementsParams, ACTIVE_PRODUCTS};

pub const ITEMS_BY_RESELLER: &str = "sp_consulta_ipe_via_rev";
pub const FINALIZE_SETTLEMENT: &str = "sp_app_acerto";
pub const GENERAL_PRODUCTS: &str = "sp_return_cup_digitacao";
pub const PENDING_SETTLEMENTS: &str = "sp_cobranca_acerto";

/// A procedure invocation with positional arguments.
#[derive(Debug, Clone)]
pub struct ProcedureCall {
    name: &'static str,
    args: Vec<Value>,
}

impl ProcedureCall {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            args: Vec::new(),
        }
    }

    /// Appends the next positional argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.args.push(value.into());
        self
    }

    /// Renders the call for a backend.
    ///
    /// # Returns
    /// - `Ok(Statement)` - `SELECT * FROM name($1, ..)` on PostgreSQL, `CALL name(?, ..)`
    ///   on MySQL
    /// - `Err(DbErr::Custom)` - The backend has no stored procedures
    pub fn statement(&self, backend: DbBackend) -> Result<Statement, DbErr> {
        let sql = match backend {
            DbBackend::Postgres => {
                let placeholders: Vec<String> =
                    (1..=self.args.len()).map(|i| format!("${}", i)).collect();
                format!("SELECT * FROM {}({})", self.name, placeholders.join(", "))
            }
            DbBackend::MySql => {
                let placeholders = vec!["?"; self.args.len()];
                format!("CALL {}({})", self.name, placeholders.join(", "))
            }
            other => {
                return Err(DbErr::Custom(format!(
                    "Stored procedure {} cannot run on {:?}",
                    self.name, other
                )))
            }
        };

        Ok(Statement::from_sql_and_values(
            backend,
            sql,
            self.args.clone(),
        ))
    }

    /// Runs the call and returns every result row.
    pub async fn rows<C: ConnectionTrait>(&self, db: &C) -> Result<Vec<JsonValue>, DbErr> {
        let statement = self.statement(db.get_database_backend())?;

        tracing::debug!("Calling procedure {} with {} argument(s)", self.name, self.args.len());

        JsonValue::find_by_statement(statement).all(db).await
    }
}

pub struct ProcedureRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProcedureRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists the items of an order, or of every order of a reseller.
    pub async fn items_by_reseller_or_order(
        &self,
        filter: OrderItemsFilter,
    ) -> Result<Vec<JsonValue>, DbErr> {
        let (reseller_id, order_id) = match filter {
            OrderItemsFilter::Reseller(id) => (Some(id), None),
            OrderItemsFilter::Order(id) => (None, Some(id)),
        };

        ProcedureCall::new(ITEMS_BY_RESELLER)
            .arg(reseller_id)
            .arg(order_id)
            .rows(self.db)
            .await
    }

    /// Hands the settlement document to the database as a single JSON text argument.
    ///
    /// # Returns
    /// - `Ok(Some(row))` - First result row (`FCS_COD`, `MSG_RETORNO`)
    /// - `Ok(None)` - The procedure returned no rows
    /// - `Err(DbErr)` - The call failed
    pub async fn finalize_settlement(
        &self,
        document: &JsonValue,
    ) -> Result<Option<JsonValue>, DbErr> {
        let rows = ProcedureCall::new(FINALIZE_SETTLEMENT)
            .arg(document.to_string())
            .rows(self.db)
            .await?;

        Ok(rows.into_iter().next())
    }

    pub async fn general_products(&self) -> Result<Vec<JsonValue>, DbErr> {
        ProcedureCall::new(GENERAL_PRODUCTS)
            .arg(ACTIVE_PRODUCTS)
            .rows(self.db)
            .await
    }

    pub async fn pending_settlements(
        &self,
        params: PendingSettlementsParams,
    ) -> Result<Vec<JsonValue>, DbErr> {
        ProcedureCall::new(PENDING_SETTLEMENTS)
            .arg(params.company_id)
            .arg(params.overdue_only)
            .arg(params.reseller_id)
            .arg(params.kind)
            .arg(params.full_address)
            .arg(params.promoter_id)
            .rows(self.db)
            .await
    }
}
