use sea_orm::DatabaseConnection;
use serde_json::Value;

use crate::server::{
    data::{discount_rule::DiscountRuleRepository, procedure::ProcedureRepository},
    error::AppError,
    model::catalog::{
        DiscountRule, DiscountRulesParams, OrderItemsFilter, PendingSettlementsParams,
    },
};

/// Read-only listings for the promoter application.
pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn order_items(&self, filter: OrderItemsFilter) -> Result<Vec<Value>, AppError> {
        tracing::debug!("Listing order items for {:?}", filter);

        Ok(ProcedureRepository::new(self.db)
            .items_by_reseller_or_order(filter)
            .await?)
    }

    pub async fn general_products(&self) -> Result<Vec<Value>, AppError> {
        Ok(ProcedureRepository::new(self.db).general_products().await?)
    }

    pub async fn pending_settlements(
        &self,
        params: PendingSettlementsParams,
    ) -> Result<Vec<Value>, AppError> {
        tracing::debug!("Listing pending settlements for CLI_COD {}", params.promoter_id);

        Ok(ProcedureRepository::new(self.db)
            .pending_settlements(params)
            .await?)
    }

    pub async fn discount_rules(
        &self,
        params: DiscountRulesParams,
    ) -> Result<Vec<DiscountRule>, AppError> {
        let rules = DiscountRuleRepository::new(self.db)
            .get_by_order(params.order_id)
            .await?;

        tracing::debug!("Found {} discount rule(s) for PED_COD {}", rules.len(), params.order_id);

        Ok(rules)
    }
}
