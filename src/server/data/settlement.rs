use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::server::model::settlement::{RegisterReceiptParams, Settlement};

pub struct SettlementRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettlementRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores the amounts received for an order, stamped with the current server time.
    ///
    /// # Arguments
    /// - `params` - Reseller, order and amounts (omitted amounts already zeroed)
    ///
    /// # Returns
    /// - `Ok(Settlement)` - The stored row
    /// - `Err(DbErr)` - Insert failed, including a second registration for the same
    ///   reseller and order
    pub async fn insert(&self, params: RegisterReceiptParams) -> Result<Settlement, DbErr> {
        let entity = entity::financial_settlement::ActiveModel {
            reseller_id: ActiveValue::Set(params.reseller_id),
            order_id: ActiveValue::Set(params.order_id),
            cash: ActiveValue::Set(params.cash),
            card: ActiveValue::Set(params.card),
            deposit_pix: ActiveValue::Set(params.deposit_pix),
            check: ActiveValue::Set(params.check),
            voucher: ActiveValue::Set(params.voucher),
            total_received: ActiveValue::Set(params.total_received),
            change: ActiveValue::Set(params.change),
            registered_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Settlement::from_entity(entity))
    }
}
