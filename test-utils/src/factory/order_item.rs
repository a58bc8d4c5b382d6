//! Order item factory.
//!
//! Defaults produce a regular order line (status 1, not outside the order, no
//! devolution recorded).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

pub struct OrderItemFactory<'a> {
    db: &'a DatabaseConnection,
    order_id: i32,
    product_code: String,
    value: Decimal,
    status: i32,
    outside_order_flag: Option<i32>,
    returned_at: Option<DateTime<Utc>>,
    returned_by: Option<String>,
    rescheduled_next_month: bool,
}

impl<'a> OrderItemFactory<'a> {
    /// Creates a new OrderItemFactory with default values.
    ///
    /// Defaults:
    /// - product_code: `"REF-{id}"`
    /// - value: `10.00`
    /// - status: `1`
    /// - outside_order_flag: `None`
    /// - returned_at / returned_by: `None`
    /// - rescheduled_next_month: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `order_id` - Order (`PED_COD`) the item belongs to
    pub fn new(db: &'a DatabaseConnection, order_id: i32) -> Self {
        Self {
            db,
            order_id,
            product_code: format!("REF-{}", next_id()),
            value: Decimal::new(1000, 2),
            status: 1,
            outside_order_flag: None,
            returned_at: None,
            returned_by: None,
            rescheduled_next_month: false,
        }
    }

    pub fn value(mut self, value: Decimal) -> Self {
        self.value = value;
        self
    }

    pub fn status(mut self, status: i32) -> Self {
        self.status = status;
        self
    }

    /// Marks the item as reported outside the order.
    pub fn outside_order(mut self) -> Self {
        self.outside_order_flag = Some(1);
        self
    }

    /// Records a devolution at `returned_at` by `returned_by`.
    pub fn returned(mut self, returned_at: DateTime<Utc>, returned_by: impl Into<String>) -> Self {
        self.returned_at = Some(returned_at);
        self.returned_by = Some(returned_by.into());
        self
    }

    pub fn rescheduled_next_month(mut self, rescheduled: bool) -> Self {
        self.rescheduled_next_month = rescheduled;
        self
    }

    /// Builds and inserts the order item.
    ///
    /// # Returns
    /// - `Ok(entity::order_item::Model)` - Created item with its generated `IPE_COD`
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::order_item::Model, DbErr> {
        entity::order_item::ActiveModel {
            item_code: ActiveValue::Set(0),
            order_id: ActiveValue::Set(self.order_id),
            product_code: ActiveValue::Set(Some(self.product_code)),
            product_description: ActiveValue::Set(Some("Produto de teste".to_string())),
            quantity: ActiveValue::Set(1),
            unit_value: ActiveValue::Set(self.value),
            negotiated_value: ActiveValue::Set(self.value),
            total_value: ActiveValue::Set(self.value),
            status: ActiveValue::Set(self.status),
            outside_order_flag: ActiveValue::Set(self.outside_order_flag),
            returned_at: ActiveValue::Set(self.returned_at),
            returned_by: ActiveValue::Set(self.returned_by),
            created_by: ActiveValue::Set(Some("factory".to_string())),
            coupon_code: ActiveValue::Set(None),
            unit_code: ActiveValue::Set(None),
            rescheduled_next_month: ActiveValue::Set(self.rescheduled_next_month),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_order_item(
    db: &DatabaseConnection,
    order_id: i32,
) -> Result<entity::order_item::Model, DbErr> {
    OrderItemFactory::new(db, order_id).build().await
}
