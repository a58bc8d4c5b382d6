use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter,
};

use crate::server::model::item::{ItemStatusUpdate, NewOrderItem, OFFLINE_USER, STATUS_IN_ORDER};

use entity::order_item::Column;

pub struct OrderItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderItemRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an item reported outside the order.
    ///
    /// Unit, negotiated and total values all take the reported value; the line is a
    /// single unit recorded by the offline user.
    ///
    /// # Returns
    /// - `Ok(Model)` - Inserted row with its generated `IPE_COD`
    /// - `Err(DbErr)` - Insert failed
    pub async fn insert(&self, item: NewOrderItem) -> Result<entity::order_item::Model, DbErr> {
        entity::order_item::ActiveModel {
            item_code: ActiveValue::Set(0),
            order_id: ActiveValue::Set(item.order_id),
            product_code: ActiveValue::Set(item.product_code),
            product_description: ActiveValue::Set(item.product_description),
            quantity: ActiveValue::Set(1),
            unit_value: ActiveValue::Set(item.value),
            negotiated_value: ActiveValue::Set(item.value),
            total_value: ActiveValue::Set(item.value),
            status: ActiveValue::Set(item.status),
            outside_order_flag: ActiveValue::Set(item.outside_order_flag),
            returned_at: ActiveValue::Set(item.returned_at),
            returned_by: ActiveValue::Set(item.returned_by),
            created_by: ActiveValue::Set(Some(OFFLINE_USER.to_string())),
            coupon_code: ActiveValue::Set(item.coupon_code),
            unit_code: ActiveValue::Set(item.unit_code),
            rescheduled_next_month: ActiveValue::Set(item.rescheduled_next_month),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Writes status, devolution and reschedule columns of an item.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of rows updated; 0 when the id does not exist
    /// - `Err(DbErr)` - Update failed
    pub async fn update_status(&self, id: i32, update: ItemStatusUpdate) -> Result<u64, DbErr> {
        let result = entity::prelude::OrderItem::update_many()
            .col_expr(Column::Status, Expr::value(update.status))
            .col_expr(Column::ReturnedAt, Expr::value(update.returned_at))
            .col_expr(Column::ReturnedBy, Expr::value(update.returned_by))
            .col_expr(
                Column::RescheduledNextMonth,
                Expr::value(update.rescheduled_next_month),
            )
            .filter(Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Restores an item to the cleared in-order state.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of rows updated; 0 when the id does not exist
    /// - `Err(DbErr)` - Update failed
    pub async fn undo_return(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::OrderItem::update_many()
            .col_expr(Column::Status, Expr::value(STATUS_IN_ORDER))
            .col_expr(Column::ReturnedAt, Expr::value(None::<DateTime<Utc>>))
            .col_expr(Column::ReturnedBy, Expr::value(None::<String>))
            .col_expr(Column::RescheduledNextMonth, Expr::value(false))
            .filter(Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes an item by id, returning the number of rows removed.
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::OrderItem::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::order_item::Model>, DbErr> {
        entity::prelude::OrderItem::find_by_id(id).one(self.db).await
    }
}
