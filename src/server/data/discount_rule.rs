use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::catalog::DiscountRule;

use entity::discount_rule::Column;

pub struct DiscountRuleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiscountRuleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the discount bands of an order with their type description.
    ///
    /// Bands whose discount type no longer exists are skipped. Results are ordered by
    /// type, group and lower bound.
    pub async fn get_by_order(&self, order_id: i32) -> Result<Vec<DiscountRule>, DbErr> {
        let rows = entity::prelude::DiscountRule::find()
            .find_also_related(entity::prelude::DiscountType)
            .filter(Column::OrderId.eq(order_id))
            .filter(entity::discount_type::Column::Id.is_not_null())
            .order_by_asc(Column::DiscountTypeId)
            .order_by_asc(Column::GroupId)
            .order_by_asc(Column::RangeFrom)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(rule, discount_type)| DiscountRule::from_entity(rule, discount_type))
            .collect())
    }
}
