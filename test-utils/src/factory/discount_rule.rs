use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct DiscountRuleFactory<'a> {
    db: &'a DatabaseConnection,
    order_id: i32,
    discount_type_id: i32,
    group_id: i32,
    range_from: Decimal,
    range_to: Decimal,
    percent: Decimal,
    bonus_percent: Option<Decimal>,
}

impl<'a> DiscountRuleFactory<'a> {
    /// Defaults to group 2, a 0-1000 band at 10% and no bonus.
    pub fn new(db: &'a DatabaseConnection, order_id: i32, discount_type_id: i32) -> Self {
        Self {
            db,
            order_id,
            discount_type_id,
            group_id: 2,
            range_from: Decimal::ZERO,
            range_to: Decimal::new(1000, 0),
            percent: Decimal::new(10, 0),
            bonus_percent: None,
        }
    }

    pub fn group_id(mut self, group_id: i32) -> Self {
        self.group_id = group_id;
        self
    }

    pub fn range(mut self, from: Decimal, to: Decimal) -> Self {
        self.range_from = from;
        self.range_to = to;
        self
    }

    pub fn percent(mut self, percent: Decimal) -> Self {
        self.percent = percent;
        self
    }

    pub fn bonus_percent(mut self, bonus_percent: Decimal) -> Self {
        self.bonus_percent = Some(bonus_percent);
        self
    }

    pub async fn build(self) -> Result<entity::discount_rule::Model, DbErr> {
        entity::discount_rule::ActiveModel {
            order_id: ActiveValue::Set(self.order_id),
            discount_type_id: ActiveValue::Set(self.discount_type_id),
            group_id: ActiveValue::Set(self.group_id),
            range_from: ActiveValue::Set(self.range_from),
            range_to: ActiveValue::Set(self.range_to),
            percent: ActiveValue::Set(self.percent),
            bonus_percent: ActiveValue::Set(self.bonus_percent),
            grace_percent: ActiveValue::Set(None),
            loss_percent: ActiveValue::Set(None),
            grace_settlements: ActiveValue::Set(None),
            discount_on_total_sale: ActiveValue::Set(Some(false)),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_discount_rule(
    db: &DatabaseConnection,
    order_id: i32,
    discount_type_id: i32,
) -> Result<entity::discount_rule::Model, DbErr> {
    DiscountRuleFactory::new(db, order_id, discount_type_id)
        .build()
        .await
}
