use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a discount type with a unique description.
pub async fn create_discount_type(
    db: &DatabaseConnection,
) -> Result<entity::discount_type::Model, DbErr> {
    entity::discount_type::ActiveModel {
        description: ActiveValue::Set(format!("Desconto {}", next_id())),
        ..Default::default()
    }
    .insert(db)
    .await
}
