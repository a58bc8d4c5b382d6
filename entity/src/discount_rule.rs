use sea_orm::entity::prelude::*;

/// Discount band applied to an order (`cad_dpd`).
///
/// The table has no surrogate key; a band is identified by order, discount type
/// and group.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "cad_dpd")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "PED_COD")]
    pub order_id: i32,
    #[sea_orm(primary_key, auto_increment = false, column_name = "TDP_COD")]
    pub discount_type_id: i32,
    #[sea_orm(primary_key, auto_increment = false, column_name = "GRU_COD")]
    pub group_id: i32,
    #[sea_orm(column_name = "DE", column_type = "Decimal(Some((10, 2)))")]
    pub range_from: Decimal,
    #[sea_orm(column_name = "ATE", column_type = "Decimal(Some((10, 2)))")]
    pub range_to: Decimal,
    #[sea_orm(column_name = "PORC", column_type = "Decimal(Some((10, 2)))")]
    pub percent: Decimal,
    #[sea_orm(column_name = "PORC_BONUS", column_type = "Decimal(Some((10, 2)))")]
    pub bonus_percent: Option<Decimal>,
    #[sea_orm(column_name = "PORC_CARENCIA", column_type = "Decimal(Some((10, 2)))")]
    pub grace_percent: Option<Decimal>,
    #[sea_orm(column_name = "PORC_PERDA", column_type = "Decimal(Some((10, 2)))")]
    pub loss_percent: Option<Decimal>,
    #[sea_orm(column_name = "QTDE_ACERTO_CARENCIA")]
    pub grace_settlements: Option<i32>,
    #[sea_orm(column_name = "DESC_VENDA_TOTAL")]
    pub discount_on_total_sale: Option<bool>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::discount_type::Entity",
        from = "Column::DiscountTypeId",
        to = "super::discount_type::Column::Id"
    )]
    DiscountType,
}

impl Related<super::discount_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiscountType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
