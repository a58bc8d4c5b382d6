use sea_orm::entity::prelude::*;

/// Order item (`CAD_IPE`), a line of an order trackable for devolution and rescheduling.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "CAD_IPE")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "IPE_COD")]
    pub id: i32,
    #[sea_orm(column_name = "IPE_CODI")]
    pub item_code: i32,
    #[sea_orm(column_name = "PED_COD")]
    pub order_id: i32,
    /// Product reference, fed from the client's `CUP_REF`.
    #[sea_orm(column_name = "PRO_CDC")]
    pub product_code: Option<String>,
    #[sea_orm(column_name = "PRO_DES")]
    pub product_description: Option<String>,
    #[sea_orm(column_name = "PRO_QTD")]
    pub quantity: i32,
    #[sea_orm(column_name = "PRO_VAL", column_type = "Decimal(Some((10, 2)))")]
    pub unit_value: Decimal,
    #[sea_orm(column_name = "PRO_VNG", column_type = "Decimal(Some((10, 2)))")]
    pub negotiated_value: Decimal,
    #[sea_orm(column_name = "IPE_VTL", column_type = "Decimal(Some((10, 2)))")]
    pub total_value: Decimal,
    #[sea_orm(column_name = "IPE_STA")]
    pub status: i32,
    /// `1` when the item was reported outside the persisted order.
    #[sea_orm(column_name = "IPE_DFP")]
    pub outside_order_flag: Option<i32>,
    #[sea_orm(column_name = "IPE_DDV")]
    pub returned_at: Option<DateTimeUtc>,
    #[sea_orm(column_name = "USU_DEV")]
    pub returned_by: Option<String>,
    #[sea_orm(column_name = "USU_LOG")]
    pub created_by: Option<String>,
    #[sea_orm(column_name = "CUP_COD")]
    pub coupon_code: Option<String>,
    #[sea_orm(column_name = "UNI_COD")]
    pub unit_code: Option<String>,
    #[sea_orm(column_name = "IPE_PPM")]
    pub rescheduled_next_month: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
