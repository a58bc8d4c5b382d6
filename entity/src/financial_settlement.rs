use sea_orm::entity::prelude::*;

/// Payments received for an order (`TBL_FINANCEIRO_ACERTO`), keyed by reseller and order.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "TBL_FINANCEIRO_ACERTO")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "REV_COD")]
    pub reseller_id: i32,
    #[sea_orm(primary_key, auto_increment = false, column_name = "PED_COD")]
    pub order_id: i32,
    #[sea_orm(column_name = "FCS_VLDP", column_type = "Decimal(Some((10, 2)))")]
    pub cash: Decimal,
    #[sea_orm(column_name = "FCS_VCTP", column_type = "Decimal(Some((10, 2)))")]
    pub card: Decimal,
    #[sea_orm(column_name = "FCS_VDPP", column_type = "Decimal(Some((10, 2)))")]
    pub deposit_pix: Decimal,
    #[sea_orm(column_name = "FCS_VLCP", column_type = "Decimal(Some((10, 2)))")]
    pub check: Decimal,
    #[sea_orm(column_name = "FCS_VVLP", column_type = "Decimal(Some((10, 2)))")]
    pub voucher: Decimal,
    #[sea_orm(
        column_name = "FCS_VLR_TOTAL_RECEBIDO",
        column_type = "Decimal(Some((10, 2)))"
    )]
    pub total_received: Decimal,
    #[sea_orm(column_name = "FCS_VLR_TROCO", column_type = "Decimal(Some((10, 2)))")]
    pub change: Decimal,
    #[sea_orm(column_name = "FCS_DATA_REGISTRO")]
    pub registered_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
