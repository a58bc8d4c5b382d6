use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderItem::Table)
                    .if_not_exists()
                    .col(pk_auto(OrderItem::Id))
                    .col(integer(OrderItem::ItemCode).default(0))
                    .col(integer(OrderItem::OrderId))
                    .col(string_len_null(OrderItem::ProductCode, 50))
                    .col(string_len_null(OrderItem::ProductDescription, 255))
                    .col(integer(OrderItem::Quantity).default(1))
                    .col(decimal_len(OrderItem::UnitValue, 10, 2))
                    .col(decimal_len(OrderItem::NegotiatedValue, 10, 2))
                    .col(decimal_len(OrderItem::TotalValue, 10, 2))
                    .col(integer(OrderItem::Status))
                    .col(integer_null(OrderItem::OutsideOrderFlag))
                    .col(timestamp_with_time_zone_null(OrderItem::ReturnedAt))
                    .col(string_len_null(OrderItem::ReturnedBy, 50))
                    .col(string_len_null(OrderItem::CreatedBy, 50))
                    .col(string_len_null(OrderItem::CouponCode, 50))
                    .col(string_len_null(OrderItem::UnitCode, 50))
                    .col(boolean(OrderItem::RescheduledNextMonth).default(false))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cad_ipe_ped_cod")
                    .table(OrderItem::Table)
                    .col(OrderItem::OrderId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrderItem {
    #[sea_orm(iden = "CAD_IPE")]
    Table,
    #[sea_orm(iden = "IPE_COD")]
    Id,
    #[sea_orm(iden = "IPE_CODI")]
    ItemCode,
    #[sea_orm(iden = "PED_COD")]
    OrderId,
    #[sea_orm(iden = "PRO_CDC")]
    ProductCode,
    #[sea_orm(iden = "PRO_DES")]
    ProductDescription,
    #[sea_orm(iden = "PRO_QTD")]
    Quantity,
    #[sea_orm(iden = "PRO_VAL")]
    UnitValue,
    #[sea_orm(iden = "PRO_VNG")]
    NegotiatedValue,
    #[sea_orm(iden = "IPE_VTL")]
    TotalValue,
    #[sea_orm(iden = "IPE_STA")]
    Status,
    #[sea_orm(iden = "IPE_DFP")]
    OutsideOrderFlag,
    #[sea_orm(iden = "IPE_DDV")]
    ReturnedAt,
    #[sea_orm(iden = "USU_DEV")]
    ReturnedBy,
    #[sea_orm(iden = "USU_LOG")]
    CreatedBy,
    #[sea_orm(iden = "CUP_COD")]
    CouponCode,
    #[sea_orm(iden = "UNI_COD")]
    UnitCode,
    #[sea_orm(iden = "IPE_PPM")]
    RescheduledNextMonth,
}
