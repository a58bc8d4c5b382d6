use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000005_create_discount_type_table::DiscountType;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DiscountRule::Table)
                    .if_not_exists()
                    .col(integer(DiscountRule::OrderId))
                    .col(integer(DiscountRule::DiscountTypeId))
                    .col(integer(DiscountRule::GroupId))
                    .col(decimal_len(DiscountRule::RangeFrom, 10, 2))
                    .col(decimal_len(DiscountRule::RangeTo, 10, 2))
                    .col(decimal_len(DiscountRule::Percent, 10, 2))
                    .col(decimal_len_null(DiscountRule::BonusPercent, 10, 2))
                    .col(decimal_len_null(DiscountRule::GracePercent, 10, 2))
                    .col(decimal_len_null(DiscountRule::LossPercent, 10, 2))
                    .col(integer_null(DiscountRule::GraceSettlements))
                    .col(boolean_null(DiscountRule::DiscountOnTotalSale))
                    .primary_key(
                        Index::create()
                            .col(DiscountRule::OrderId)
                            .col(DiscountRule::DiscountTypeId)
                            .col(DiscountRule::GroupId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cad_dpd_tdp_cod")
                            .from(DiscountRule::Table, DiscountRule::DiscountTypeId)
                            .to(DiscountType::Table, DiscountType::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DiscountRule::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DiscountRule {
    #[sea_orm(iden = "cad_dpd")]
    Table,
    #[sea_orm(iden = "PED_COD")]
    OrderId,
    #[sea_orm(iden = "TDP_COD")]
    DiscountTypeId,
    #[sea_orm(iden = "GRU_COD")]
    GroupId,
    #[sea_orm(iden = "DE")]
    RangeFrom,
    #[sea_orm(iden = "ATE")]
    RangeTo,
    #[sea_orm(iden = "PORC")]
    Percent,
    #[sea_orm(iden = "PORC_BONUS")]
    BonusPercent,
    #[sea_orm(iden = "PORC_CARENCIA")]
    GracePercent,
    #[sea_orm(iden = "PORC_PERDA")]
    LossPercent,
    #[sea_orm(iden = "QTDE_ACERTO_CARENCIA")]
    GraceSettlements,
    #[sea_orm(iden = "DESC_VENDA_TOTAL")]
    DiscountOnTotalSale,
}
