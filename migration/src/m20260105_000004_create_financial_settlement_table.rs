use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FinancialSettlement::Table)
                    .if_not_exists()
                    .col(integer(FinancialSettlement::ResellerId))
                    .col(integer(FinancialSettlement::OrderId))
                    .col(decimal_len(FinancialSettlement::Cash, 10, 2).default(0))
                    .col(decimal_len(FinancialSettlement::Card, 10, 2).default(0))
                    .col(decimal_len(FinancialSettlement::DepositPix, 10, 2).default(0))
                    .col(decimal_len(FinancialSettlement::Check, 10, 2).default(0))
                    .col(decimal_len(FinancialSettlement::Voucher, 10, 2).default(0))
                    .col(decimal_len(FinancialSettlement::TotalReceived, 10, 2).default(0))
                    .col(decimal_len(FinancialSettlement::Change, 10, 2).default(0))
                    .col(
                        timestamp_with_time_zone(FinancialSettlement::RegisteredAt)
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(FinancialSettlement::ResellerId)
                            .col(FinancialSettlement::OrderId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FinancialSettlement::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FinancialSettlement {
    #[sea_orm(iden = "TBL_FINANCEIRO_ACERTO")]
    Table,
    #[sea_orm(iden = "REV_COD")]
    ResellerId,
    #[sea_orm(iden = "PED_COD")]
    OrderId,
    #[sea_orm(iden = "FCS_VLDP")]
    Cash,
    #[sea_orm(iden = "FCS_VCTP")]
    Card,
    #[sea_orm(iden = "FCS_VDPP")]
    DepositPix,
    #[sea_orm(iden = "FCS_VLCP")]
    Check,
    #[sea_orm(iden = "FCS_VVLP")]
    Voucher,
    #[sea_orm(iden = "FCS_VLR_TOTAL_RECEBIDO")]
    TotalReceived,
    #[sea_orm(iden = "FCS_VLR_TROCO")]
    Change,
    #[sea_orm(iden = "FCS_DATA_REGISTRO")]
    RegisteredAt,
}
