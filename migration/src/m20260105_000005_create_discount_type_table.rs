use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DiscountType::Table)
                    .if_not_exists()
                    .col(pk_auto(DiscountType::Id))
                    .col(string(DiscountType::Description))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DiscountType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DiscountType {
    #[sea_orm(iden = "cad_tdp")]
    Table,
    #[sea_orm(iden = "TDP_COD")]
    Id,
    #[sea_orm(iden = "TDP_DES")]
    Description,
}
