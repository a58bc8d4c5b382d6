use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_company_table::Company;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Client::Table)
                    .if_not_exists()
                    .col(pk_auto(Client::Id))
                    .col(integer(Client::GroupId))
                    .col(string(Client::Name))
                    .col(string_len(Client::Document, 14))
                    .col(integer(Client::Status))
                    .col(integer(Client::CompanyId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cad_cli_emp_cod")
                            .from(Client::Table, Client::CompanyId)
                            .to(Company::Table, Company::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cad_cli_cli_doc")
                    .table(Client::Table)
                    .col(Client::Document)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Client::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Client {
    #[sea_orm(iden = "CAD_CLI")]
    Table,
    #[sea_orm(iden = "CLI_COD")]
    Id,
    #[sea_orm(iden = "GRU_COD")]
    GroupId,
    #[sea_orm(iden = "CLI_RAZ")]
    Name,
    #[sea_orm(iden = "CLI_DOC")]
    Document,
    #[sea_orm(iden = "CLI_STA")]
    Status,
    #[sea_orm(iden = "EMP_COD")]
    CompanyId,
}
