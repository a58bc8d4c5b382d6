use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppErrorLog::Table)
                    .if_not_exists()
                    .col(pk_auto(AppErrorLog::Id))
                    .col(integer_null(AppErrorLog::ErrorNumber))
                    .col(text_null(AppErrorLog::ErrorMessage))
                    .col(string_null(AppErrorLog::ErrorProcedure))
                    .col(integer_null(AppErrorLog::ErrorLine))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AppErrorLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AppErrorLog {
    #[sea_orm(iden = "log_app_error")]
    Table,
    Id,
    #[sea_orm(iden = "ErrorNumber")]
    ErrorNumber,
    #[sea_orm(iden = "ErrorMessage")]
    ErrorMessage,
    #[sea_orm(iden = "ErrorProcedure")]
    ErrorProcedure,
    #[sea_orm(iden = "ErrorLine")]
    ErrorLine,
}
