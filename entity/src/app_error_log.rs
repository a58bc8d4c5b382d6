use sea_orm::entity::prelude::*;

/// Error journal written by the settlement procedure (`log_app_error`).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "log_app_error")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "ErrorNumber")]
    pub error_number: Option<i32>,
    #[sea_orm(column_name = "ErrorMessage")]
    pub error_message: Option<String>,
    #[sea_orm(column_name = "ErrorProcedure")]
    pub error_procedure: Option<String>,
    #[sea_orm(column_name = "ErrorLine")]
    pub error_line: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
