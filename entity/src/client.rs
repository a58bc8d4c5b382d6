use sea_orm::entity::prelude::*;

/// Client record (`CAD_CLI`). Promoters are clients in role group 2 or 4.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "CAD_CLI")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "CLI_COD")]
    pub id: i32,
    #[sea_orm(column_name = "GRU_COD")]
    pub group_id: i32,
    #[sea_orm(column_name = "CLI_RAZ")]
    pub name: String,
    /// Document number (CPF), also used as the promoter's login secret.
    #[sea_orm(column_name = "CLI_DOC")]
    pub document: String,
    #[sea_orm(column_name = "CLI_STA")]
    pub status: i32,
    #[sea_orm(column_name = "EMP_COD")]
    pub company_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::company::Entity",
        from = "Column::CompanyId",
        to = "super::company::Column::Id"
    )]
    Company,
}

impl Related<super::company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
