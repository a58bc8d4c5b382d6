use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cad_tdp")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "TDP_COD")]
    pub id: i32,
    #[sea_orm(column_name = "TDP_DES")]
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::discount_rule::Entity")]
    DiscountRule,
}

impl Related<super::discount_rule::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiscountRule.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
