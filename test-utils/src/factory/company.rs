use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

pub struct CompanyFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> CompanyFactory<'a> {
    /// Defaults:
    /// - name: `"Empresa {id}"` where id is auto-incremented
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Empresa {}", next_id()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub async fn build(self) -> Result<entity::company::Model, DbErr> {
        entity::company::ActiveModel {
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_company(db: &DatabaseConnection) -> Result<entity::company::Model, DbErr> {
    CompanyFactory::new(db).build().await
}
