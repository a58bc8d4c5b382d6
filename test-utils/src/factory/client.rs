//! Client factory.
//!
//! Defaults produce an active promoter (group 2, status 2), the only kind of client that
//! can log in.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

pub struct ClientFactory<'a> {
    db: &'a DatabaseConnection,
    id: Option<i32>,
    company_id: i32,
    group_id: i32,
    name: String,
    document: String,
    status: i32,
}

impl<'a> ClientFactory<'a> {
    /// Creates a new ClientFactory with default values.
    ///
    /// Defaults:
    /// - id: generated by the database
    /// - group_id: `2`
    /// - status: `2` (active)
    /// - name: `"Promotor {n}"`
    /// - document: 11-digit string derived from `n`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `company_id` - Company the client belongs to
    pub fn new(db: &'a DatabaseConnection, company_id: i32) -> Self {
        let n = next_id();
        Self {
            db,
            id: None,
            company_id,
            group_id: 2,
            name: format!("Promotor {}", n),
            document: format!("{:011}", n),
            status: 2,
        }
    }

    /// Fixes the client code instead of letting the database assign it.
    pub fn id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn group_id(mut self, group_id: i32) -> Self {
        self.group_id = group_id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn document(mut self, document: impl Into<String>) -> Self {
        self.document = document.into();
        self
    }

    pub fn status(mut self, status: i32) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the client.
    ///
    /// # Returns
    /// - `Ok(entity::client::Model)` - Created client
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::client::Model, DbErr> {
        entity::client::ActiveModel {
            id: match self.id {
                Some(id) => ActiveValue::Set(id),
                None => ActiveValue::NotSet,
            },
            group_id: ActiveValue::Set(self.group_id),
            name: ActiveValue::Set(self.name),
            document: ActiveValue::Set(self.document),
            status: ActiveValue::Set(self.status),
            company_id: ActiveValue::Set(self.company_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active promoter with the given document.
pub async fn create_promoter(
    db: &DatabaseConnection,
    company_id: i32,
    document: &str,
) -> Result<entity::client::Model, DbErr> {
    ClientFactory::new(db, company_id)
        .document(document)
        .build()
        .await
}
