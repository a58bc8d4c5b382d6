use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::promoter::{LoginParams, Promoter, ACTIVE_STATUS, PROMOTER_GROUPS};

use entity::client::Column;

pub struct PromoterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PromoterRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the active promoter matching the credentials, joined with their company.
    ///
    /// Both the document and the secret must equal `CLI_DOC`. When several clients
    /// match, the lowest `CLI_COD` is returned.
    ///
    /// # Returns
    /// - `Ok(Some(Promoter))` - Matching promoter
    /// - `Ok(None)` - No active promoter matches
    /// - `Err(DbErr)` - Query failed
    pub async fn find_by_credentials(
        &self,
        params: &LoginParams,
    ) -> Result<Option<Promoter>, DbErr> {
        let result = entity::prelude::Client::find()
            .find_also_related(entity::prelude::Company)
            .filter(Column::Document.eq(params.document.as_str()))
            .filter(Column::Document.eq(params.secret.as_str()))
            .filter(Column::GroupId.is_in(PROMOTER_GROUPS))
            .filter(Column::Status.eq(ACTIVE_STATUS))
            .order_by_asc(Column::Id)
            .one(self.db)
            .await?;

        Ok(result.map(|(client, company)| Promoter::from_entity(client, company)))
    }
}
