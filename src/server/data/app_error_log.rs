use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::settlement::AppErrorEntry;

pub struct AppErrorLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppErrorLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Most recent entry of the error journal, if any.
    pub async fn latest(&self) -> Result<Option<AppErrorEntry>, DbErr> {
        let entry = entity::prelude::AppErrorLog::find()
            .order_by_desc(entity::app_error_log::Column::Id)
            .one(self.db)
            .await?;

        Ok(entry.map(AppErrorEntry::from_entity))
    }
}
