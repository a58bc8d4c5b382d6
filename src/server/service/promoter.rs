use sea_orm::DatabaseConnection;

use crate::server::{
    data::promoter::PromoterRepository,
    error::{auth::AuthError, AppError},
    model::promoter::{LoginParams, Promoter},
};

pub struct PromoterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PromoterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Authenticates a promoter.
    ///
    /// # Returns
    /// - `Ok(Promoter)` - Active promoter matching the credentials
    /// - `Err(AppError::AuthErr)` - No active promoter matches
    /// - `Err(AppError::DbErr)` - Lookup failed
    pub async fn login(&self, params: LoginParams) -> Result<Promoter, AppError> {
        tracing::info!("Login attempt for document {}", params.document);

        let promoter = PromoterRepository::new(self.db)
            .find_by_credentials(&params)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        tracing::info!("Promoter {} logged in", promoter.id);

        Ok(promoter)
    }
}
