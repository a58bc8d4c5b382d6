use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        app_error_log::AppErrorLogRepository, procedure::ProcedureRepository,
        settlement::SettlementRepository,
    },
    error::AppError,
    model::settlement::{
        FinalizeSettlementParams, RegisterReceiptParams, Settlement, SettlementResult,
    },
};

/// Detail reported when the procedure fails and the error journal has nothing better.
const GENERIC_FAILURE_DETAIL: &str = "Erro ao finalizar acerto";

/// Result code reported when the call itself fails.
const UNKNOWN_SQL_ERROR: &str = "UNKNOWN";

pub struct SettlementService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettlementService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores the amounts received for an order.
    pub async fn register(&self, params: RegisterReceiptParams) -> Result<Settlement, AppError> {
        tracing::info!(
            "Registering receipts for REV_COD {} PED_COD {}",
            params.reseller_id,
            params.order_id
        );

        let settlement = SettlementRepository::new(self.db).insert(params).await?;

        Ok(settlement)
    }

    /// Hands a settlement document to the database procedure and interprets its result.
    ///
    /// # Returns
    /// - `Ok(SettlementResult)` - The procedure reported success with a settlement id
    /// - `Err(AppError::Procedure)` - The procedure reported failure (details taken
    ///   from the newest error journal entry when available), returned nothing, or the
    ///   call failed (`sqlError` "UNKNOWN")
    pub async fn finalize(
        &self,
        params: FinalizeSettlementParams,
    ) -> Result<SettlementResult, AppError> {
        tracing::debug!("Finalizing settlement: {}", params.section_summary());

        let row = ProcedureRepository::new(self.db)
            .finalize_settlement(&params.document)
            .await
            .map_err(|err| AppError::Procedure {
                message: "Erro ao processar finalização do acerto".to_string(),
                details: err.to_string(),
                sql_error: Some(UNKNOWN_SQL_ERROR.to_string()),
                source: Some(err),
            })?;

        let Some(row) = row else {
            return Err(AppError::Procedure {
                message: "Stored Procedure não retornou resultado".to_string(),
                details: "A execução da SP foi concluída mas nenhum resultado foi retornado"
                    .to_string(),
                sql_error: None,
                source: None,
            });
        };

        let result = SettlementResult::from_row(&row);
        if result.is_success() {
            tracing::info!("Settlement finalized with FCS_COD {}", result.settlement_id);
            return Ok(result);
        }

        tracing::error!(
            "Settlement procedure failed: FCS_COD {} MSG_RETORNO {}",
            result.settlement_id,
            result.message
        );

        Err(AppError::Procedure {
            message: "Erro ao executar finalização do acerto".to_string(),
            details: self.latest_error_detail().await,
            sql_error: Some(result.message),
            source: None,
        })
    }

    /// Best-effort description of the newest error journal entry.
    async fn latest_error_detail(&self) -> String {
        match AppErrorLogRepository::new(self.db).latest().await {
            Ok(Some(entry)) => entry.describe(),
            Ok(None) => GENERIC_FAILURE_DETAIL.to_string(),
            Err(err) => {
                tracing::warn!("Could not read the error journal: {}", err);
                GENERIC_FAILURE_DETAIL.to_string()
            }
        }
    }
}
