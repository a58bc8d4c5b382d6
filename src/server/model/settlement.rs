use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde_json::Value;

use crate::{
    model::settlement::{
        FinalizeDetailsDto, FinalizeSettlementDto, FinalizeSettlementResponseDto,
        RegisterReceiptsDto, RegisterReceiptsResponseDto, SettlementDto,
    },
    server::error::AppError,
};

/// Result message the settlement procedure reports on success.
pub const SUCCESS_MESSAGE: &str = "SUCESSO";

/// Amounts received for an order. Omitted amounts are zero.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterReceiptParams {
    pub reseller_id: i32,
    pub order_id: i32,
    pub cash: Decimal,
    pub card: Decimal,
    pub deposit_pix: Decimal,
    pub check: Decimal,
    pub voucher: Decimal,
    pub total_received: Decimal,
    pub change: Decimal,
}

impl RegisterReceiptParams {
    /// Validates the reseller and order codes and defaults missing amounts to zero.
    ///
    /// # Returns
    /// - `Ok(RegisterReceiptParams)` - Both codes present
    /// - `Err(AppError::Validation)` - `REV_COD` or `PED_COD` absent
    pub fn from_dto(dto: RegisterReceiptsDto) -> Result<Self, AppError> {
        let (Some(reseller_id), Some(order_id)) = (dto.rev_cod, dto.ped_cod) else {
            return Err(AppError::Validation(
                "REV_COD e PED_COD são obrigatórios.".to_string(),
            ));
        };

        Ok(Self {
            reseller_id,
            order_id,
            cash: dto.valor_dinheiro.unwrap_or_default(),
            card: dto.valor_cartao.unwrap_or_default(),
            deposit_pix: dto.valor_deposito_pix.unwrap_or_default(),
            check: dto.valor_cheque.unwrap_or_default(),
            voucher: dto.valor_vale.unwrap_or_default(),
            total_received: dto.total_recebido.unwrap_or_default(),
            change: dto.valor_troco.unwrap_or_default(),
        })
    }
}

/// Stored settlement row.
#[derive(Debug, Clone, PartialEq)]
pub struct Settlement {
    pub reseller_id: i32,
    pub order_id: i32,
    pub cash: Decimal,
    pub card: Decimal,
    pub deposit_pix: Decimal,
    pub check: Decimal,
    pub voucher: Decimal,
    pub total_received: Decimal,
    pub change: Decimal,
    pub registered_at: DateTime<Utc>,
}

impl Settlement {
    pub fn from_entity(entity: entity::financial_settlement::Model) -> Self {
        Self {
            reseller_id: entity.reseller_id,
            order_id: entity.order_id,
            cash: entity.cash,
            card: entity.card,
            deposit_pix: entity.deposit_pix,
            check: entity.check,
            voucher: entity.voucher,
            total_received: entity.total_received,
            change: entity.change,
            registered_at: entity.registered_at,
        }
    }

    pub fn into_dto(self) -> SettlementDto {
        SettlementDto {
            rev_cod: self.reseller_id,
            ped_cod: self.order_id,
            fcs_vldp: self.cash,
            fcs_vctp: self.card,
            fcs_vdpp: self.deposit_pix,
            fcs_vlcp: self.check,
            fcs_vvlp: self.voucher,
            fcs_vlr_total_recebido: self.total_received,
            fcs_vlr_troco: self.change,
            fcs_data_registro: self.registered_at,
        }
    }

    pub fn into_response_dto(self) -> RegisterReceiptsResponseDto {
        RegisterReceiptsResponseDto {
            success: true,
            message: "Recebimentos registrados com sucesso no backend.".to_string(),
            data: self.into_dto(),
        }
    }
}

/// Settlement document forwarded to the database procedure.
#[derive(Debug, Clone)]
pub struct FinalizeSettlementParams {
    pub document: Value,
}

impl FinalizeSettlementParams {
    /// Requires `dadosAcerto` to be a JSON object.
    pub fn from_dto(dto: FinalizeSettlementDto) -> Result<Self, AppError> {
        match dto.dados_acerto {
            Some(document) if document.is_object() => Ok(Self { document }),
            _ => Err(AppError::Validation(
                "Dados do acerto não fornecidos (verificar estrutura do body)".to_string(),
            )),
        }
    }

    /// Sizes of the document sections, for logging.
    pub fn section_summary(&self) -> String {
        let len = |key: &str| match self.document.get(key) {
            Some(Value::Array(rows)) => rows.len().to_string(),
            Some(Value::Null) | None => "-".to_string(),
            Some(_) => "1".to_string(),
        };

        format!(
            "cad_fcs={} fcs_res={} ItensPedidoProximoMes={} cad_rda={} USU_LOG={}",
            len("cad_fcs"),
            len("fcs_res"),
            len("ItensPedidoProximoMes"),
            len("cad_rda"),
            self.document
                .get("USU_LOG")
                .and_then(Value::as_str)
                .unwrap_or("-"),
        )
    }
}

/// Result row of the settlement procedure.
#[derive(Debug, Clone, PartialEq)]
pub struct SettlementResult {
    pub settlement_id: i64,
    pub message: String,
}

impl SettlementResult {
    /// Reads `FCS_COD` and `MSG_RETORNO` from a procedure row.
    ///
    /// Drivers may return the code as a number or a numeric string; anything else
    /// reads as zero so the result is treated as a failure.
    pub fn from_row(row: &Value) -> Self {
        let settlement_id = match row.get("FCS_COD") {
            Some(Value::Number(n)) => n.as_i64().unwrap_or_default(),
            Some(Value::String(s)) => s.trim().parse().unwrap_or_default(),
            _ => 0,
        };
        let message = match row.get("MSG_RETORNO") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };

        Self {
            settlement_id,
            message,
        }
    }

    pub fn is_success(&self) -> bool {
        self.message == SUCCESS_MESSAGE && self.settlement_id > 0
    }

    pub fn into_dto(self) -> FinalizeSettlementResponseDto {
        FinalizeSettlementResponseDto {
            success: true,
            fcs_cod: self.settlement_id,
            message: "Acerto finalizado com sucesso".to_string(),
            detalhes: FinalizeDetailsDto {
                msg_retorno: self.message,
                fcs_cod: self.settlement_id,
            },
        }
    }
}

/// Latest entry of the database's application error log.
#[derive(Debug, Clone, PartialEq)]
pub struct AppErrorEntry {
    pub number: Option<i32>,
    pub message: Option<String>,
    pub procedure: Option<String>,
    pub line: Option<i32>,
}

impl AppErrorEntry {
    pub fn from_entity(entity: entity::app_error_log::Model) -> Self {
        Self {
            number: entity.error_number,
            message: entity.error_message,
            procedure: entity.error_procedure,
            line: entity.error_line,
        }
    }

    /// Formats the entry as `Erro {n} na procedure {p} linha {l}: {m}`.
    pub fn describe(&self) -> String {
        fn or_blank<T: ToString>(value: &Option<T>) -> String {
            value.as_ref().map(ToString::to_string).unwrap_or_default()
        }

        format!(
            "Erro {} na procedure {} linha {}: {}",
            or_blank(&self.number),
            or_blank(&self.procedure),
            or_blank(&self.line),
            or_blank(&self.message),
        )
    }
}
