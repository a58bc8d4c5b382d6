use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::server::util::parse;

/// Payment breakdown submitted when a promoter receives money for an order.
///
/// Totals and change are computed by the client and stored as given.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct RegisterReceiptsDto {
    #[serde(rename = "REV_COD", deserialize_with = "parse::optional_i32")]
    pub rev_cod: Option<i32>,
    #[serde(rename = "PED_COD", deserialize_with = "parse::optional_i32")]
    pub ped_cod: Option<i32>,
    #[serde(rename = "VALOR_DINHEIRO", deserialize_with = "parse::optional_decimal")]
    #[schema(value_type = Option<f64>)]
    pub valor_dinheiro: Option<Decimal>,
    #[serde(rename = "VALOR_CARTAO", deserialize_with = "parse::optional_decimal")]
    #[schema(value_type = Option<f64>)]
    pub valor_cartao: Option<Decimal>,
    #[serde(rename = "VALOR_DEPOSITO_PIX", deserialize_with = "parse::optional_decimal")]
    #[schema(value_type = Option<f64>)]
    pub valor_deposito_pix: Option<Decimal>,
    #[serde(rename = "VALOR_CHEQUE", deserialize_with = "parse::optional_decimal")]
    #[schema(value_type = Option<f64>)]
    pub valor_cheque: Option<Decimal>,
    #[serde(rename = "VALOR_VALE", deserialize_with = "parse::optional_decimal")]
    #[schema(value_type = Option<f64>)]
    pub valor_vale: Option<Decimal>,
    #[serde(rename = "TOTAL_RECEBIDO", deserialize_with = "parse::optional_decimal")]
    #[schema(value_type = Option<f64>)]
    pub total_recebido: Option<Decimal>,
    #[serde(rename = "VALOR_TROCO", deserialize_with = "parse::optional_decimal")]
    #[schema(value_type = Option<f64>)]
    pub valor_troco: Option<Decimal>,
}

/// Stored settlement row, keyed with the table's column names.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SettlementDto {
    #[serde(rename = "REV_COD")]
    pub rev_cod: i32,
    #[serde(rename = "PED_COD")]
    pub ped_cod: i32,
    #[serde(rename = "FCS_VLDP")]
    #[schema(value_type = f64)]
    pub fcs_vldp: Decimal,
    #[serde(rename = "FCS_VCTP")]
    #[schema(value_type = f64)]
    pub fcs_vctp: Decimal,
    #[serde(rename = "FCS_VDPP")]
    #[schema(value_type = f64)]
    pub fcs_vdpp: Decimal,
    #[serde(rename = "FCS_VLCP")]
    #[schema(value_type = f64)]
    pub fcs_vlcp: Decimal,
    #[serde(rename = "FCS_VVLP")]
    #[schema(value_type = f64)]
    pub fcs_vvlp: Decimal,
    #[serde(rename = "FCS_VLR_TOTAL_RECEBIDO")]
    #[schema(value_type = f64)]
    pub fcs_vlr_total_recebido: Decimal,
    #[serde(rename = "FCS_VLR_TROCO")]
    #[schema(value_type = f64)]
    pub fcs_vlr_troco: Decimal,
    #[serde(rename = "FCS_DATA_REGISTRO")]
    pub fcs_data_registro: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterReceiptsResponseDto {
    pub success: bool,
    pub message: String,
    pub data: SettlementDto,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct FinalizeSettlementDto {
    /// Settlement document forwarded verbatim to the database
    /// (`cad_fcs`, `fcs_res`, `ItensPedidoProximoMes`, `cad_rda`, `USU_LOG`).
    #[serde(rename = "dadosAcerto", default)]
    #[schema(value_type = Option<Object>)]
    pub dados_acerto: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FinalizeDetailsDto {
    pub msg_retorno: String,
    pub fcs_cod: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FinalizeSettlementResponseDto {
    pub success: bool,
    #[serde(rename = "FCS_COD")]
    pub fcs_cod: i64,
    pub message: String,
    pub detalhes: FinalizeDetailsDto,
}
