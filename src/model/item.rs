use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::server::util::parse;

/// One order item as reported by the promoter application.
///
/// Every field is optional on the wire; which ones are required depends on the action
/// the item classifies into.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ItemRecordDto {
    #[serde(rename = "IPE_COD", deserialize_with = "parse::optional_i32")]
    pub ipe_cod: Option<i32>,
    #[serde(rename = "IPE_STA", deserialize_with = "parse::optional_i32")]
    pub ipe_sta: Option<i32>,
    #[serde(rename = "FORA_DO_PEDIDO", deserialize_with = "parse::optional_bool")]
    pub fora_do_pedido: Option<bool>,
    #[serde(rename = "IPE_VTL", deserialize_with = "parse::optional_decimal")]
    #[schema(value_type = Option<f64>)]
    pub ipe_vtl: Option<Decimal>,
    #[serde(rename = "IPE_DDV", deserialize_with = "parse::optional_datetime")]
    pub ipe_ddv: Option<DateTime<Utc>>,
    #[serde(rename = "USU_DEV", deserialize_with = "parse::optional_string")]
    pub usu_dev: Option<String>,
    /// `Some` when the key was sent, `Some(None)` for an explicit `null`.
    #[serde(rename = "REMARCADO_PROX_MES", deserialize_with = "parse::present_bool")]
    #[schema(value_type = Option<bool>)]
    pub remarcado_prox_mes: Option<Option<bool>>,
    #[serde(rename = "PED_COD", deserialize_with = "parse::optional_i32")]
    pub ped_cod: Option<i32>,
    #[serde(rename = "CUP_REF", deserialize_with = "parse::optional_string")]
    pub cup_ref: Option<String>,
    /// Client-side correlation id, echoed back for inserted items.
    #[serde(rename = "CUP_CDI")]
    #[schema(value_type = Option<Object>)]
    pub cup_cdi: Option<Value>,
    #[serde(rename = "PRO_DES", deserialize_with = "parse::optional_string")]
    pub pro_des: Option<String>,
    #[serde(rename = "IPE_DFP", deserialize_with = "parse::optional_i32")]
    pub ipe_dfp: Option<i32>,
    #[serde(rename = "CUP_COD", deserialize_with = "parse::optional_string")]
    pub cup_cod: Option<String>,
    #[serde(rename = "UNI_COD", deserialize_with = "parse::optional_string")]
    pub uni_cod: Option<String>,
}

/// Synchronization request.
///
/// Items are kept as raw JSON here and parsed one by one, so a malformed item fails
/// alone instead of rejecting the whole body.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SyncItemsDto {
    #[serde(default)]
    #[schema(value_type = Option<Vec<ItemRecordDto>>)]
    pub itens: Option<Vec<Value>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct InsertedItemDto {
    #[serde(rename = "IPE_COD")]
    pub ipe_cod: i32,
    #[serde(rename = "CUP_CDI")]
    #[schema(value_type = Option<Object>)]
    pub cup_cdi: Option<Value>,
    pub indice: usize,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ItemRefDto {
    #[serde(rename = "IPE_COD")]
    pub ipe_cod: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FailedItemDto {
    pub indice: usize,
    pub erro: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SyncDetailsDto {
    #[serde(rename = "itensInseridos")]
    pub itens_inseridos: Vec<InsertedItemDto>,
    #[serde(rename = "itensAtualizados")]
    pub itens_atualizados: Vec<ItemRefDto>,
    #[serde(rename = "itensDeletados")]
    pub itens_deletados: Vec<ItemRefDto>,
    #[serde(rename = "itensComFalha")]
    pub itens_com_falha: Vec<FailedItemDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SyncItemsResponseDto {
    pub success: bool,
    pub message: String,
    pub sincronizados: usize,
    pub inseridos: usize,
    pub deletados: usize,
    pub detalhes: SyncDetailsDto,
}
