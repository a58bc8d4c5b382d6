use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::server::util::parse;

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct OrderItemsQueryDto {
    #[serde(rename = "REV_COD", deserialize_with = "parse::optional_i32")]
    pub rev_cod: Option<i32>,
    #[serde(rename = "PED_COD", deserialize_with = "parse::optional_i32")]
    pub ped_cod: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct PendingSettlementsQueryDto {
    #[serde(rename = "CLI_COD", deserialize_with = "parse::optional_i32")]
    pub cli_cod: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct DiscountRulesQueryDto {
    #[serde(rename = "PED_COD", deserialize_with = "parse::optional_i32")]
    pub ped_cod: Option<i32>,
}

/// Rows returned by a stored procedure, keyed by the procedure's column names.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RowsDto {
    pub success: bool,
    #[schema(value_type = Vec<Object>)]
    pub data: Vec<Value>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DiscountRuleDto {
    #[serde(rename = "PED_COD")]
    pub ped_cod: i32,
    #[serde(rename = "TDP_COD")]
    pub tdp_cod: i32,
    #[serde(rename = "TDP_DES")]
    pub tdp_des: String,
    #[serde(rename = "GRU_COD")]
    pub gru_cod: i32,
    #[serde(rename = "DE")]
    #[schema(value_type = f64)]
    pub de: Decimal,
    #[serde(rename = "ATE")]
    #[schema(value_type = f64)]
    pub ate: Decimal,
    #[serde(rename = "PORC")]
    #[schema(value_type = f64)]
    pub porc: Decimal,
    #[serde(rename = "PORC_BONUS")]
    #[schema(value_type = Option<f64>)]
    pub porc_bonus: Option<Decimal>,
    #[serde(rename = "PORC_CARENCIA")]
    #[schema(value_type = Option<f64>)]
    pub porc_carencia: Option<Decimal>,
    #[serde(rename = "PORC_PERDA")]
    #[schema(value_type = Option<f64>)]
    pub porc_perda: Option<Decimal>,
    #[serde(rename = "QTDE_ACERTO_CARENCIA")]
    pub qtde_acerto_carencia: Option<i32>,
    #[serde(rename = "DESC_VENDA_TOTAL")]
    pub desc_venda_total: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DiscountRulesDto {
    pub success: bool,
    pub data: Vec<DiscountRuleDto>,
    pub total: usize,
}
