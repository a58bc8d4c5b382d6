use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::server::util::parse;

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct LoginDto {
    #[serde(deserialize_with = "parse::optional_string")]
    pub cpf: Option<String>,
    #[serde(deserialize_with = "parse::optional_string")]
    pub senha: Option<String>,
}

/// Identity projection returned to the application after login.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PromoterDto {
    #[serde(rename = "CLI_COD")]
    pub cli_cod: i32,
    #[serde(rename = "GRU_COD")]
    pub gru_cod: i32,
    #[serde(rename = "CLI_RAZ")]
    pub cli_raz: String,
    #[serde(rename = "CLI_DOC")]
    pub cli_doc: String,
    #[serde(rename = "EMP_COD")]
    pub emp_cod: i32,
    #[serde(rename = "EMP_NMR")]
    pub emp_nmr: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponseDto {
    pub success: bool,
    pub message: String,
    pub promotor: PromoterDto,
}
