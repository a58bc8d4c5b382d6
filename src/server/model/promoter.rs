use crate::{
    model::promoter::{LoginDto, LoginResponseDto, PromoterDto},
    server::error::AppError,
};

/// Client groups allowed to log in as promoters.
pub const PROMOTER_GROUPS: [i32; 2] = [2, 4];

/// Client status of an active promoter.
pub const ACTIVE_STATUS: i32 = 2;

/// Credentials submitted by the promoter application.
#[derive(Clone)]
pub struct LoginParams {
    pub document: String,
    pub secret: String,
}

impl LoginParams {
    /// # Returns
    /// - `Ok(LoginParams)` - Both `cpf` and `senha` present
    /// - `Err(AppError::Validation)` - Either one absent or blank
    pub fn from_dto(dto: LoginDto) -> Result<Self, AppError> {
        let (Some(document), Some(secret)) = (dto.cpf, dto.senha) else {
            return Err(AppError::Validation(
                "CPF e senha são obrigatórios.".to_string(),
            ));
        };

        Ok(Self { document, secret })
    }
}

impl std::fmt::Debug for LoginParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginParams")
            .field("document", &self.document)
            .field("secret", &"***")
            .finish()
    }
}

/// Authenticated promoter with the company they work for.
#[derive(Debug, Clone, PartialEq)]
pub struct Promoter {
    pub id: i32,
    pub group_id: i32,
    pub name: String,
    pub document: String,
    pub company_id: i32,
    pub company_name: String,
}

impl Promoter {
    /// Converts the client row and its joined company into a promoter.
    ///
    /// A dangling company reference keeps the client's company id with an empty name.
    pub fn from_entity(
        client: entity::client::Model,
        company: Option<entity::company::Model>,
    ) -> Self {
        let (company_id, company_name) = match company {
            Some(company) => (company.id, company.name),
            None => (client.company_id, String::new()),
        };

        Self {
            id: client.id,
            group_id: client.group_id,
            name: client.name,
            document: client.document,
            company_id,
            company_name,
        }
    }

    pub fn into_dto(self) -> PromoterDto {
        PromoterDto {
            cli_cod: self.id,
            gru_cod: self.group_id,
            cli_raz: self.name,
            cli_doc: self.document,
            emp_cod: self.company_id,
            emp_nmr: self.company_name,
        }
    }

    pub fn into_response_dto(self) -> LoginResponseDto {
        LoginResponseDto {
            success: true,
            message: "Login bem-sucedido!".to_string(),
            promotor: self.into_dto(),
        }
    }
}
