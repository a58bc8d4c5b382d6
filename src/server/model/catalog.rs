use rust_decimal::Decimal;
use serde_json::Value;

use crate::{
    model::catalog::{
        DiscountRuleDto, DiscountRulesDto, DiscountRulesQueryDto, OrderItemsQueryDto,
        PendingSettlementsQueryDto, RowsDto,
    },
    server::error::AppError,
};

/// Product listing status passed to the product procedure.
pub const ACTIVE_PRODUCTS: i32 = 1;

/// Which key the item listing filters on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderItemsFilter {
    Reseller(i32),
    Order(i32),
}

impl OrderItemsFilter {
    /// Picks the filter from the request. The order wins when both codes are sent.
    pub fn from_dto(dto: OrderItemsQueryDto) -> Result<Self, AppError> {
        match (dto.ped_cod, dto.rev_cod) {
            (Some(order_id), _) => Ok(Self::Order(order_id)),
            (None, Some(reseller_id)) => Ok(Self::Reseller(reseller_id)),
            (None, None) => Err(AppError::Validation(
                "Pelo menos um dos parâmetros (REV_COD ou PED_COD) é obrigatório.".to_string(),
            )),
        }
    }
}

/// Arguments of the collection procedure for a promoter's pending settlements.
///
/// Only the promoter varies; the other arguments select "every company, not only
/// overdue, any reseller, promoter view, short address".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingSettlementsParams {
    pub company_id: i32,
    pub overdue_only: bool,
    pub reseller_id: i32,
    pub kind: i32,
    pub full_address: bool,
    pub promoter_id: i32,
}

impl PendingSettlementsParams {
    pub fn for_promoter(promoter_id: i32) -> Self {
        Self {
            company_id: 0,
            overdue_only: false,
            reseller_id: 0,
            kind: 4,
            full_address: false,
            promoter_id,
        }
    }

    pub fn from_dto(dto: PendingSettlementsQueryDto) -> Result<Self, AppError> {
        dto.cli_cod
            .map(Self::for_promoter)
            .ok_or_else(|| AppError::Validation("Parâmetro CLI_COD é obrigatório.".to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscountRulesParams {
    pub order_id: i32,
}

impl DiscountRulesParams {
    pub fn from_dto(dto: DiscountRulesQueryDto) -> Result<Self, AppError> {
        dto.ped_cod
            .map(|order_id| Self { order_id })
            .ok_or_else(|| AppError::Validation("PED_COD é obrigatório para consultar regras de desconto.".to_string()))
    }
}

/// Wraps procedure rows in the listing envelope.
pub fn rows_into_dto(rows: Vec<Value>) -> RowsDto {
    RowsDto {
        success: true,
        data: rows,
    }
}

/// Discount band joined with its type description.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountRule {
    pub order_id: i32,
    pub discount_type_id: i32,
    pub discount_type: String,
    pub group_id: i32,
    pub range_from: Decimal,
    pub range_to: Decimal,
    pub percent: Decimal,
    pub bonus_percent: Option<Decimal>,
    pub grace_percent: Option<Decimal>,
    pub loss_percent: Option<Decimal>,
    pub grace_settlements: Option<i32>,
    pub discount_on_total_sale: Option<bool>,
}

impl DiscountRule {
    pub fn from_entity(
        rule: entity::discount_rule::Model,
        discount_type: Option<entity::discount_type::Model>,
    ) -> Self {
        Self {
            order_id: rule.order_id,
            discount_type_id: rule.discount_type_id,
            discount_type: discount_type
                .map(|t| t.description)
                .unwrap_or_default(),
            group_id: rule.group_id,
            range_from: rule.range_from,
            range_to: rule.range_to,
            percent: rule.percent,
            bonus_percent: rule.bonus_percent,
            grace_percent: rule.grace_percent,
            loss_percent: rule.loss_percent,
            grace_settlements: rule.grace_settlements,
            discount_on_total_sale: rule.discount_on_total_sale,
        }
    }

    pub fn into_dto(self) -> DiscountRuleDto {
        DiscountRuleDto {
            ped_cod: self.order_id,
            tdp_cod: self.discount_type_id,
            tdp_des: self.discount_type,
            gru_cod: self.group_id,
            de: self.range_from,
            ate: self.range_to,
            porc: self.percent,
            porc_bonus: self.bonus_percent,
            porc_carencia: self.grace_percent,
            porc_perda: self.loss_percent,
            qtde_acerto_carencia: self.grace_settlements,
            desc_venda_total: self.discount_on_total_sale,
        }
    }
}

pub fn rules_into_dto(rules: Vec<DiscountRule>) -> DiscountRulesDto {
    let data: Vec<DiscountRuleDto> = rules.into_iter().map(DiscountRule::into_dto).collect();

    DiscountRulesDto {
        success: true,
        total: data.len(),
        data,
    }
}
