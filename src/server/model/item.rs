//! Order-item synchronization models.
//!
//! A synchronization batch is a list of item records reported by the promoter
//! application. Each record is classified into exactly one [`ItemAction`] by the pure
//! [`classify`] function, and applying that action yields exactly one [`ItemOutcome`].
//! Keeping the decision separate from the database work lets the precedence rules be
//! tested without I/O.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde_json::Value;

use crate::{
    model::item::{
        FailedItemDto, InsertedItemDto, ItemRecordDto, ItemRefDto, SyncDetailsDto,
        SyncItemsDto, SyncItemsResponseDto,
    },
    server::error::{item::ItemError, AppError},
};

/// Item still part of the order (or restored to it).
pub const STATUS_IN_ORDER: i32 = 1;

/// New item reported outside the persisted order.
pub const STATUS_NEW_OUTSIDE_ORDER: i32 = 9;

/// `USU_LOG` recorded for rows created through synchronization.
pub const OFFLINE_USER: &str = "offline";

/// Item record as reported by the client, after wire-format parsing.
#[derive(Debug, Clone, Default)]
pub struct ItemRecord {
    pub id: Option<i32>,
    pub status: Option<i32>,
    pub outside_order: bool,
    pub value: Option<Decimal>,
    pub returned_at: Option<DateTime<Utc>>,
    pub returned_by: Option<String>,
    /// `Some` whenever the client sent the flag, `Some(None)` when it was `null`.
    pub reschedule_next_month: Option<Option<bool>>,
    pub order_id: Option<i32>,
    pub product_reference: Option<String>,
    pub product_description: Option<String>,
    pub outside_order_flag: Option<i32>,
    pub coupon_code: Option<String>,
    pub unit_code: Option<String>,
    pub correlation_id: Option<Value>,
}

impl From<ItemRecordDto> for ItemRecord {
    fn from(dto: ItemRecordDto) -> Self {
        Self {
            id: dto.ipe_cod,
            status: dto.ipe_sta,
            outside_order: dto.fora_do_pedido.unwrap_or(false),
            value: dto.ipe_vtl,
            returned_at: dto.ipe_ddv,
            returned_by: dto.usu_dev,
            reschedule_next_month: dto.remarcado_prox_mes,
            order_id: dto.ped_cod,
            product_reference: dto.cup_ref,
            product_description: dto.pro_des,
            outside_order_flag: dto.ipe_dfp,
            coupon_code: dto.cup_cod,
            unit_code: dto.uni_cod,
            correlation_id: dto.cup_cdi,
        }
    }
}

impl ItemRecord {
    /// Parses one raw batch entry.
    ///
    /// # Returns
    /// - `Ok(ItemRecord)` - Every field sent has an accepted shape
    /// - `Err(ItemError::Malformed)` - The entry is not an object or a field cannot be
    ///   parsed; only this item fails
    pub fn from_value(value: Value) -> Result<Self, ItemError> {
        serde_json::from_value::<ItemRecordDto>(value)
            .map(Self::from)
            .map_err(|e| ItemError::Malformed(e.to_string()))
    }
}

/// Synchronization batch, one parse result per entry in request order.
#[derive(Debug)]
pub struct SyncItemsParams {
    pub items: Vec<Result<ItemRecord, ItemError>>,
}

impl SyncItemsParams {
    /// Converts the request body into a batch, rejecting a missing or empty list.
    ///
    /// # Returns
    /// - `Ok(SyncItemsParams)` - At least one item present; malformed entries are kept
    ///   as per-item errors
    /// - `Err(AppError::Validation)` - `itens` absent or empty
    pub fn from_dto(dto: SyncItemsDto) -> Result<Self, AppError> {
        match dto.itens {
            Some(items) if !items.is_empty() => Ok(Self {
                items: items.into_iter().map(ItemRecord::from_value).collect(),
            }),
            _ => Err(AppError::Validation(
                "É necessário enviar um array de itens para sincronizar.".to_string(),
            )),
        }
    }
}

/// What to do with one item of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemAction {
    /// Outside-order item removed on the device. Without an id the row was never
    /// persisted and there is nothing to delete.
    Delete { id: Option<i32> },
    /// New outside-order item to persist.
    Insert,
    /// Status, devolution or reschedule change. Without an id no row can match.
    Update { id: Option<i32> },
    /// Devolution undone on an order item: restore it to the cleared state.
    Undo { id: i32 },
    NoOp,
}

impl ItemAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Delete { .. } => "delete",
            Self::Insert => "insert",
            Self::Update { .. } => "update",
            Self::Undo { .. } => "undo",
            Self::NoOp => "no-op",
        }
    }
}

/// Decides the action for an item. Rules are evaluated in order; the first match wins.
///
/// 1. outside order with status 1 → delete
/// 2. outside order with status 9 → insert
/// 3. id present with status other than 1, or reschedule flag sent → update
/// 4. id present with status 1 → undo
/// 5. anything else → no-op
pub fn classify(item: &ItemRecord) -> ItemAction {
    let status = item.status;

    if item.outside_order && status == Some(STATUS_IN_ORDER) {
        return ItemAction::Delete { id: item.id };
    }

    if item.outside_order && status == Some(STATUS_NEW_OUTSIDE_ORDER) {
        return ItemAction::Insert;
    }

    if (item.id.is_some() && status != Some(STATUS_IN_ORDER))
        || item.reschedule_next_month.is_some()
    {
        return ItemAction::Update { id: item.id };
    }

    match item.id {
        Some(id) if status == Some(STATUS_IN_ORDER) => ItemAction::Undo { id },
        _ => ItemAction::NoOp,
    }
}

/// Row values for an outside-order item being inserted.
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub order_id: i32,
    pub product_code: Option<String>,
    pub product_description: Option<String>,
    pub value: Decimal,
    pub status: i32,
    pub outside_order_flag: Option<i32>,
    pub returned_at: Option<DateTime<Utc>>,
    pub returned_by: Option<String>,
    pub coupon_code: Option<String>,
    pub unit_code: Option<String>,
    pub rescheduled_next_month: bool,
}

impl NewOrderItem {
    /// Builds the insert values, requiring the order and the item value.
    ///
    /// # Returns
    /// - `Ok(NewOrderItem)` - All mandatory columns present
    /// - `Err(ItemError::MissingField)` - `PED_COD`, `IPE_VTL` or `IPE_STA` absent
    pub fn from_record(item: &ItemRecord) -> Result<Self, ItemError> {
        Ok(Self {
            order_id: item.order_id.ok_or(ItemError::MissingField("PED_COD"))?,
            product_code: item.product_reference.clone(),
            product_description: item.product_description.clone(),
            value: item.value.ok_or(ItemError::MissingField("IPE_VTL"))?,
            status: item.status.ok_or(ItemError::MissingField("IPE_STA"))?,
            outside_order_flag: item.outside_order_flag,
            returned_at: item.returned_at,
            returned_by: item.returned_by.clone(),
            coupon_code: item.coupon_code.clone(),
            unit_code: item.unit_code.clone(),
            rescheduled_next_month: item.reschedule_next_month.flatten().unwrap_or(false),
        })
    }
}

/// Column values written by an update.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemStatusUpdate {
    pub status: i32,
    pub returned_at: Option<DateTime<Utc>>,
    pub returned_by: Option<String>,
    pub rescheduled_next_month: bool,
}

impl ItemStatusUpdate {
    pub fn from_record(item: &ItemRecord) -> Result<Self, ItemError> {
        Ok(Self {
            status: item.status.ok_or(ItemError::MissingField("IPE_STA"))?,
            returned_at: item.returned_at,
            returned_by: item.returned_by.clone(),
            rescheduled_next_month: item.reschedule_next_month.flatten().unwrap_or(false),
        })
    }
}

/// Result of applying one item's action.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemOutcome {
    Inserted {
        id: i32,
        correlation_id: Option<Value>,
    },
    Updated {
        id: i32,
    },
    Undone {
        id: i32,
    },
    Deleted {
        id: i32,
    },
    /// The action matched no row, or could not target one for lack of an id.
    /// Logged as a warning and not counted.
    Unaffected {
        action: ItemAction,
    },
    NoOp,
    Failed {
        error: String,
    },
}

/// Outcomes of a synchronization batch, one per item in request order.
#[derive(Debug, Clone, Default)]
pub struct SyncSummary {
    pub outcomes: Vec<ItemOutcome>,
}

impl SyncSummary {
    /// Updates and undos that touched a row.
    pub fn synced(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, ItemOutcome::Updated { .. } | ItemOutcome::Undone { .. }))
            .count()
    }

    pub fn inserted(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, ItemOutcome::Inserted { .. }))
            .count()
    }

    pub fn deleted(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, ItemOutcome::Deleted { .. }))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, ItemOutcome::Failed { .. }))
            .count()
    }

    /// Converts the summary into the response body.
    pub fn into_dto(self) -> SyncItemsResponseDto {
        let sincronizados = self.synced();
        let inseridos = self.inserted();
        let deletados = self.deleted();

        let mut details = SyncDetailsDto {
            itens_inseridos: Vec::new(),
            itens_atualizados: Vec::new(),
            itens_deletados: Vec::new(),
            itens_com_falha: Vec::new(),
        };

        for (indice, outcome) in self.outcomes.into_iter().enumerate() {
            match outcome {
                ItemOutcome::Inserted { id, correlation_id } => {
                    details.itens_inseridos.push(InsertedItemDto {
                        ipe_cod: id,
                        cup_cdi: correlation_id,
                        indice,
                    })
                }
                ItemOutcome::Updated { id } | ItemOutcome::Undone { id } => {
                    details.itens_atualizados.push(ItemRefDto { ipe_cod: id })
                }
                ItemOutcome::Deleted { id } => {
                    details.itens_deletados.push(ItemRefDto { ipe_cod: id })
                }
                ItemOutcome::Failed { error } => details
                    .itens_com_falha
                    .push(FailedItemDto { indice, erro: error }),
                ItemOutcome::Unaffected { .. } | ItemOutcome::NoOp => {}
            }
        }

        SyncItemsResponseDto {
            success: true,
            message: "Sincronização concluída com sucesso!".to_string(),
            sincronizados,
            inseridos,
            deletados,
            detalhes: details,
        }
    }
}
