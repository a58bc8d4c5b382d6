use std::collections::BTreeMap;

use crate::server::{
    data::procedure::{ProcedureCall, ProcedureRepository},
    model::catalog::{OrderItemsFilter, PendingSettlementsParams},
};
use sea_orm::{DbBackend, DbErr, MockDatabase, Transaction, Value};
use serde_json::json;

mod call;
mod finalize_settlement;
mod listings;
