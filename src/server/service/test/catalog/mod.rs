use std::collections::BTreeMap;

use crate::server::{
    model::catalog::{DiscountRulesParams, OrderItemsFilter, PendingSettlementsParams},
    service::catalog::CatalogService,
};
use sea_orm::{DbBackend, DbErr, MockDatabase, Value};
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};
