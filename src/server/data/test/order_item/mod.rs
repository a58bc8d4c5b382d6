use crate::server::{
    data::order_item::OrderItemRepository,
    model::item::{ItemStatusUpdate, NewOrderItem},
};
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod undo_return;
mod update_status;
