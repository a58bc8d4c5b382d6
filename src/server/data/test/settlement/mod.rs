use crate::server::{data::settlement::SettlementRepository, model::settlement::RegisterReceiptParams};
use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod insert;
