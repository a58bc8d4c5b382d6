use crate::server::data::discount_rule::DiscountRuleRepository;
use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_order;
