use crate::server::{data::promoter::PromoterRepository, model::promoter::LoginParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_credentials;
