use crate::server::{
    error::{auth::AuthError, AppError},
    model::promoter::LoginParams,
    service::promoter::PromoterService,
};
use test_utils::{builder::TestBuilder, factory};

mod login;
