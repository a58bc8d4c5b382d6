pub use super::app_error_log::Entity as AppErrorLog;
pub use super::client::Entity as Client;
pub use super::company::Entity as Company;
pub use super::discount_rule::Entity as DiscountRule;
pub use super::discount_type::Entity as DiscountType;
pub use super::financial_settlement::Entity as FinancialSettlement;
pub use super::order_item::Entity as OrderItem;
