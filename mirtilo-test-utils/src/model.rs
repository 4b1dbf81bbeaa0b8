//! Database model aliases matching those used by the main crate.

pub type UserModel = entity::app_user::Model;
pub type AssetModel = entity::asset::Model;
pub type CommonAreaModel = entity::common_area::Model;
pub type ReservationModel = entity::reservation::Model;
pub type FinancialTransactionModel = entity::financial_transaction::Model;
pub type SupplierModel = entity::supplier::Model;
