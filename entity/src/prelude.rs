pub use super::app_user::Entity as AppUser;
pub use super::asset::Entity as Asset;
pub use super::common_area::Entity as CommonArea;
pub use super::financial_transaction::Entity as FinancialTransaction;
pub use super::maintenance_request::Entity as MaintenanceRequest;
pub use super::preventive_maintenance::Entity as PreventiveMaintenance;
pub use super::reservation::Entity as Reservation;
pub use super::supplier::Entity as Supplier;
