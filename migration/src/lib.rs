pub use sea_orm_migration::prelude::*;

mod m20250901_000001_app_user;
mod m20250901_000002_asset;
mod m20250901_000003_maintenance_request;
mod m20250901_000004_preventive_maintenance;
mod m20250901_000005_supplier;
mod m20250901_000006_common_area;
mod m20250901_000007_reservation;
mod m20250901_000008_financial_transaction;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_app_user::Migration),
            Box::new(m20250901_000002_asset::Migration),
            Box::new(m20250901_000003_maintenance_request::Migration),
            Box::new(m20250901_000004_preventive_maintenance::Migration),
            Box::new(m20250901_000005_supplier::Migration),
            Box::new(m20250901_000006_common_area::Migration),
            Box::new(m20250901_000007_reservation::Migration),
            Box::new(m20250901_000008_financial_transaction::Migration),
        ]
    }
}
