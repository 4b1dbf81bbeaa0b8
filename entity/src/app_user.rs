use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "app_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub auth_subject: String,
    pub email: String,
    pub created_at: DateTime,
    pub last_login_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::asset::Entity")]
    Asset,
    #[sea_orm(has_many = "super::common_area::Entity")]
    CommonArea,
    #[sea_orm(has_many = "super::financial_transaction::Entity")]
    FinancialTransaction,
    #[sea_orm(has_many = "super::maintenance_request::Entity")]
    MaintenanceRequest,
    #[sea_orm(has_many = "super::preventive_maintenance::Entity")]
    PreventiveMaintenance,
    #[sea_orm(has_many = "super::reservation::Entity")]
    Reservation,
    #[sea_orm(has_many = "super::supplier::Entity")]
    Supplier,
}

impl Related<super::asset::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Asset.def()
    }
}

impl Related<super::common_area::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CommonArea.def()
    }
}

impl Related<super::financial_transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FinancialTransaction.def()
    }
}

impl Related<super::maintenance_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MaintenanceRequest.def()
    }
}

impl Related<super::preventive_maintenance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PreventiveMaintenance.def()
    }
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservation.def()
    }
}

impl Related<super::supplier::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Supplier.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
