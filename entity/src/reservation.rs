use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reservation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub common_area_id: i32,
    pub start_at: DateTime,
    pub end_at: DateTime,
    pub status: String,
    pub payment_status: String,
    pub purpose: Option<String>,
    pub expected_guests: Option<i32>,
    pub total_cost: Option<f64>,
    pub location_kind: String,
    pub unit_number: Option<String>,
    pub location_detail: Option<String>,
    pub responsible_name: Option<String>,
    pub responsible_unit: Option<String>,
    pub needs_cleaning: bool,
    pub needs_furniture: bool,
    pub furniture_details: Option<String>,
    pub agrees_to_rules: bool,
    pub special_requests: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::app_user::Entity",
        from = "Column::UserId",
        to = "super::app_user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    AppUser,
    #[sea_orm(
        belongs_to = "super::common_area::Entity",
        from = "Column::CommonAreaId",
        to = "super::common_area::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    CommonArea,
}

impl Related<super::app_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AppUser.def()
    }
}

impl Related<super::common_area::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CommonArea.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
