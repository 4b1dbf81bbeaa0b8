use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250901_000001_app_user::AppUser;

static IDX_PREVENTIVE_MAINTENANCE_USER_ID: &str = "idx-preventive_maintenance-user_id";
static FK_PREVENTIVE_MAINTENANCE_USER_ID: &str = "fk-preventive_maintenance-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PreventiveMaintenance::Table)
                    .if_not_exists()
                    .col(pk_auto(PreventiveMaintenance::Id))
                    .col(integer(PreventiveMaintenance::UserId))
                    .col(integer_null(PreventiveMaintenance::AssetId))
                    .col(string(PreventiveMaintenance::MaintenanceType))
                    .col(text(PreventiveMaintenance::Description))
                    .col(string(PreventiveMaintenance::Periodicity))
                    .col(string_null(PreventiveMaintenance::UsageDetail))
                    .col(date(PreventiveMaintenance::NextDueDate))
                    .col(string(PreventiveMaintenance::ResponsibleParty))
                    .col(double_null(PreventiveMaintenance::EstimatedCost))
                    .col(string(PreventiveMaintenance::Status))
                    .col(timestamp(PreventiveMaintenance::CreatedAt))
                    .col(timestamp(PreventiveMaintenance::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PREVENTIVE_MAINTENANCE_USER_ID)
                    .table(PreventiveMaintenance::Table)
                    .col(PreventiveMaintenance::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PREVENTIVE_MAINTENANCE_USER_ID)
                    .from_tbl(PreventiveMaintenance::Table)
                    .from_col(PreventiveMaintenance::UserId)
                    .to_tbl(AppUser::Table)
                    .to_col(AppUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PREVENTIVE_MAINTENANCE_USER_ID)
                    .table(PreventiveMaintenance::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PREVENTIVE_MAINTENANCE_USER_ID)
                    .table(PreventiveMaintenance::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PreventiveMaintenance::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum PreventiveMaintenance {
    Table,
    Id,
    UserId,
    AssetId,
    MaintenanceType,
    Description,
    Periodicity,
    UsageDetail,
    NextDueDate,
    ResponsibleParty,
    EstimatedCost,
    Status,
    CreatedAt,
    UpdatedAt,
}
