use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250901_000001_app_user::AppUser;

static IDX_MAINTENANCE_REQUEST_USER_ID: &str = "idx-maintenance_request-user_id";
static FK_MAINTENANCE_REQUEST_USER_ID: &str = "fk-maintenance_request-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // `asset_id` is a soft reference; deleting an asset leaves its requests alone
        manager
            .create_table(
                Table::create()
                    .table(MaintenanceRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(MaintenanceRequest::Id))
                    .col(integer(MaintenanceRequest::UserId))
                    .col(integer_null(MaintenanceRequest::AssetId))
                    .col(string(MaintenanceRequest::Title))
                    .col(text(MaintenanceRequest::Description))
                    .col(string(MaintenanceRequest::Category))
                    .col(string(MaintenanceRequest::Priority))
                    .col(string(MaintenanceRequest::Status))
                    .col(string_null(MaintenanceRequest::LocationKind))
                    .col(string_null(MaintenanceRequest::Location))
                    .col(date(MaintenanceRequest::RequestedDate))
                    .col(date_null(MaintenanceRequest::ScheduledDate))
                    .col(date_null(MaintenanceRequest::CompletedDate))
                    .col(double_null(MaintenanceRequest::EstimatedCost))
                    .col(double_null(MaintenanceRequest::ActualCost))
                    .col(string_null(MaintenanceRequest::AssignedTo))
                    .col(string_null(MaintenanceRequest::RequesterName))
                    .col(string_null(MaintenanceRequest::RequesterUnit))
                    .col(text_null(MaintenanceRequest::Notes))
                    .col(timestamp(MaintenanceRequest::CreatedAt))
                    .col(timestamp(MaintenanceRequest::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MAINTENANCE_REQUEST_USER_ID)
                    .table(MaintenanceRequest::Table)
                    .col(MaintenanceRequest::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MAINTENANCE_REQUEST_USER_ID)
                    .from_tbl(MaintenanceRequest::Table)
                    .from_col(MaintenanceRequest::UserId)
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
                    .name(FK_MAINTENANCE_REQUEST_USER_ID)
                    .table(MaintenanceRequest::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MAINTENANCE_REQUEST_USER_ID)
                    .table(MaintenanceRequest::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MaintenanceRequest::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum MaintenanceRequest {
    Table,
    Id,
    UserId,
    AssetId,
    Title,
    Description,
    Category,
    Priority,
    Status,
    LocationKind,
    Location,
    RequestedDate,
    ScheduledDate,
    CompletedDate,
    EstimatedCost,
    ActualCost,
    AssignedTo,
    RequesterName,
    RequesterUnit,
    Notes,
    CreatedAt,
    UpdatedAt,
}
