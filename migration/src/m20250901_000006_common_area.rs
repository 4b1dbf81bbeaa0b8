use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250901_000001_app_user::AppUser;

static IDX_COMMON_AREA_USER_ID: &str = "idx-common_area-user_id";
static FK_COMMON_AREA_USER_ID: &str = "fk-common_area-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CommonArea::Table)
                    .if_not_exists()
                    .col(pk_auto(CommonArea::Id))
                    .col(integer(CommonArea::UserId))
                    .col(string(CommonArea::Name))
                    .col(text_null(CommonArea::Description))
                    .col(integer_null(CommonArea::Capacity))
                    .col(double_null(CommonArea::HourlyRate))
                    .col(double_null(CommonArea::DailyRate))
                    .col(text_null(CommonArea::Rules))
                    .col(boolean(CommonArea::IsActive).default(true))
                    .col(boolean(CommonArea::RequiresApproval).default(false))
                    .col(integer_null(CommonArea::AdvanceBookingDays))
                    .col(integer_null(CommonArea::MaxBookingDurationHours))
                    .col(timestamp(CommonArea::CreatedAt))
                    .col(timestamp(CommonArea::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COMMON_AREA_USER_ID)
                    .table(CommonArea::Table)
                    .col(CommonArea::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_COMMON_AREA_USER_ID)
                    .from_tbl(CommonArea::Table)
                    .from_col(CommonArea::UserId)
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
                    .name(FK_COMMON_AREA_USER_ID)
                    .table(CommonArea::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COMMON_AREA_USER_ID)
                    .table(CommonArea::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CommonArea::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CommonArea {
    Table,
    Id,
    UserId,
    Name,
    Description,
    Capacity,
    HourlyRate,
    DailyRate,
    Rules,
    IsActive,
    RequiresApproval,
    AdvanceBookingDays,
    MaxBookingDurationHours,
    CreatedAt,
    UpdatedAt,
}
