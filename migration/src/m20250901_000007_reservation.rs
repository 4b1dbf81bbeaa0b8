use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20250901_000001_app_user::AppUser, m20250901_000006_common_area::CommonArea,
};

static IDX_RESERVATION_USER_ID: &str = "idx-reservation-user_id";
static IDX_RESERVATION_AREA_WINDOW: &str = "idx-reservation-common_area_id-start_at-end_at";
static FK_RESERVATION_USER_ID: &str = "fk-reservation-user_id";
static FK_RESERVATION_COMMON_AREA_ID: &str = "fk-reservation-common_area_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(integer(Reservation::UserId))
                    .col(integer(Reservation::CommonAreaId))
                    .col(timestamp(Reservation::StartAt))
                    .col(timestamp(Reservation::EndAt))
                    .col(string(Reservation::Status))
                    .col(string(Reservation::PaymentStatus))
                    .col(text_null(Reservation::Purpose))
                    .col(integer_null(Reservation::ExpectedGuests))
                    .col(double_null(Reservation::TotalCost))
                    .col(string(Reservation::LocationKind))
                    .col(string_null(Reservation::UnitNumber))
                    .col(string_null(Reservation::LocationDetail))
                    .col(string_null(Reservation::ResponsibleName))
                    .col(string_null(Reservation::ResponsibleUnit))
                    .col(boolean(Reservation::NeedsCleaning).default(false))
                    .col(boolean(Reservation::NeedsFurniture).default(false))
                    .col(text_null(Reservation::FurnitureDetails))
                    .col(boolean(Reservation::AgreesToRules).default(false))
                    .col(text_null(Reservation::SpecialRequests))
                    .col(text_null(Reservation::Notes))
                    .col(timestamp(Reservation::CreatedAt))
                    .col(timestamp(Reservation::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RESERVATION_USER_ID)
                    .table(Reservation::Table)
                    .col(Reservation::UserId)
                    .to_owned(),
            )
            .await?;

        // Serves the double-booking lookup
        manager
            .create_index(
                Index::create()
                    .name(IDX_RESERVATION_AREA_WINDOW)
                    .table(Reservation::Table)
                    .col(Reservation::CommonAreaId)
                    .col(Reservation::StartAt)
                    .col(Reservation::EndAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RESERVATION_USER_ID)
                    .from_tbl(Reservation::Table)
                    .from_col(Reservation::UserId)
                    .to_tbl(AppUser::Table)
                    .to_col(AppUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RESERVATION_COMMON_AREA_ID)
                    .from_tbl(Reservation::Table)
                    .from_col(Reservation::CommonAreaId)
                    .to_tbl(CommonArea::Table)
                    .to_col(CommonArea::Id)
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
                    .name(FK_RESERVATION_COMMON_AREA_ID)
                    .table(Reservation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_RESERVATION_USER_ID)
                    .table(Reservation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RESERVATION_AREA_WINDOW)
                    .table(Reservation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RESERVATION_USER_ID)
                    .table(Reservation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Reservation {
    Table,
    Id,
    UserId,
    CommonAreaId,
    StartAt,
    EndAt,
    Status,
    PaymentStatus,
    Purpose,
    ExpectedGuests,
    TotalCost,
    LocationKind,
    UnitNumber,
    LocationDetail,
    ResponsibleName,
    ResponsibleUnit,
    NeedsCleaning,
    NeedsFurniture,
    FurnitureDetails,
    AgreesToRules,
    SpecialRequests,
    Notes,
    CreatedAt,
    UpdatedAt,
}
