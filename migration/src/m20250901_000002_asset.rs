use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250901_000001_app_user::AppUser;

static IDX_ASSET_USER_ID: &str = "idx-asset-user_id";
static FK_ASSET_USER_ID: &str = "fk-asset-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Asset::Table)
                    .if_not_exists()
                    .col(pk_auto(Asset::Id))
                    .col(integer(Asset::UserId))
                    .col(string(Asset::Name))
                    .col(string(Asset::Category))
                    .col(text_null(Asset::Description))
                    .col(string_null(Asset::Location))
                    .col(date_null(Asset::AcquisitionDate))
                    .col(double_null(Asset::AcquisitionValue))
                    .col(double_null(Asset::CurrentValue))
                    .col(string(Asset::Condition))
                    .col(string_null(Asset::Manufacturer))
                    .col(string_null(Asset::Model))
                    .col(string_null(Asset::SerialNumber))
                    .col(date_null(Asset::WarrantyExpiry))
                    .col(integer_null(Asset::UsefulLifeYears))
                    .col(timestamp(Asset::CreatedAt))
                    .col(timestamp(Asset::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ASSET_USER_ID)
                    .table(Asset::Table)
                    .col(Asset::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ASSET_USER_ID)
                    .from_tbl(Asset::Table)
                    .from_col(Asset::UserId)
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
                    .name(FK_ASSET_USER_ID)
                    .table(Asset::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ASSET_USER_ID)
                    .table(Asset::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Asset::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Asset {
    Table,
    Id,
    UserId,
    Name,
    Category,
    Description,
    Location,
    AcquisitionDate,
    AcquisitionValue,
    CurrentValue,
    Condition,
    Manufacturer,
    Model,
    SerialNumber,
    WarrantyExpiry,
    UsefulLifeYears,
    CreatedAt,
    UpdatedAt,
}
