use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250901_000001_app_user::AppUser;

static IDX_SUPPLIER_USER_ID: &str = "idx-supplier-user_id";
static FK_SUPPLIER_USER_ID: &str = "fk-supplier-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Supplier::Table)
                    .if_not_exists()
                    .col(pk_auto(Supplier::Id))
                    .col(integer(Supplier::UserId))
                    .col(string(Supplier::Name))
                    .col(string_null(Supplier::TradeName))
                    .col(string_null(Supplier::PersonType))
                    .col(string_null(Supplier::TaxId))
                    .col(string_null(Supplier::Email))
                    .col(string_null(Supplier::Landline))
                    .col(string_null(Supplier::Mobile))
                    .col(string_null(Supplier::PostalCode))
                    .col(string_null(Supplier::Street))
                    .col(string_null(Supplier::Number))
                    .col(string_null(Supplier::Complement))
                    .col(string_null(Supplier::District))
                    .col(string_null(Supplier::City))
                    .col(string_null(Supplier::State))
                    .col(string_null(Supplier::Bank))
                    .col(string_null(Supplier::BankBranch))
                    .col(string_null(Supplier::BankAccount))
                    .col(string_null(Supplier::AccountType))
                    .col(string(Supplier::Category))
                    .col(text(Supplier::Services))
                    .col(text_null(Supplier::Notes))
                    .col(boolean(Supplier::IsActive).default(true))
                    .col(timestamp(Supplier::CreatedAt))
                    .col(timestamp(Supplier::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SUPPLIER_USER_ID)
                    .table(Supplier::Table)
                    .col(Supplier::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SUPPLIER_USER_ID)
                    .from_tbl(Supplier::Table)
                    .from_col(Supplier::UserId)
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
                    .name(FK_SUPPLIER_USER_ID)
                    .table(Supplier::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SUPPLIER_USER_ID)
                    .table(Supplier::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Supplier::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Supplier {
    Table,
    Id,
    UserId,
    Name,
    TradeName,
    PersonType,
    TaxId,
    Email,
    Landline,
    Mobile,
    PostalCode,
    Street,
    Number,
    Complement,
    District,
    City,
    State,
    Bank,
    BankBranch,
    BankAccount,
    AccountType,
    Category,
    Services,
    Notes,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
