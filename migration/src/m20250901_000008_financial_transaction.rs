use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250901_000001_app_user::AppUser;

static IDX_FINANCIAL_TRANSACTION_USER_ID: &str = "idx-financial_transaction-user_id";
static FK_FINANCIAL_TRANSACTION_USER_ID: &str = "fk-financial_transaction-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FinancialTransaction::Table)
                    .if_not_exists()
                    .col(pk_auto(FinancialTransaction::Id))
                    .col(integer(FinancialTransaction::UserId))
                    .col(string(FinancialTransaction::Description))
                    .col(double(FinancialTransaction::Amount))
                    .col(string(FinancialTransaction::TransactionType))
                    .col(string(FinancialTransaction::Category))
                    .col(date(FinancialTransaction::TransactionDate))
                    .col(timestamp(FinancialTransaction::CreatedAt))
                    .col(timestamp(FinancialTransaction::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FINANCIAL_TRANSACTION_USER_ID)
                    .table(FinancialTransaction::Table)
                    .col(FinancialTransaction::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FINANCIAL_TRANSACTION_USER_ID)
                    .from_tbl(FinancialTransaction::Table)
                    .from_col(FinancialTransaction::UserId)
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
                    .name(FK_FINANCIAL_TRANSACTION_USER_ID)
                    .table(FinancialTransaction::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FINANCIAL_TRANSACTION_USER_ID)
                    .table(FinancialTransaction::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FinancialTransaction::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FinancialTransaction {
    Table,
    Id,
    UserId,
    Description,
    Amount,
    TransactionType,
    Category,
    TransactionDate,
    CreatedAt,
    UpdatedAt,
}
