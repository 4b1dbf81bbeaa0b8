use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::financial::FinancialTransactionInput;

pub struct FinancialTransactionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FinancialTransactionRepository<'a, C> {
    /// Creates a new instance of [`FinancialTransactionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        input: &FinancialTransactionInput,
    ) -> Result<entity::financial_transaction::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let mut transaction = entity::financial_transaction::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };
        apply_input(&mut transaction, input);

        transaction.insert(self.db).await
    }

    /// Lists the user's transactions by transaction date, newest first
    pub async fn get_all_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::financial_transaction::Model>, DbErr> {
        entity::prelude::FinancialTransaction::find()
            .filter(entity::financial_transaction::Column::UserId.eq(user_id))
            .order_by_desc(entity::financial_transaction::Column::TransactionDate)
            .order_by_desc(entity::financial_transaction::Column::CreatedAt)
            .order_by_desc(entity::financial_transaction::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_for_user(
        &self,
        user_id: i32,
        transaction_id: i32,
    ) -> Result<Option<entity::financial_transaction::Model>, DbErr> {
        entity::prelude::FinancialTransaction::find_by_id(transaction_id)
            .filter(entity::financial_transaction::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Returns `Ok(None)` if the transaction does not exist or belongs to another user.
    pub async fn update(
        &self,
        user_id: i32,
        transaction_id: i32,
        input: &FinancialTransactionInput,
    ) -> Result<Option<entity::financial_transaction::Model>, DbErr> {
        let Some(transaction) = self.get_for_user(user_id, transaction_id).await? else {
            return Ok(None);
        };

        let mut transaction_am = transaction.into_active_model();
        apply_input(&mut transaction_am, input);
        transaction_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(transaction_am.update(self.db).await?))
    }

    pub async fn delete(&self, user_id: i32, transaction_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FinancialTransaction::delete_many()
            .filter(entity::financial_transaction::Column::Id.eq(transaction_id))
            .filter(entity::financial_transaction::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }
}

fn apply_input(
    transaction: &mut entity::financial_transaction::ActiveModel,
    input: &FinancialTransactionInput,
) {
    transaction.description = ActiveValue::Set(input.description.trim().to_string());
    transaction.amount = ActiveValue::Set(input.amount);
    transaction.transaction_type =
        ActiveValue::Set(input.transaction_type.as_str().to_string());
    transaction.category = ActiveValue::Set(input.category.trim().to_string());
    transaction.transaction_date = ActiveValue::Set(input.transaction_date);
}
