use sea_orm::DatabaseConnection;

use crate::{
    model::financial::{
        FinancialSummary, FinancialTransactionDto, FinancialTransactionInput, TransactionType,
    },
    server::{
        data::financial_transaction::FinancialTransactionRepository,
        error::{resource::ResourceError, Error},
        util::parse::parse_stored,
    },
};

const RESOURCE: &str = "Financial transaction";

impl TryFrom<entity::financial_transaction::Model> for FinancialTransactionDto {
    type Error = Error;

    fn try_from(transaction: entity::financial_transaction::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: transaction.id,
            transaction_type: parse_stored(&transaction.transaction_type)?,
            description: transaction.description,
            amount: transaction.amount,
            category: transaction.category,
            transaction_date: transaction.transaction_date,
            created_at: transaction.created_at,
            updated_at: transaction.updated_at,
        })
    }
}

pub struct FinancialService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FinancialService<'a> {
    /// Creates a new instance of [`FinancialService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_transactions(
        &self,
        user_id: i32,
    ) -> Result<Vec<FinancialTransactionDto>, Error> {
        FinancialTransactionRepository::new(self.db)
            .get_all_by_user(user_id)
            .await?
            .into_iter()
            .map(FinancialTransactionDto::try_from)
            .collect()
    }

    /// Sums income and expense over every transaction of the user
    pub async fn get_summary(&self, user_id: i32) -> Result<FinancialSummary, Error> {
        let transactions = FinancialTransactionRepository::new(self.db)
            .get_all_by_user(user_id)
            .await?;

        let entries = transactions
            .iter()
            .map(|t| Ok((parse_stored::<TransactionType>(&t.transaction_type)?, t.amount)))
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(FinancialSummary::from_entries(entries))
    }

    pub async fn create_transaction(
        &self,
        user_id: i32,
        input: &FinancialTransactionInput,
    ) -> Result<FinancialTransactionDto, Error> {
        input.validate()?;

        FinancialTransactionRepository::new(self.db)
            .create(user_id, input)
            .await?
            .try_into()
    }

    pub async fn update_transaction(
        &self,
        user_id: i32,
        transaction_id: i32,
        input: &FinancialTransactionInput,
    ) -> Result<FinancialTransactionDto, Error> {
        input.validate()?;

        FinancialTransactionRepository::new(self.db)
            .update(user_id, transaction_id, input)
            .await?
            .ok_or(ResourceError::NotFound {
                resource: RESOURCE,
                id: transaction_id,
            })?
            .try_into()
    }

    pub async fn delete_transaction(&self, user_id: i32, transaction_id: i32) -> Result<(), Error> {
        let result = FinancialTransactionRepository::new(self.db)
            .delete(user_id, transaction_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(ResourceError::NotFound {
                resource: RESOURCE,
                id: transaction_id,
            }
            .into());
        }

        Ok(())
    }
}
