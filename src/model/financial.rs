use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::model::{
    record_list::{Messages, Record},
    validation::{require, require_positive, ValidationError},
};

text_enum! {
    #[derive(Default)]
    TransactionType, "transaction_type" {
        #[default]
        Income => ("income", "Receita"),
        Expense => ("expense", "Despesa"),
    }
}

impl TransactionType {
    /// Category suggestions offered by the transaction form
    pub fn categories(&self) -> &'static [&'static str] {
        match self {
            TransactionType::Income => &[
                "Taxa de Condomínio",
                "Multas",
                "Fundo de Reserva",
                "Outros Recebimentos",
            ],
            TransactionType::Expense => &[
                "Limpeza",
                "Segurança",
                "Manutenção",
                "Energia Elétrica",
                "Água",
                "Elevador",
                "Jardinagem",
                "Administração",
                "Outros Gastos",
            ],
        }
    }
}

pub const TRANSACTION_MESSAGES: Messages = Messages {
    created: "Transação registrada com sucesso!",
    updated: "Transação atualizada com sucesso!",
    deleted: "Transação removida com sucesso!",
    fetch_failed: "Erro ao carregar transações",
    create_failed: "Erro ao registrar transação",
    update_failed: "Erro ao atualizar transação",
    delete_failed: "Erro ao remover transação",
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct FinancialTransactionDto {
    pub id: i32,
    pub description: String,
    pub amount: f64,
    pub transaction_type: TransactionType,
    pub category: String,
    pub transaction_date: NaiveDate,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Record for FinancialTransactionDto {
    fn id(&self) -> i32 {
        self.id
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct FinancialTransactionInput {
    pub description: String,
    pub amount: f64,
    pub transaction_type: TransactionType,
    pub category: String,
    pub transaction_date: NaiveDate,
}

impl FinancialTransactionInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("description", &self.description)?;
        require("category", &self.category)?;
        require_positive("amount", self.amount)?;

        Ok(())
    }
}

impl From<&FinancialTransactionDto> for FinancialTransactionInput {
    fn from(transaction: &FinancialTransactionDto) -> Self {
        Self {
            description: transaction.description.clone(),
            amount: transaction.amount,
            transaction_type: transaction.transaction_type,
            category: transaction.category.clone(),
            transaction_date: transaction.transaction_date,
        }
    }
}

/// Income, expense and running balance over a list of transactions
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct FinancialSummary {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

impl FinancialSummary {
    /// Single pass over `(type, amount)` pairs
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (TransactionType, f64)>,
    {
        let (income, expense) =
            entries
                .into_iter()
                .fold((0.0, 0.0), |(income, expense), (kind, amount)| match kind {
                    TransactionType::Income => (income + amount, expense),
                    TransactionType::Expense => (income, expense + amount),
                });

        Self {
            income,
            expense,
            balance: income - expense,
        }
    }

    pub fn from_transactions(transactions: &[FinancialTransactionDto]) -> Self {
        Self::from_entries(
            transactions
                .iter()
                .map(|t| (t.transaction_type, t.amount)),
        )
    }
}
