mod get_summary {
    use axum::{extract::State, http::StatusCode, response::IntoResponse};
    use chrono::NaiveDate;
    use mirtilo::{model::financial::FinancialSummary, server::controller::financial::get_summary};
    use mirtilo_test_utils::prelude::*;

    use crate::util::{body_json, TestContextExt};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, d).expect("valid test date")
    }

    /// Expect income minus expense over the user's transactions only
    #[tokio::test]
    async fn sums_user_transactions() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let other = test.user().insert_user("other-subject", "other@example.com").await?;
        test.condo().insert_transaction(other.id, "income", 999.0, day(1)).await?;
        let user_id = test.sign_in(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;
        test.condo().insert_transaction(user_id, "income", 100.0, day(2)).await?;
        test.condo().insert_transaction(user_id, "expense", 40.0, day(3)).await?;

        let response = get_summary(State(test.to_app_state()), test.session.clone())
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let summary: FinancialSummary = body_json(response).await;
        assert_eq!(summary.income, 100.0);
        assert_eq!(summary.expense, 40.0);
        assert_eq!(summary.balance, 60.0);

        Ok(())
    }

    /// Expect zeros for a user without transactions
    #[tokio::test]
    async fn empty_ledger_is_zero() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        test.sign_in(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;

        let response = get_summary(State(test.to_app_state()), test.session.clone())
            .await
            .into_response();

        let summary: FinancialSummary = body_json(response).await;
        assert_eq!(summary, FinancialSummary::default());

        Ok(())
    }
}

mod create_transaction {
    use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
    use mirtilo::{model::financial::FinancialTransactionInput, server::controller::financial::create_transaction};
    use mirtilo_test_utils::prelude::*;
    use serde_json::json;

    use crate::util::TestContextExt;

    /// Expect 400 for a zero amount
    #[tokio::test]
    async fn rejects_zero_amount() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        test.sign_in(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;

        let input: FinancialTransactionInput = serde_json::from_value(json!({
            "description": "Conta de luz",
            "amount": 0.0,
            "transaction_type": "expense",
            "category": "Energia Elétrica",
            "transaction_date": "2025-05-10",
        }))?;

        let response = create_transaction(State(test.to_app_state()), test.session.clone(), Json(input))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }
}
