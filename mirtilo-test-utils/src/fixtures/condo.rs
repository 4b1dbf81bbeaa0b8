use chrono::{NaiveDate, NaiveDateTime, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{AssetModel, CommonAreaModel, FinancialTransactionModel, ReservationModel},
    TestContext,
};

impl TestContext {
    pub fn condo<'a>(&'a mut self) -> CondoFixtures<'a> {
        CondoFixtures { setup: self }
    }
}

pub struct CondoFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> CondoFixtures<'a> {
    /// Inserts an active common area charging 50.0/hour and 300.0/day, for up to 20 guests
    /// and bookings of at most 8 hours.
    pub async fn insert_common_area(
        &self,
        user_id: i32,
        name: &str,
    ) -> Result<CommonAreaModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::CommonArea::insert(entity::common_area::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                name: ActiveValue::Set(name.to_string()),
                description: ActiveValue::Set(None),
                capacity: ActiveValue::Set(Some(20)),
                hourly_rate: ActiveValue::Set(Some(50.0)),
                daily_rate: ActiveValue::Set(Some(300.0)),
                rules: ActiveValue::Set(None),
                is_active: ActiveValue::Set(true),
                requires_approval: ActiveValue::Set(false),
                advance_booking_days: ActiveValue::Set(Some(30)),
                max_booking_duration_hours: ActiveValue::Set(Some(8)),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Inserts a reservation located in the requester's apartment with the given status.
    pub async fn insert_reservation(
        &self,
        user_id: i32,
        common_area_id: i32,
        start_at: NaiveDateTime,
        end_at: NaiveDateTime,
        status: &str,
    ) -> Result<ReservationModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Reservation::insert(entity::reservation::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                common_area_id: ActiveValue::Set(common_area_id),
                start_at: ActiveValue::Set(start_at),
                end_at: ActiveValue::Set(end_at),
                status: ActiveValue::Set(status.to_string()),
                payment_status: ActiveValue::Set("pending".to_string()),
                purpose: ActiveValue::Set(None),
                expected_guests: ActiveValue::Set(None),
                total_cost: ActiveValue::Set(None),
                location_kind: ActiveValue::Set("apartment".to_string()),
                unit_number: ActiveValue::Set(Some("101".to_string())),
                location_detail: ActiveValue::Set(None),
                responsible_name: ActiveValue::Set(None),
                responsible_unit: ActiveValue::Set(None),
                needs_cleaning: ActiveValue::Set(false),
                needs_furniture: ActiveValue::Set(false),
                furniture_details: ActiveValue::Set(None),
                agrees_to_rules: ActiveValue::Set(true),
                special_requests: ActiveValue::Set(None),
                notes: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_asset(&self, user_id: i32, name: &str) -> Result<AssetModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Asset::insert(entity::asset::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                name: ActiveValue::Set(name.to_string()),
                category: ActiveValue::Set("Equipamentos".to_string()),
                description: ActiveValue::Set(None),
                location: ActiveValue::Set(None),
                acquisition_date: ActiveValue::Set(None),
                acquisition_value: ActiveValue::Set(None),
                current_value: ActiveValue::Set(None),
                condition: ActiveValue::Set("good".to_string()),
                manufacturer: ActiveValue::Set(None),
                model: ActiveValue::Set(None),
                serial_number: ActiveValue::Set(None),
                warranty_expiry: ActiveValue::Set(None),
                useful_life_years: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Inserts a financial transaction; `transaction_type` is `income` or `expense`.
    pub async fn insert_transaction(
        &self,
        user_id: i32,
        transaction_type: &str,
        amount: f64,
        transaction_date: NaiveDate,
    ) -> Result<FinancialTransactionModel, TestError> {
        let now = Utc::now().naive_utc();
        let category = match transaction_type {
            "income" => "Taxa de Condomínio",
            _ => "Limpeza",
        };

        Ok(entity::prelude::FinancialTransaction::insert(
            entity::financial_transaction::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                description: ActiveValue::Set(format!("{} {}", transaction_type, amount)),
                amount: ActiveValue::Set(amount),
                transaction_type: ActiveValue::Set(transaction_type.to_string()),
                category: ActiveValue::Set(category.to_string()),
                transaction_date: ActiveValue::Set(transaction_date),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
