use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::preventive::PreventiveMaintenanceInput;

pub struct PreventiveMaintenanceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PreventiveMaintenanceRepository<'a, C> {
    /// Creates a new instance of [`PreventiveMaintenanceRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        input: &PreventiveMaintenanceInput,
    ) -> Result<entity::preventive_maintenance::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let mut entry = entity::preventive_maintenance::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };
        apply_input(&mut entry, input);

        entry.insert(self.db).await
    }

    pub async fn get_all_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::preventive_maintenance::Model>, DbErr> {
        entity::prelude::PreventiveMaintenance::find()
            .filter(entity::preventive_maintenance::Column::UserId.eq(user_id))
            .order_by_desc(entity::preventive_maintenance::Column::CreatedAt)
            .order_by_desc(entity::preventive_maintenance::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_for_user(
        &self,
        user_id: i32,
        entry_id: i32,
    ) -> Result<Option<entity::preventive_maintenance::Model>, DbErr> {
        entity::prelude::PreventiveMaintenance::find_by_id(entry_id)
            .filter(entity::preventive_maintenance::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Returns `Ok(None)` if the schedule entry does not exist or belongs to another user.
    pub async fn update(
        &self,
        user_id: i32,
        entry_id: i32,
        input: &PreventiveMaintenanceInput,
    ) -> Result<Option<entity::preventive_maintenance::Model>, DbErr> {
        let Some(entry) = self.get_for_user(user_id, entry_id).await? else {
            return Ok(None);
        };

        let mut entry_am = entry.into_active_model();
        apply_input(&mut entry_am, input);
        entry_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(entry_am.update(self.db).await?))
    }

    pub async fn delete(&self, user_id: i32, entry_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::PreventiveMaintenance::delete_many()
            .filter(entity::preventive_maintenance::Column::Id.eq(entry_id))
            .filter(entity::preventive_maintenance::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }
}

fn apply_input(
    entry: &mut entity::preventive_maintenance::ActiveModel,
    input: &PreventiveMaintenanceInput,
) {
    entry.asset_id = ActiveValue::Set(input.asset_id);
    entry.maintenance_type = ActiveValue::Set(input.maintenance_type.trim().to_string());
    entry.description = ActiveValue::Set(input.description.trim().to_string());
    entry.periodicity = ActiveValue::Set(input.periodicity.as_str().to_string());
    entry.usage_detail = ActiveValue::Set(input.usage_detail());
    entry.next_due_date = ActiveValue::Set(input.next_due_date);
    entry.responsible_party = ActiveValue::Set(input.responsible_party.trim().to_string());
    entry.estimated_cost = ActiveValue::Set(input.estimated_cost);
    entry.status = ActiveValue::Set(input.status.as_str().to_string());
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::model::preventive::{Periodicity, PreventiveMaintenanceInput};

    fn input(periodicity: Periodicity, usage_detail: Option<&str>) -> PreventiveMaintenanceInput {
        PreventiveMaintenanceInput {
            maintenance_type: "Limpeza de caixa d'água".to_string(),
            description: "Limpeza e desinfecção".to_string(),
            periodicity,
            usage_detail: usage_detail.map(str::to_string),
            next_due_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            responsible_party: "Hidro Serviços".to_string(),
            ..Default::default()
        }
    }

    mod create {
        use mirtilo_test_utils::prelude::*;

        use super::input;
        use crate::{
            model::preventive::Periodicity,
            server::data::preventive_maintenance::PreventiveMaintenanceRepository,
        };

        /// Expect usage detail to be kept only for per-use schedules
        #[tokio::test]
        async fn keeps_usage_detail_for_per_use() -> Result<(), TestError> {
            let mut test = test_setup_with_user_tables!()?;
            let user = test.user().insert_user(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;

            let repository = PreventiveMaintenanceRepository::new(&test.db);

            let per_use = repository
                .create(user.id, &input(Periodicity::PerUse, Some("A cada 500 horas")))
                .await?;
            assert_eq!(per_use.periodicity, "per_use");
            assert_eq!(per_use.usage_detail.as_deref(), Some("A cada 500 horas"));

            let monthly = repository
                .create(user.id, &input(Periodicity::Monthly, Some("ignorado")))
                .await?;
            assert_eq!(monthly.periodicity, "monthly");
            assert!(monthly.usage_detail.is_none());

            Ok(())
        }
    }

    mod update {
        use chrono::NaiveDate;
        use mirtilo_test_utils::prelude::*;

        use super::input;
        use crate::{
            model::preventive::Periodicity,
            server::data::preventive_maintenance::PreventiveMaintenanceRepository,
        };

        /// Expect a manually advanced due date to persist
        #[tokio::test]
        async fn updates_next_due_date() -> Result<(), TestError> {
            let mut test = test_setup_with_user_tables!()?;
            let user = test.user().insert_user(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;

            let repository = PreventiveMaintenanceRepository::new(&test.db);
            let entry = repository
                .create(user.id, &input(Periodicity::Quarterly, None))
                .await?;

            let mut changed = input(Periodicity::Quarterly, None);
            changed.next_due_date = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
            let updated = repository.update(user.id, entry.id, &changed).await?;

            assert_eq!(
                updated.map(|e| e.next_due_date),
                NaiveDate::from_ymd_opt(2025, 10, 1)
            );

            Ok(())
        }
    }

    mod delete {
        use mirtilo_test_utils::prelude::*;

        use super::input;
        use crate::{
            model::preventive::Periodicity,
            server::data::preventive_maintenance::PreventiveMaintenanceRepository,
        };

        /// Expect no rows affected when another user deletes the entry
        #[tokio::test]
        async fn ignores_other_users() -> Result<(), TestError> {
            let mut test = test_setup_with_user_tables!()?;
            let user = test.user().insert_user(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;
            let other = test.user().insert_user("other", "other@example.com").await?;

            let repository = PreventiveMaintenanceRepository::new(&test.db);
            let entry = repository
                .create(user.id, &input(Periodicity::Annual, None))
                .await?;

            let result = repository.delete(other.id, entry.id).await?;
            assert_eq!(result.rows_affected, 0);
            assert_eq!(repository.get_all_by_user(user.id).await?.len(), 1);

            Ok(())
        }
    }
}
