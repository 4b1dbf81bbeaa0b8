use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::maintenance::MaintenanceRequestInput;

pub struct MaintenanceRequestRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MaintenanceRequestRepository<'a, C> {
    /// Creates a new instance of [`MaintenanceRequestRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        input: &MaintenanceRequestInput,
    ) -> Result<entity::maintenance_request::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let mut request = entity::maintenance_request::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };
        apply_input(&mut request, input);

        request.insert(self.db).await
    }

    /// Lists the user's tickets, most recently created first
    pub async fn get_all_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::maintenance_request::Model>, DbErr> {
        entity::prelude::MaintenanceRequest::find()
            .filter(entity::maintenance_request::Column::UserId.eq(user_id))
            .order_by_desc(entity::maintenance_request::Column::CreatedAt)
            .order_by_desc(entity::maintenance_request::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_for_user(
        &self,
        user_id: i32,
        request_id: i32,
    ) -> Result<Option<entity::maintenance_request::Model>, DbErr> {
        entity::prelude::MaintenanceRequest::find_by_id(request_id)
            .filter(entity::maintenance_request::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Returns `Ok(None)` if the ticket does not exist or belongs to another user.
    pub async fn update(
        &self,
        user_id: i32,
        request_id: i32,
        input: &MaintenanceRequestInput,
    ) -> Result<Option<entity::maintenance_request::Model>, DbErr> {
        let Some(request) = self.get_for_user(user_id, request_id).await? else {
            return Ok(None);
        };

        let mut request_am = request.into_active_model();
        apply_input(&mut request_am, input);
        request_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(request_am.update(self.db).await?))
    }

    pub async fn delete(&self, user_id: i32, request_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::MaintenanceRequest::delete_many()
            .filter(entity::maintenance_request::Column::Id.eq(request_id))
            .filter(entity::maintenance_request::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }
}

fn apply_input(
    request: &mut entity::maintenance_request::ActiveModel,
    input: &MaintenanceRequestInput,
) {
    request.asset_id = ActiveValue::Set(input.asset_id);
    request.title = ActiveValue::Set(input.title.trim().to_string());
    request.description = ActiveValue::Set(input.description.trim().to_string());
    request.category = ActiveValue::Set(input.category.trim().to_string());
    request.priority = ActiveValue::Set(input.priority.as_str().to_string());
    request.status = ActiveValue::Set(input.status.as_str().to_string());
    request.location_kind =
        ActiveValue::Set(input.location_kind.map(|kind| kind.as_str().to_string()));
    request.location = ActiveValue::Set(input.location());
    request.requested_date = ActiveValue::Set(input.requested_date);
    request.scheduled_date = ActiveValue::Set(input.scheduled_date);
    request.completed_date = ActiveValue::Set(input.completed_date);
    request.estimated_cost = ActiveValue::Set(input.estimated_cost);
    request.actual_cost = ActiveValue::Set(input.actual_cost);
    request.assigned_to = ActiveValue::Set(input.assigned_to.clone());
    request.requester_name = ActiveValue::Set(input.requester_name.clone());
    request.requester_unit = ActiveValue::Set(input.requester_unit.clone());
    request.notes = ActiveValue::Set(input.notes.clone());
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::model::{location::LocationKind, maintenance::MaintenanceRequestInput};

    fn input(title: &str) -> MaintenanceRequestInput {
        MaintenanceRequestInput {
            title: title.to_string(),
            description: "Lâmpada queimada no corredor".to_string(),
            category: "Manutenção Predial".to_string(),
            location_kind: Some(LocationKind::Apartment),
            unit_number: Some(" 304 ".to_string()),
            requested_date: NaiveDate::from_ymd_opt(2025, 5, 2).unwrap(),
            ..Default::default()
        }
    }

    mod create {
        use mirtilo_test_utils::prelude::*;

        use super::input;
        use crate::server::data::maintenance_request::MaintenanceRequestRepository;

        /// Expect the resolved location and default enums to be stored
        #[tokio::test]
        async fn stores_resolved_location() -> Result<(), TestError> {
            let mut test = test_setup_with_user_tables!()?;
            let user = test.user().insert_user(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;

            let repository = MaintenanceRequestRepository::new(&test.db);
            let request = repository.create(user.id, &input("Lâmpada")).await?;

            assert_eq!(request.location_kind.as_deref(), Some("apartment"));
            assert_eq!(request.location.as_deref(), Some("304"));
            assert_eq!(request.priority, "medium");
            assert_eq!(request.status, "open");

            Ok(())
        }
    }

    mod get_all_by_user {
        use mirtilo_test_utils::prelude::*;

        use super::input;
        use crate::server::data::maintenance_request::MaintenanceRequestRepository;

        /// Expect tickets of other users to be excluded
        #[tokio::test]
        async fn excludes_other_users() -> Result<(), TestError> {
            let mut test = test_setup_with_user_tables!()?;
            let user = test.user().insert_user(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;
            let other = test.user().insert_user("other", "other@example.com").await?;

            let repository = MaintenanceRequestRepository::new(&test.db);
            let first = repository.create(user.id, &input("Primeiro")).await?;
            let second = repository.create(user.id, &input("Segundo")).await?;
            repository.create(other.id, &input("Alheio")).await?;

            let requests = repository.get_all_by_user(user.id).await?;

            let ids: Vec<i32> = requests.iter().map(|r| r.id).collect();
            assert_eq!(ids, vec![second.id, first.id]);

            Ok(())
        }
    }

    mod update {
        use mirtilo_test_utils::prelude::*;

        use super::input;
        use crate::{
            model::maintenance::MaintenanceStatus,
            server::data::maintenance_request::MaintenanceRequestRepository,
        };

        /// Expect the status change to persist
        #[tokio::test]
        async fn updates_status() -> Result<(), TestError> {
            let mut test = test_setup_with_user_tables!()?;
            let user = test.user().insert_user(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;

            let repository = MaintenanceRequestRepository::new(&test.db);
            let request = repository.create(user.id, &input("Lâmpada")).await?;

            let mut changed = input("Lâmpada");
            changed.status = MaintenanceStatus::Completed;
            let updated = repository.update(user.id, request.id, &changed).await?;

            assert_eq!(updated.map(|r| r.status), Some("completed".to_string()));

            Ok(())
        }

        /// Expect None for an unknown ticket
        #[tokio::test]
        async fn returns_none_for_unknown_ticket() -> Result<(), TestError> {
            let mut test = test_setup_with_user_tables!()?;
            let user = test.user().insert_user(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;

            let repository = MaintenanceRequestRepository::new(&test.db);
            let updated = repository.update(user.id, 42, &input("Lâmpada")).await?;

            assert!(updated.is_none());

            Ok(())
        }
    }

    mod delete {
        use mirtilo_test_utils::prelude::*;

        use super::input;
        use crate::server::data::maintenance_request::MaintenanceRequestRepository;

        /// Expect one row affected when deleting an own ticket
        #[tokio::test]
        async fn deletes_ticket() -> Result<(), TestError> {
            let mut test = test_setup_with_user_tables!()?;
            let user = test.user().insert_user(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;

            let repository = MaintenanceRequestRepository::new(&test.db);
            let request = repository.create(user.id, &input("Lâmpada")).await?;

            let result = repository.delete(user.id, request.id).await?;
            assert_eq!(result.rows_affected, 1);
            assert!(repository.get_for_user(user.id, request.id).await?.is_none());

            Ok(())
        }
    }
}
