use sea_orm::DatabaseConnection;

use crate::{
    model::maintenance::{MaintenanceRequestDto, MaintenanceRequestInput},
    server::{
        data::maintenance_request::MaintenanceRequestRepository,
        error::{resource::ResourceError, Error},
        util::parse::{parse_stored, parse_stored_opt},
    },
};

const RESOURCE: &str = "Maintenance request";

impl TryFrom<entity::maintenance_request::Model> for MaintenanceRequestDto {
    type Error = Error;

    fn try_from(request: entity::maintenance_request::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: request.id,
            priority: parse_stored(&request.priority)?,
            status: parse_stored(&request.status)?,
            location_kind: parse_stored_opt(request.location_kind.as_deref())?,
            asset_id: request.asset_id,
            title: request.title,
            description: request.description,
            category: request.category,
            location: request.location,
            requested_date: request.requested_date,
            scheduled_date: request.scheduled_date,
            completed_date: request.completed_date,
            estimated_cost: request.estimated_cost,
            actual_cost: request.actual_cost,
            assigned_to: request.assigned_to,
            requester_name: request.requester_name,
            requester_unit: request.requester_unit,
            notes: request.notes,
            created_at: request.created_at,
            updated_at: request.updated_at,
        })
    }
}

/// Maintenance tickets. The optional asset reference is a soft link that is never checked.
pub struct MaintenanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MaintenanceService<'a> {
    /// Creates a new instance of [`MaintenanceService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_requests(&self, user_id: i32) -> Result<Vec<MaintenanceRequestDto>, Error> {
        MaintenanceRequestRepository::new(self.db)
            .get_all_by_user(user_id)
            .await?
            .into_iter()
            .map(MaintenanceRequestDto::try_from)
            .collect()
    }

    pub async fn create_request(
        &self,
        user_id: i32,
        input: &MaintenanceRequestInput,
    ) -> Result<MaintenanceRequestDto, Error> {
        input.validate()?;

        MaintenanceRequestRepository::new(self.db)
            .create(user_id, input)
            .await?
            .try_into()
    }

    pub async fn update_request(
        &self,
        user_id: i32,
        request_id: i32,
        input: &MaintenanceRequestInput,
    ) -> Result<MaintenanceRequestDto, Error> {
        input.validate()?;

        MaintenanceRequestRepository::new(self.db)
            .update(user_id, request_id, input)
            .await?
            .ok_or(ResourceError::NotFound {
                resource: RESOURCE,
                id: request_id,
            })?
            .try_into()
    }

    pub async fn delete_request(&self, user_id: i32, request_id: i32) -> Result<(), Error> {
        let result = MaintenanceRequestRepository::new(self.db)
            .delete(user_id, request_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(ResourceError::NotFound {
                resource: RESOURCE,
                id: request_id,
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::model::{location::LocationKind, maintenance::MaintenanceRequestInput};

    fn input(kind: LocationKind) -> MaintenanceRequestInput {
        MaintenanceRequestInput {
            title: "Interfone mudo".to_string(),
            description: "Interfone não toca".to_string(),
            category: "Manutenção Predial".to_string(),
            location_kind: Some(kind),
            requested_date: NaiveDate::from_ymd_opt(2025, 8, 20).unwrap(),
            ..Default::default()
        }
    }

    mod create_request {
        use mirtilo_test_utils::prelude::*;

        use super::input;
        use crate::{
            model::{location::LocationKind, validation::ValidationError},
            server::{error::Error, service::maintenance::MaintenanceService},
        };

        /// Expect an apartment ticket without unit number to be rejected
        #[tokio::test]
        async fn rejects_apartment_without_unit() -> Result<(), TestError> {
            let mut test = test_setup_with_user_tables!()?;
            let user = test.user().insert_user(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;

            let service = MaintenanceService::new(&test.db);
            let result = service
                .create_request(user.id, &input(LocationKind::Apartment))
                .await;

            assert!(matches!(
                result,
                Err(Error::ValidationError(ValidationError::MissingUnitNumber))
            ));

            Ok(())
        }

        /// Expect a garage ticket to need no qualifier and round-trip its kind
        #[tokio::test]
        async fn accepts_garage_without_qualifier() -> Result<(), TestError> {
            let mut test = test_setup_with_user_tables!()?;
            let user = test.user().insert_user(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;

            let service = MaintenanceService::new(&test.db);
            let request = service
                .create_request(user.id, &input(LocationKind::Garage))
                .await
                .unwrap();

            assert_eq!(request.location_kind, Some(LocationKind::Garage));
            assert!(request.location.is_none());

            Ok(())
        }

        /// Expect a ticket pointing at a missing asset to be accepted
        #[tokio::test]
        async fn accepts_dangling_asset_reference() -> Result<(), TestError> {
            let mut test = test_setup_with_user_tables!()?;
            let user = test.user().insert_user(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;

            let mut ticket = input(LocationKind::Elevator);
            ticket.asset_id = Some(999);

            let service = MaintenanceService::new(&test.db);
            let request = service.create_request(user.id, &ticket).await.unwrap();

            assert_eq!(request.asset_id, Some(999));

            Ok(())
        }
    }

    mod delete_request {
        use mirtilo_test_utils::prelude::*;

        use super::input;
        use crate::{
            model::location::LocationKind,
            server::{
                error::{resource::ResourceError, Error},
                service::maintenance::MaintenanceService,
            },
        };

        /// Expect NotFound when another user deletes the ticket
        #[tokio::test]
        async fn fails_for_other_user() -> Result<(), TestError> {
            let mut test = test_setup_with_user_tables!()?;
            let user = test.user().insert_user(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;
            let other = test.user().insert_user("other", "other@example.com").await?;

            let service = MaintenanceService::new(&test.db);
            let request = service
                .create_request(user.id, &input(LocationKind::Entrance))
                .await
                .unwrap();

            let result = service.delete_request(other.id, request.id).await;

            assert!(matches!(
                result,
                Err(Error::ResourceError(ResourceError::NotFound { .. }))
            ));
            assert_eq!(service.get_requests(user.id).await.unwrap().len(), 1);

            Ok(())
        }
    }
}
