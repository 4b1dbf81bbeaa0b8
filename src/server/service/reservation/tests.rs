use chrono::{NaiveDate, NaiveDateTime};

use crate::model::{
    location::LocationKind,
    reservation::{PaymentStatus, ReservationInput, ReservationStatus},
};

fn at(hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 12, 20)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn input(common_area_id: i32, start: u32, end: u32) -> ReservationInput {
    ReservationInput {
        common_area_id,
        start_at: at(start),
        end_at: at(end),
        status: ReservationStatus::Pending,
        payment_status: PaymentStatus::Pending,
        purpose: Some("Confraternização".to_string()),
        expected_guests: Some(12),
        location_kind: LocationKind::Apartment,
        unit_number: Some("202".to_string()),
        location_detail: None,
        responsible_name: Some("Ana".to_string()),
        responsible_unit: Some("202".to_string()),
        needs_cleaning: true,
        needs_furniture: false,
        furniture_details: None,
        agrees_to_rules: true,
        special_requests: None,
        notes: None,
    }
}

mod create_reservation {
    use mirtilo_test_utils::prelude::*;

    use super::{at, input};
    use crate::{
        model::{location::LocationKind, reservation::ReservationStatus, validation::ValidationError},
        server::{
            error::{resource::ResourceError, Error},
            service::reservation::ReservationService,
        },
    };

    /// Expect a 3-hour booking at 50/h to cost 150
    #[tokio::test]
    async fn stamps_total_cost() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let user = test.user().insert_user(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;
        let area = test.condo().insert_common_area(user.id, "Salão").await?;

        let service = ReservationService::new(&test.db);
        let reservation = service
            .create_reservation(user.id, &input(area.id, 18, 21))
            .await
            .unwrap();

        assert_eq!(reservation.total_cost, Some(150.0));
        assert_eq!(reservation.status, ReservationStatus::Pending);

        Ok(())
    }

    /// Expect an apartment booking without unit number to be rejected
    #[tokio::test]
    async fn rejects_apartment_without_unit() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let user = test.user().insert_user(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;
        let area = test.condo().insert_common_area(user.id, "Salão").await?;

        let mut booking = input(area.id, 18, 21);
        booking.unit_number = Some("  ".to_string());

        let service = ReservationService::new(&test.db);
        let result = service.create_reservation(user.id, &booking).await;

        assert!(matches!(
            result,
            Err(Error::ValidationError(ValidationError::MissingUnitNumber))
        ));

        Ok(())
    }

    /// Expect common-area and other bookings without detail to be rejected
    #[tokio::test]
    async fn rejects_missing_location_detail() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let user = test.user().insert_user(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;
        let area = test.condo().insert_common_area(user.id, "Salão").await?;

        let service = ReservationService::new(&test.db);

        for kind in [LocationKind::CommonArea, LocationKind::Other] {
            let mut booking = input(area.id, 18, 21);
            booking.location_kind = kind;

            let result = service.create_reservation(user.id, &booking).await;

            assert!(matches!(
                result,
                Err(Error::ValidationError(ValidationError::MissingLocationDetail))
            ));
        }

        Ok(())
    }

    /// Expect an overlapping booking of another user to conflict
    #[tokio::test]
    async fn rejects_overlap() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let user = test.user().insert_user(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;
        let other = test.user().insert_user("other", "other@example.com").await?;
        let area = test.condo().insert_common_area(user.id, "Salão").await?;
        test.condo()
            .insert_reservation(other.id, area.id, at(17), at(20), "confirmed")
            .await?;

        let service = ReservationService::new(&test.db);
        let result = service
            .create_reservation(user.id, &input(area.id, 19, 22))
            .await;

        assert!(matches!(
            result,
            Err(Error::ResourceError(ResourceError::ReservationConflict { .. }))
        ));
        assert!(service.get_reservations(user.id).await.unwrap().is_empty());

        Ok(())
    }

    /// Expect back-to-back and cancelled bookings not to conflict
    #[tokio::test]
    async fn allows_back_to_back_and_cancelled() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let user = test.user().insert_user(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;
        let area = test.condo().insert_common_area(user.id, "Salão").await?;
        test.condo()
            .insert_reservation(user.id, area.id, at(14), at(17), "confirmed")
            .await?;
        test.condo()
            .insert_reservation(user.id, area.id, at(17), at(20), "cancelled")
            .await?;

        let service = ReservationService::new(&test.db);
        let result = service
            .create_reservation(user.id, &input(area.id, 17, 20))
            .await;

        assert!(result.is_ok());

        Ok(())
    }

    /// Expect a cancelled booking to be stored over an occupied slot
    #[tokio::test]
    async fn cancelled_booking_never_conflicts() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let user = test.user().insert_user(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;
        let area = test.condo().insert_common_area(user.id, "Salão").await?;
        test.condo()
            .insert_reservation(user.id, area.id, at(14), at(17), "confirmed")
            .await?;

        let mut booking = input(area.id, 15, 16);
        booking.status = ReservationStatus::Cancelled;

        let service = ReservationService::new(&test.db);

        assert!(service.create_reservation(user.id, &booking).await.is_ok());

        Ok(())
    }

    /// Expect NotFound for an unknown area
    #[tokio::test]
    async fn rejects_unknown_area() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let user = test.user().insert_user(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;

        let service = ReservationService::new(&test.db);
        let result = service.create_reservation(user.id, &input(99, 18, 21)).await;

        assert!(matches!(
            result,
            Err(Error::ResourceError(ResourceError::NotFound { id: 99, .. }))
        ));

        Ok(())
    }

    /// Expect bookings longer than the area allows or over capacity to be rejected
    #[tokio::test]
    async fn enforces_area_limits() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let user = test.user().insert_user(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;
        let area = test.condo().insert_common_area(user.id, "Salão").await?;

        let service = ReservationService::new(&test.db);

        let result = service
            .create_reservation(user.id, &input(area.id, 8, 20))
            .await;
        assert!(matches!(
            result,
            Err(Error::ValidationError(ValidationError::DurationExceeded { .. }))
        ));

        let mut crowded = input(area.id, 18, 21);
        crowded.expected_guests = Some(21);
        let result = service.create_reservation(user.id, &crowded).await;
        assert!(matches!(
            result,
            Err(Error::ValidationError(ValidationError::CapacityExceeded {
                guests: 21,
                capacity: 20
            }))
        ));

        Ok(())
    }
}

mod get_reservations {
    use mirtilo_test_utils::prelude::*;

    use super::at;
    use crate::server::service::reservation::ReservationService;

    /// Expect each reservation to carry the name of its area
    #[tokio::test]
    async fn joins_area_name() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let user = test.user().insert_user(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;
        let area = test.condo().insert_common_area(user.id, "Salão").await?;
        test.condo()
            .insert_reservation(user.id, area.id, at(10), at(12), "pending")
            .await?;

        let service = ReservationService::new(&test.db);
        let reservations = service.get_reservations(user.id).await.unwrap();

        assert_eq!(reservations.len(), 1);
        assert_eq!(reservations[0].common_area_name.as_deref(), Some("Salão"));

        Ok(())
    }
}

mod update_reservation {
    use mirtilo_test_utils::prelude::*;
    use sea_orm::{ActiveModelTrait, ActiveValue, IntoActiveModel};

    use super::{at, input};
    use crate::{
        model::{reservation::ReservationStatus, validation::ValidationError},
        server::{
            error::{resource::ResourceError, Error},
            service::reservation::ReservationService,
        },
    };

    /// Expect a booking to stay cancellable after its area is deactivated
    #[tokio::test]
    async fn cancels_after_area_deactivated() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let user = test.user().insert_user(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;
        let area = test.condo().insert_common_area(user.id, "Salão").await?;

        let service = ReservationService::new(&test.db);
        let reservation = service
            .create_reservation(user.id, &input(area.id, 18, 20))
            .await
            .unwrap();

        let mut area_am = area.into_active_model();
        area_am.is_active = ActiveValue::Set(false);
        area_am.update(&test.db).await?;

        let mut cancel = input(reservation.common_area_id, 18, 20);
        cancel.status = ReservationStatus::Cancelled;
        let updated = service
            .update_reservation(user.id, reservation.id, &cancel)
            .await
            .unwrap();

        assert_eq!(updated.status, ReservationStatus::Cancelled);

        Ok(())
    }

    /// Expect unchanged bookings to stay editable after the area's limits shrink, and moved
    /// ones to meet the new limits
    #[tokio::test]
    async fn checks_limits_only_when_booking_changes() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let user = test.user().insert_user(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;
        let area = test.condo().insert_common_area(user.id, "Salão").await?;
        let area_id = area.id;

        let service = ReservationService::new(&test.db);
        let reservation = service
            .create_reservation(user.id, &input(area_id, 18, 20))
            .await
            .unwrap();

        let mut area_am = area.into_active_model();
        area_am.capacity = ActiveValue::Set(Some(5));
        area_am.update(&test.db).await?;

        let mut confirm = input(area_id, 18, 20);
        confirm.status = ReservationStatus::Confirmed;
        confirm.purpose = Some("Aniversário".to_string());
        let updated = service
            .update_reservation(user.id, reservation.id, &confirm)
            .await
            .unwrap();
        assert_eq!(updated.status, ReservationStatus::Confirmed);

        let moved = service
            .update_reservation(user.id, reservation.id, &input(area_id, 19, 21))
            .await;
        assert!(matches!(
            moved,
            Err(Error::ValidationError(ValidationError::CapacityExceeded { .. }))
        ));

        Ok(())
    }

    /// Expect extending an own booking not to conflict with itself
    #[tokio::test]
    async fn extends_own_booking() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let user = test.user().insert_user(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;
        let area = test.condo().insert_common_area(user.id, "Salão").await?;

        let service = ReservationService::new(&test.db);
        let reservation = service
            .create_reservation(user.id, &input(area.id, 18, 20))
            .await
            .unwrap();

        let updated = service
            .update_reservation(user.id, reservation.id, &input(area.id, 18, 22))
            .await
            .unwrap();

        assert_eq!(updated.end_at, at(22));
        assert_eq!(updated.total_cost, Some(200.0));

        Ok(())
    }

    /// Expect moving onto another booking to conflict
    #[tokio::test]
    async fn rejects_move_onto_other_booking() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let user = test.user().insert_user(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;
        let area = test.condo().insert_common_area(user.id, "Salão").await?;
        test.condo()
            .insert_reservation(user.id, area.id, at(10), at(12), "pending")
            .await?;

        let service = ReservationService::new(&test.db);
        let reservation = service
            .create_reservation(user.id, &input(area.id, 18, 20))
            .await
            .unwrap();

        let result = service
            .update_reservation(user.id, reservation.id, &input(area.id, 11, 13))
            .await;

        assert!(matches!(
            result,
            Err(Error::ResourceError(ResourceError::ReservationConflict { .. }))
        ));

        Ok(())
    }

    /// Expect NotFound when updating another user's reservation
    #[tokio::test]
    async fn fails_for_other_user() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let user = test.user().insert_user(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;
        let other = test.user().insert_user("other", "other@example.com").await?;
        let area = test.condo().insert_common_area(user.id, "Salão").await?;
        let reservation = test
            .condo()
            .insert_reservation(other.id, area.id, at(10), at(12), "pending")
            .await?;

        let service = ReservationService::new(&test.db);
        let result = service
            .update_reservation(user.id, reservation.id, &input(area.id, 10, 12))
            .await;

        assert!(matches!(
            result,
            Err(Error::ResourceError(ResourceError::NotFound { .. }))
        ));

        Ok(())
    }
}

mod delete_reservation {
    use mirtilo_test_utils::prelude::*;

    use super::at;
    use crate::server::{
        error::{resource::ResourceError, Error},
        service::reservation::ReservationService,
    };

    /// Expect the slot to be free again after deletion
    #[tokio::test]
    async fn frees_slot() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let user = test.user().insert_user(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;
        let area = test.condo().insert_common_area(user.id, "Salão").await?;
        let reservation = test
            .condo()
            .insert_reservation(user.id, area.id, at(10), at(12), "pending")
            .await?;

        let service = ReservationService::new(&test.db);

        assert!(service.delete_reservation(user.id, reservation.id).await.is_ok());
        assert!(matches!(
            service.delete_reservation(user.id, reservation.id).await,
            Err(Error::ResourceError(ResourceError::NotFound { .. }))
        ));

        Ok(())
    }
}
