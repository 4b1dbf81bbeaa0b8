use chrono::{NaiveDate, NaiveDateTime};
use mirtilo::model::reservation::ReservationInput;
use mirtilo_test_utils::prelude::*;
use serde_json::json;

fn at(hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2030, 3, 9)
        .and_then(|date| date.and_hms_opt(hour, 0, 0))
        .expect("valid test datetime")
}

fn booking(area_id: i32, start: u32, end: u32) -> Result<ReservationInput, TestError> {
    Ok(serde_json::from_value(json!({
        "common_area_id": area_id,
        "start_at": at(start),
        "end_at": at(end),
        "location_kind": "apartment",
        "unit_number": "302",
        "expected_guests": 15,
        "agrees_to_rules": true,
    }))?)
}

mod create_reservation {
    use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
    use mirtilo::{
        model::reservation::{ReservationDto, ReservationStatus},
        server::controller::reservation::create_reservation,
    };
    use mirtilo_test_utils::prelude::*;

    use super::{at, booking};
    use crate::util::{body_json, TestContextExt};

    /// Expect 201 with the total cost computed from the area's hourly rate
    #[tokio::test]
    async fn books_area_with_computed_cost() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let user_id = test.sign_in(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;
        let area = test.condo().insert_common_area(user_id, "Salão de Festas").await?;

        let response = create_reservation(
            State(test.to_app_state()),
            test.session.clone(),
            Json(booking(area.id, 10, 12)?),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::CREATED);
        let reservation: ReservationDto = body_json(response).await;
        assert_eq!(reservation.common_area_id, area.id);
        assert_eq!(reservation.status, ReservationStatus::Pending);
        assert_eq!(reservation.total_cost, Some(100.0));

        Ok(())
    }

    /// Expect 409 when the interval intersects another booking of the same area
    #[tokio::test]
    async fn rejects_overlapping_booking() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let other = test.user().insert_user("other-subject", "other@example.com").await?;
        let area = test.condo().insert_common_area(other.id, "Salão de Festas").await?;
        test.condo()
            .insert_reservation(other.id, area.id, at(10), at(12), "confirmed")
            .await?;
        test.sign_in(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;

        let response = create_reservation(
            State(test.to_app_state()),
            test.session.clone(),
            Json(booking(area.id, 11, 13)?),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::CONFLICT);

        Ok(())
    }

    /// Expect 201 for a booking starting exactly when the previous one ends
    #[tokio::test]
    async fn allows_back_to_back_booking() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let user_id = test.sign_in(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;
        let area = test.condo().insert_common_area(user_id, "Churrasqueira").await?;
        test.condo()
            .insert_reservation(user_id, area.id, at(10), at(12), "confirmed")
            .await?;

        let response = create_reservation(
            State(test.to_app_state()),
            test.session.clone(),
            Json(booking(area.id, 12, 14)?),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::CREATED);

        Ok(())
    }

    /// Expect cancelled bookings to free their interval
    #[tokio::test]
    async fn ignores_cancelled_booking() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let user_id = test.sign_in(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;
        let area = test.condo().insert_common_area(user_id, "Churrasqueira").await?;
        test.condo()
            .insert_reservation(user_id, area.id, at(10), at(12), "cancelled")
            .await?;

        let response = create_reservation(
            State(test.to_app_state()),
            test.session.clone(),
            Json(booking(area.id, 10, 12)?),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::CREATED);

        Ok(())
    }

    /// Expect 400 for an apartment location without a unit number
    #[tokio::test]
    async fn rejects_apartment_without_unit() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let user_id = test.sign_in(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;
        let area = test.condo().insert_common_area(user_id, "Salão de Festas").await?;

        let mut input = booking(area.id, 10, 12)?;
        input.unit_number = None;

        let response = create_reservation(State(test.to_app_state()), test.session.clone(), Json(input))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    /// Expect 400 when the booking is longer than the area allows
    #[tokio::test]
    async fn rejects_booking_over_max_duration() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let user_id = test.sign_in(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;
        let area = test.condo().insert_common_area(user_id, "Salão de Festas").await?;

        let response = create_reservation(
            State(test.to_app_state()),
            test.session.clone(),
            Json(booking(area.id, 8, 20)?),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    /// Expect 404 when the area does not exist
    #[tokio::test]
    async fn rejects_unknown_area() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        test.sign_in(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;

        let response = create_reservation(
            State(test.to_app_state()),
            test.session.clone(),
            Json(booking(99, 10, 12)?),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod update_reservation {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
        Json,
    };
    use mirtilo::{model::reservation::ReservationDto, server::controller::reservation::update_reservation};
    use mirtilo_test_utils::prelude::*;

    use super::{at, booking};
    use crate::util::{body_json, TestContextExt};

    /// Expect a reservation to be movable within its own interval
    #[tokio::test]
    async fn does_not_conflict_with_itself() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let user_id = test.sign_in(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;
        let area = test.condo().insert_common_area(user_id, "Salão de Festas").await?;
        let reservation = test
            .condo()
            .insert_reservation(user_id, area.id, at(10), at(12), "pending")
            .await?;

        let response = update_reservation(
            State(test.to_app_state()),
            test.session.clone(),
            Path(reservation.id),
            Json(booking(area.id, 11, 14)?),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let updated: ReservationDto = body_json(response).await;
        assert_eq!(updated.end_at, at(14));
        assert_eq!(updated.total_cost, Some(150.0));

        Ok(())
    }
}

mod delete_reservation {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use mirtilo::server::controller::reservation::delete_reservation;
    use mirtilo_test_utils::prelude::*;

    use super::at;
    use crate::util::TestContextExt;

    /// Expect 404 when deleting another user's reservation
    #[tokio::test]
    async fn hides_other_users_reservation() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let other = test.user().insert_user("other-subject", "other@example.com").await?;
        let area = test.condo().insert_common_area(other.id, "Salão de Festas").await?;
        let reservation = test
            .condo()
            .insert_reservation(other.id, area.id, at(10), at(12), "confirmed")
            .await?;
        test.sign_in(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;

        let response = delete_reservation(
            State(test.to_app_state()),
            test.session.clone(),
            Path(reservation.id),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}
