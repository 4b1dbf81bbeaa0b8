use mirtilo::model::common_area::CommonAreaInput;
use mirtilo_test_utils::prelude::*;
use serde_json::json;

fn area_input(name: &str) -> Result<CommonAreaInput, TestError> {
    Ok(serde_json::from_value(json!({
        "name": name,
        "capacity": 12,
        "hourly_rate": 30.0,
        "max_booking_duration_hours": 4,
    }))?)
}

mod get_common_areas {
    use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
    use mirtilo::{
        model::common_area::CommonAreaDto,
        server::controller::common_area::{create_common_area, get_common_areas},
    };
    use mirtilo_test_utils::prelude::*;
    use sea_orm::{ActiveModelTrait, ActiveValue, IntoActiveModel};

    use super::area_input;
    use crate::util::{body_json, TestContextExt};

    /// Expect areas registered by any user to be listed
    #[tokio::test]
    async fn lists_areas_of_every_user() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let other = test.user().insert_user("other-subject", "other@example.com").await?;
        test.condo().insert_common_area(other.id, "Piscina").await?;
        test.sign_in(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;

        let response = get_common_areas(State(test.to_app_state()), test.session.clone())
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let areas: Vec<CommonAreaDto> = body_json(response).await;
        assert_eq!(areas.len(), 1);
        assert_eq!(areas[0].name, "Piscina");

        Ok(())
    }

    /// Expect an owner to keep seeing an area they deactivated, marked inactive
    #[tokio::test]
    async fn owner_sees_own_inactive_area() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        test.sign_in(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;
        let state = test.to_app_state();

        let mut input = area_input("Sauna")?;
        input.is_active = false;
        let response = create_common_area(State(state.clone()), test.session.clone(), Json(input))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = get_common_areas(State(state), test.session.clone())
            .await
            .into_response();

        let areas: Vec<CommonAreaDto> = body_json(response).await;
        assert_eq!(areas.len(), 1);
        assert!(!areas[0].is_active);

        Ok(())
    }

    /// Expect another user's inactive area to stay hidden
    #[tokio::test]
    async fn hides_other_users_inactive_area() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let other = test.user().insert_user("other-subject", "other@example.com").await?;
        let area = test.condo().insert_common_area(other.id, "Sauna").await?;
        let mut area_am = area.into_active_model();
        area_am.is_active = ActiveValue::Set(false);
        area_am.update(&test.db).await?;
        test.sign_in(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;

        let response = get_common_areas(State(test.to_app_state()), test.session.clone())
            .await
            .into_response();

        let areas: Vec<CommonAreaDto> = body_json(response).await;
        assert!(areas.is_empty());

        Ok(())
    }

    /// Expect 401 for an anonymous session
    #[tokio::test]
    async fn rejects_anonymous_session() -> Result<(), TestError> {
        let test = test_setup_with_user_tables!()?;

        let response = get_common_areas(State(test.to_app_state()), test.session.clone())
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }
}

mod create_common_area {
    use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
    use mirtilo::{model::common_area::CommonAreaDto, server::controller::common_area::create_common_area};
    use mirtilo_test_utils::prelude::*;

    use super::area_input;
    use crate::util::{body_json, TestContextExt};

    /// Expect 201 with an active area
    #[tokio::test]
    async fn creates_active_area() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        test.sign_in(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;

        let response = create_common_area(
            State(test.to_app_state()),
            test.session.clone(),
            Json(area_input("Churrasqueira")?),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::CREATED);
        let area: CommonAreaDto = body_json(response).await;
        assert_eq!(area.name, "Churrasqueira");
        assert!(area.is_active);

        Ok(())
    }
}

mod update_common_area {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
        Json,
    };
    use mirtilo::server::controller::common_area::update_common_area;
    use mirtilo_test_utils::prelude::*;

    use super::area_input;
    use crate::util::TestContextExt;

    /// Expect 200 for the user who registered the area
    #[tokio::test]
    async fn owner_updates_area() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let user_id = test.sign_in(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;
        let area = test.condo().insert_common_area(user_id, "Piscina").await?;

        let response = update_common_area(
            State(test.to_app_state()),
            test.session.clone(),
            Path(area.id),
            Json(area_input("Piscina adulto")?),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);

        Ok(())
    }

    /// Expect 404 for a user who did not register the area
    #[tokio::test]
    async fn non_owner_cannot_update() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let other = test.user().insert_user("other-subject", "other@example.com").await?;
        let area = test.condo().insert_common_area(other.id, "Piscina").await?;
        test.sign_in(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;

        let response = update_common_area(
            State(test.to_app_state()),
            test.session.clone(),
            Path(area.id),
            Json(area_input("Piscina adulto")?),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}
