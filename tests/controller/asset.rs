use mirtilo::model::asset::AssetInput;
use mirtilo_test_utils::prelude::*;
use serde_json::json;

fn asset_input(name: &str) -> Result<AssetInput, TestError> {
    Ok(serde_json::from_value(json!({
        "name": name,
        "category": "Equipamentos",
        "location": "Casa de máquinas",
        "acquisition_value": 12000.0,
    }))?)
}

mod create_asset {
    use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
    use mirtilo::{
        model::asset::{AssetCondition, AssetDto},
        server::controller::asset::{create_asset, get_assets},
    };
    use mirtilo_test_utils::prelude::*;

    use super::asset_input;
    use crate::util::{body_json, TestContextExt};

    /// Expect 201 with the created asset, which then shows up in the user's list
    #[tokio::test]
    async fn creates_and_lists_asset() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        test.sign_in(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;
        let state = test.to_app_state();

        let response = create_asset(
            State(state.clone()),
            test.session.clone(),
            Json(asset_input("Bomba d'água")?),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::CREATED);
        let created: AssetDto = body_json(response).await;
        assert_eq!(created.name, "Bomba d'água");
        assert_eq!(created.condition, AssetCondition::Good);

        let response = get_assets(State(state), test.session.clone())
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let assets: Vec<AssetDto> = body_json(response).await;
        assert_eq!(assets.len(), 1);
        assert_eq!(assets[0].id, created.id);

        Ok(())
    }

    /// Expect 400 when the name is blank
    #[tokio::test]
    async fn rejects_blank_name() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        test.sign_in(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;

        let response = create_asset(
            State(test.to_app_state()),
            test.session.clone(),
            Json(asset_input("   ")?),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    /// Expect 401 for an anonymous session
    #[tokio::test]
    async fn rejects_anonymous_session() -> Result<(), TestError> {
        let test = test_setup_with_user_tables!()?;

        let response = create_asset(
            State(test.to_app_state()),
            test.session.clone(),
            Json(asset_input("Portão")?),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }
}

mod get_assets {
    use axum::{extract::State, http::StatusCode, response::IntoResponse};
    use mirtilo::{model::asset::AssetDto, server::controller::asset::get_assets};
    use mirtilo_test_utils::prelude::*;

    use crate::util::{body_json, TestContextExt};

    /// Expect only the signed-in user's assets
    #[tokio::test]
    async fn scopes_list_to_user() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let other = test.user().insert_user("other-subject", "other@example.com").await?;
        test.condo().insert_asset(other.id, "Gerador").await?;
        let user_id = test.sign_in(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;
        test.condo().insert_asset(user_id, "Elevador social").await?;

        let response = get_assets(State(test.to_app_state()), test.session.clone())
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let assets: Vec<AssetDto> = body_json(response).await;
        assert_eq!(assets.len(), 1);
        assert_eq!(assets[0].name, "Elevador social");

        Ok(())
    }
}

mod update_asset {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
        Json,
    };
    use mirtilo::{model::asset::AssetDto, server::controller::asset::update_asset};
    use mirtilo_test_utils::prelude::*;

    use super::asset_input;
    use crate::util::{body_json, TestContextExt};

    /// Expect 200 with the replaced fields
    #[tokio::test]
    async fn updates_own_asset() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let user_id = test.sign_in(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;
        let asset = test.condo().insert_asset(user_id, "Portão").await?;

        let response = update_asset(
            State(test.to_app_state()),
            test.session.clone(),
            Path(asset.id),
            Json(asset_input("Portão da garagem")?),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let updated: AssetDto = body_json(response).await;
        assert_eq!(updated.id, asset.id);
        assert_eq!(updated.name, "Portão da garagem");
        assert_eq!(updated.location.as_deref(), Some("Casa de máquinas"));

        Ok(())
    }

    /// Expect 404 when the asset belongs to another user
    #[tokio::test]
    async fn hides_other_users_asset() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let other = test.user().insert_user("other-subject", "other@example.com").await?;
        let asset = test.condo().insert_asset(other.id, "Gerador").await?;
        test.sign_in(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;

        let response = update_asset(
            State(test.to_app_state()),
            test.session.clone(),
            Path(asset.id),
            Json(asset_input("Gerador novo")?),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod delete_asset {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use mirtilo::server::controller::asset::delete_asset;
    use mirtilo_test_utils::prelude::*;

    use crate::util::TestContextExt;

    /// Expect 204, then 404 for the same ID
    #[tokio::test]
    async fn deletes_once() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let user_id = test.sign_in(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;
        let asset = test.condo().insert_asset(user_id, "Portão").await?;
        let state = test.to_app_state();

        let response = delete_asset(State(state.clone()), test.session.clone(), Path(asset.id))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = delete_asset(State(state), test.session.clone(), Path(asset.id))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}
