//! HTTP routing and OpenAPI documentation.
//!
//! Every endpoint is registered through `utoipa_axum` so the OpenAPI document at
//! `/api/docs/openapi.json` is generated from the handlers themselves. Swagger UI is served
//! at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the API router with Swagger UI
///
/// ```ignore
/// let router = routes().with_state(AppState { db, auth }).layer(session);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Mirtilo", description = "Mirtilo condominium management API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Sign in and session"),
        (name = controller::asset::ASSET_TAG, description = "Asset registry"),
        (name = controller::maintenance::MAINTENANCE_TAG, description = "Maintenance tickets"),
        (name = controller::preventive::PREVENTIVE_TAG, description = "Preventive maintenance schedule"),
        (name = controller::supplier::SUPPLIER_TAG, description = "Supplier registry"),
        (name = controller::common_area::COMMON_AREA_TAG, description = "Bookable common areas"),
        (name = controller::reservation::RESERVATION_TAG, description = "Common area reservations"),
        (name = controller::financial::FINANCIAL_TAG, description = "Income and expenses"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(
            controller::asset::get_assets,
            controller::asset::create_asset
        ))
        .routes(routes!(
            controller::asset::update_asset,
            controller::asset::delete_asset
        ))
        .routes(routes!(
            controller::maintenance::get_requests,
            controller::maintenance::create_request
        ))
        .routes(routes!(
            controller::maintenance::update_request,
            controller::maintenance::delete_request
        ))
        .routes(routes!(
            controller::preventive::get_schedule,
            controller::preventive::create_entry
        ))
        .routes(routes!(
            controller::preventive::update_entry,
            controller::preventive::delete_entry
        ))
        .routes(routes!(
            controller::supplier::get_suppliers,
            controller::supplier::create_supplier
        ))
        .routes(routes!(
            controller::supplier::update_supplier,
            controller::supplier::delete_supplier
        ))
        .routes(routes!(
            controller::common_area::get_common_areas,
            controller::common_area::create_common_area
        ))
        .routes(routes!(controller::common_area::update_common_area))
        .routes(routes!(
            controller::reservation::get_reservations,
            controller::reservation::create_reservation
        ))
        .routes(routes!(
            controller::reservation::update_reservation,
            controller::reservation::delete_reservation
        ))
        .routes(routes!(
            controller::financial::get_transactions,
            controller::financial::create_transaction
        ))
        .routes(routes!(
            controller::financial::update_transaction,
            controller::financial::delete_transaction
        ))
        .routes(routes!(controller::financial::get_summary))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
