//! Binding between each management screen and its API endpoint.

use chrono::{Duration, Local, NaiveDateTime, NaiveTime};
use serde::{de::DeserializeOwned, Serialize};

use crate::model::{
    asset::{AssetDto, AssetInput, ASSET_MESSAGES},
    common_area::{CommonAreaDto, CommonAreaInput, COMMON_AREA_MESSAGES},
    financial::{FinancialTransactionDto, FinancialTransactionInput, TRANSACTION_MESSAGES},
    location::LocationKind,
    maintenance::{MaintenanceRequestDto, MaintenanceRequestInput, MAINTENANCE_MESSAGES},
    preventive::{PreventiveMaintenanceDto, PreventiveMaintenanceInput, PREVENTIVE_MESSAGES},
    record_list::{Messages, Record},
    reservation::{ReservationDto, ReservationInput, RESERVATION_MESSAGES},
    supplier::{SupplierDto, SupplierInput, SUPPLIER_MESSAGES},
    validation::ValidationError,
};

/// A table exposed as `GET/POST {PATH}` and `PUT/DELETE {PATH}/{id}`
pub trait Resource: 'static {
    type Dto: Record + Clone + PartialEq + DeserializeOwned + 'static;
    type Input: Serialize + Clone + PartialEq + 'static;

    const PATH: &'static str;
    const MESSAGES: Messages;

    /// Empty form contents
    fn blank() -> Self::Input;

    /// Form contents when editing an existing row
    fn to_input(dto: &Self::Dto) -> Self::Input;

    fn validate(input: &Self::Input) -> Result<(), ValidationError>;

    fn item_path(id: i32) -> String {
        format!("{}/{}", Self::PATH, id)
    }
}

fn today() -> chrono::NaiveDate {
    Local::now().date_naive()
}

pub struct Assets;

impl Resource for Assets {
    type Dto = AssetDto;
    type Input = AssetInput;

    const PATH: &'static str = "/api/assets";
    const MESSAGES: Messages = ASSET_MESSAGES;

    fn blank() -> AssetInput {
        AssetInput::default()
    }

    fn to_input(dto: &AssetDto) -> AssetInput {
        dto.into()
    }

    fn validate(input: &AssetInput) -> Result<(), ValidationError> {
        input.validate()
    }
}

pub struct MaintenanceRequests;

impl Resource for MaintenanceRequests {
    type Dto = MaintenanceRequestDto;
    type Input = MaintenanceRequestInput;

    const PATH: &'static str = "/api/maintenance-requests";
    const MESSAGES: Messages = MAINTENANCE_MESSAGES;

    fn blank() -> MaintenanceRequestInput {
        MaintenanceRequestInput {
            requested_date: today(),
            location_kind: Some(LocationKind::Apartment),
            ..Default::default()
        }
    }

    fn to_input(dto: &MaintenanceRequestDto) -> MaintenanceRequestInput {
        dto.into()
    }

    fn validate(input: &MaintenanceRequestInput) -> Result<(), ValidationError> {
        input.validate()
    }
}

pub struct PreventiveSchedule;

impl Resource for PreventiveSchedule {
    type Dto = PreventiveMaintenanceDto;
    type Input = PreventiveMaintenanceInput;

    const PATH: &'static str = "/api/preventive-maintenance";
    const MESSAGES: Messages = PREVENTIVE_MESSAGES;

    fn blank() -> PreventiveMaintenanceInput {
        PreventiveMaintenanceInput {
            next_due_date: today(),
            ..Default::default()
        }
    }

    fn to_input(dto: &PreventiveMaintenanceDto) -> PreventiveMaintenanceInput {
        dto.into()
    }

    fn validate(input: &PreventiveMaintenanceInput) -> Result<(), ValidationError> {
        input.validate()
    }
}

pub struct Suppliers;

impl Resource for Suppliers {
    type Dto = SupplierDto;
    type Input = SupplierInput;

    const PATH: &'static str = "/api/suppliers";
    const MESSAGES: Messages = SUPPLIER_MESSAGES;

    fn blank() -> SupplierInput {
        SupplierInput::default()
    }

    fn to_input(dto: &SupplierDto) -> SupplierInput {
        dto.into()
    }

    fn validate(input: &SupplierInput) -> Result<(), ValidationError> {
        input.validate()
    }
}

pub struct CommonAreas;

impl Resource for CommonAreas {
    type Dto = CommonAreaDto;
    type Input = CommonAreaInput;

    const PATH: &'static str = "/api/common-areas";
    const MESSAGES: Messages = COMMON_AREA_MESSAGES;

    fn blank() -> CommonAreaInput {
        CommonAreaInput::default()
    }

    fn to_input(dto: &CommonAreaDto) -> CommonAreaInput {
        dto.into()
    }

    fn validate(input: &CommonAreaInput) -> Result<(), ValidationError> {
        input.validate()
    }
}

pub struct Reservations;

impl Resource for Reservations {
    type Dto = ReservationDto;
    type Input = ReservationInput;

    const PATH: &'static str = "/api/reservations";
    const MESSAGES: Messages = RESERVATION_MESSAGES;

    /// Two hours tomorrow morning, no area picked yet
    fn blank() -> ReservationInput {
        let start_at = NaiveDateTime::new(
            today() + Duration::days(1),
            NaiveTime::from_hms_opt(10, 0, 0).unwrap_or_default(),
        );

        ReservationInput {
            common_area_id: 0,
            start_at,
            end_at: start_at + Duration::hours(2),
            status: Default::default(),
            payment_status: Default::default(),
            purpose: None,
            expected_guests: None,
            location_kind: LocationKind::CommonArea,
            unit_number: None,
            location_detail: None,
            responsible_name: None,
            responsible_unit: None,
            needs_cleaning: false,
            needs_furniture: false,
            furniture_details: None,
            agrees_to_rules: false,
            special_requests: None,
            notes: None,
        }
    }

    fn to_input(dto: &ReservationDto) -> ReservationInput {
        dto.into()
    }

    fn validate(input: &ReservationInput) -> Result<(), ValidationError> {
        if input.common_area_id <= 0 {
            return Err(ValidationError::Required("common_area_id"));
        }

        input.validate()
    }
}

pub struct Transactions;

impl Resource for Transactions {
    type Dto = FinancialTransactionDto;
    type Input = FinancialTransactionInput;

    const PATH: &'static str = "/api/financial/transactions";
    const MESSAGES: Messages = TRANSACTION_MESSAGES;

    fn blank() -> FinancialTransactionInput {
        FinancialTransactionInput {
            transaction_date: today(),
            ..Default::default()
        }
    }

    fn to_input(dto: &FinancialTransactionDto) -> FinancialTransactionInput {
        dto.into()
    }

    fn validate(input: &FinancialTransactionInput) -> Result<(), ValidationError> {
        input.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_path_appends_id() {
        assert_eq!(Assets::item_path(7), "/api/assets/7");
        assert_eq!(Transactions::item_path(3), "/api/financial/transactions/3");
    }

    #[test]
    fn blank_reservation_needs_an_area() {
        let input = Reservations::blank();

        assert!(input.end_at > input.start_at);
        assert_eq!(
            Reservations::validate(&input),
            Err(ValidationError::Required("common_area_id"))
        );
    }
}
