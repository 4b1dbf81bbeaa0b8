//! Common-area reservations: intake validation, cost estimate and double-booking rules.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::{
    common_area::CommonAreaDto,
    location::{validate_location, LocationKind},
    record_list::{Messages, Record},
    validation::ValidationError,
};

text_enum! {
    #[derive(Default)]
    ReservationStatus, "status" {
        #[default]
        Pending => ("pending", "Pendente"),
        Confirmed => ("confirmed", "Confirmada"),
        Cancelled => ("cancelled", "Cancelada"),
        Completed => ("completed", "Concluída"),
    }
}

text_enum! {
    #[derive(Default)]
    PaymentStatus, "payment_status" {
        #[default]
        Pending => ("pending", "Pendente"),
        Paid => ("paid", "Pago"),
        Refunded => ("refunded", "Reembolsado"),
    }
}

impl ReservationStatus {
    /// Whether a reservation in this status holds its time slot
    pub fn holds_slot(&self) -> bool {
        !matches!(self, ReservationStatus::Cancelled)
    }
}

pub const RESERVATION_MESSAGES: Messages = Messages {
    created: "Reserva criada com sucesso!",
    updated: "Reserva atualizada com sucesso!",
    deleted: "Reserva removida com sucesso!",
    fetch_failed: "Erro ao carregar reservas",
    create_failed: "Erro ao criar reserva",
    update_failed: "Erro ao atualizar reserva",
    delete_failed: "Erro ao remover reserva",
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ReservationDto {
    pub id: i32,
    pub common_area_id: i32,
    /// Joined from the area so reservations of areas hidden from the caller stay readable
    #[serde(default)]
    pub common_area_name: Option<String>,
    pub start_at: NaiveDateTime,
    pub end_at: NaiveDateTime,
    pub status: ReservationStatus,
    pub payment_status: PaymentStatus,
    pub purpose: Option<String>,
    pub expected_guests: Option<i32>,
    pub total_cost: Option<f64>,
    pub location_kind: LocationKind,
    pub unit_number: Option<String>,
    pub location_detail: Option<String>,
    pub responsible_name: Option<String>,
    pub responsible_unit: Option<String>,
    pub needs_cleaning: bool,
    pub needs_furniture: bool,
    pub furniture_details: Option<String>,
    pub agrees_to_rules: bool,
    pub special_requests: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Record for ReservationDto {
    fn id(&self) -> i32 {
        self.id
    }
}

/// Body of reservation create and update requests; `total_cost` is always computed
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ReservationInput {
    pub common_area_id: i32,
    pub start_at: NaiveDateTime,
    pub end_at: NaiveDateTime,
    #[serde(default)]
    pub status: ReservationStatus,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub expected_guests: Option<i32>,
    pub location_kind: LocationKind,
    #[serde(default)]
    pub unit_number: Option<String>,
    #[serde(default)]
    pub location_detail: Option<String>,
    #[serde(default)]
    pub responsible_name: Option<String>,
    #[serde(default)]
    pub responsible_unit: Option<String>,
    #[serde(default)]
    pub needs_cleaning: bool,
    #[serde(default)]
    pub needs_furniture: bool,
    #[serde(default)]
    pub furniture_details: Option<String>,
    #[serde(default)]
    pub agrees_to_rules: bool,
    #[serde(default)]
    pub special_requests: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl ReservationInput {
    /// Checks the fields that need no other record.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.end_at <= self.start_at {
            return Err(ValidationError::EndNotAfterStart);
        }

        validate_location(
            self.location_kind,
            self.unit_number.as_deref(),
            self.location_detail.as_deref(),
        )?;

        if matches!(self.expected_guests, Some(guests) if guests < 0) {
            return Err(ValidationError::Negative("expected_guests"));
        }

        if !self.agrees_to_rules {
            return Err(ValidationError::RulesNotAccepted);
        }

        Ok(())
    }

    /// Checks the reservation against the limits of the area being booked.
    pub fn validate_for_area(&self, area: &CommonAreaDto) -> Result<(), ValidationError> {
        if !area.is_active {
            return Err(ValidationError::AreaInactive);
        }

        if let (Some(guests), Some(capacity)) = (self.expected_guests, area.capacity) {
            if guests > capacity {
                return Err(ValidationError::CapacityExceeded { guests, capacity });
            }
        }

        if let Some(max_hours) = area.max_booking_duration_hours {
            let hours = duration_hours(self.start_at, self.end_at);
            if hours > f64::from(max_hours) {
                return Err(ValidationError::DurationExceeded { hours, max_hours });
            }
        }

        Ok(())
    }

    pub fn estimate_total_cost(&self, area: &CommonAreaDto) -> Option<f64> {
        estimate_total_cost(self.start_at, self.end_at, area.hourly_rate)
    }
}

impl From<&ReservationDto> for ReservationInput {
    fn from(reservation: &ReservationDto) -> Self {
        Self {
            common_area_id: reservation.common_area_id,
            start_at: reservation.start_at,
            end_at: reservation.end_at,
            status: reservation.status,
            payment_status: reservation.payment_status,
            purpose: reservation.purpose.clone(),
            expected_guests: reservation.expected_guests,
            location_kind: reservation.location_kind,
            unit_number: reservation.unit_number.clone(),
            location_detail: reservation.location_detail.clone(),
            responsible_name: reservation.responsible_name.clone(),
            responsible_unit: reservation.responsible_unit.clone(),
            needs_cleaning: reservation.needs_cleaning,
            needs_furniture: reservation.needs_furniture,
            furniture_details: reservation.furniture_details.clone(),
            agrees_to_rules: reservation.agrees_to_rules,
            special_requests: reservation.special_requests.clone(),
            notes: reservation.notes.clone(),
        }
    }
}

/// Length of `[start, end)` in fractional hours, negative when `end` precedes `start`
pub fn duration_hours(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    (end - start).num_seconds() as f64 / 3600.0
}

/// Hours booked times the hourly rate.
///
/// `None` when the area has no hourly rate. An empty or inverted interval costs nothing.
pub fn estimate_total_cost(
    start: NaiveDateTime,
    end: NaiveDateTime,
    hourly_rate: Option<f64>,
) -> Option<f64> {
    let rate = hourly_rate?;
    let hours = duration_hours(start, end).max(0.0);

    Some(hours * rate)
}

/// Whether the half-open intervals `[a_start, a_end)` and `[b_start, b_end)` share any instant
pub fn overlaps(
    a_start: NaiveDateTime,
    a_end: NaiveDateTime,
    b_start: NaiveDateTime,
    b_end: NaiveDateTime,
) -> bool {
    a_start < b_end && b_start < a_end
}
