//! Reservation intake.
//!
//! Every create and update is re-validated here: the input rules, the rules of the booked
//! area and the absence of another booking for an intersecting interval. An update that
//! cancels, or leaves area, interval and guests as stored, skips the area's rules. The total
//! cost is always recomputed from the area's hourly rate, never taken from the client.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::reservation::{ReservationDto, ReservationInput, ReservationStatus},
    server::{
        data::reservation::ReservationRepository,
        error::{resource::ResourceError, Error},
        service::common_area::lock_area,
        util::parse::parse_stored,
    },
};

const RESOURCE: &str = "Reservation";

impl TryFrom<entity::reservation::Model> for ReservationDto {
    type Error = Error;

    fn try_from(reservation: entity::reservation::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: reservation.id,
            status: parse_stored(&reservation.status)?,
            payment_status: parse_stored(&reservation.payment_status)?,
            location_kind: parse_stored(&reservation.location_kind)?,
            common_area_id: reservation.common_area_id,
            common_area_name: None,
            start_at: reservation.start_at,
            end_at: reservation.end_at,
            purpose: reservation.purpose,
            expected_guests: reservation.expected_guests,
            total_cost: reservation.total_cost,
            unit_number: reservation.unit_number,
            location_detail: reservation.location_detail,
            responsible_name: reservation.responsible_name,
            responsible_unit: reservation.responsible_unit,
            needs_cleaning: reservation.needs_cleaning,
            needs_furniture: reservation.needs_furniture,
            furniture_details: reservation.furniture_details,
            agrees_to_rules: reservation.agrees_to_rules,
            special_requests: reservation.special_requests,
            notes: reservation.notes,
            created_at: reservation.created_at,
            updated_at: reservation.updated_at,
        })
    }
}

pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationService<'a> {
    /// Creates a new instance of [`ReservationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_reservations(&self, user_id: i32) -> Result<Vec<ReservationDto>, Error> {
        ReservationRepository::new(self.db)
            .get_all_by_user(user_id)
            .await?
            .into_iter()
            .map(|(reservation, area)| to_dto(reservation, area.map(|area| area.name)))
            .collect()
    }

    /// Books a common area
    ///
    /// # Returns
    /// - `Ok(ReservationDto)` - Created reservation with its computed total cost
    /// - `Err(Error::ValidationError)` - Invalid input or area rules violated
    /// - `Err(Error::ResourceError(NotFound))` - Area does not exist
    /// - `Err(Error::ResourceError(ReservationConflict))` - Interval already booked
    pub async fn create_reservation(
        &self,
        user_id: i32,
        input: &ReservationInput,
    ) -> Result<ReservationDto, Error> {
        input.validate()?;

        let txn = self.db.begin().await?;

        let booking = check_booking(&txn, input, None).await?;
        let reservation = ReservationRepository::new(&txn)
            .create(user_id, input, booking.total_cost)
            .await?;

        txn.commit().await?;

        to_dto(reservation, Some(booking.area_name))
    }

    /// Re-validates and replaces a reservation of the user
    ///
    /// The reservation's own interval never conflicts with itself. The area's limits are
    /// skipped when the update releases the slot or keeps the booked area, interval and
    /// guest count as stored, so bookings stay editable after the area changes.
    pub async fn update_reservation(
        &self,
        user_id: i32,
        reservation_id: i32,
        input: &ReservationInput,
    ) -> Result<ReservationDto, Error> {
        input.validate()?;

        let txn = self.db.begin().await?;
        let reservation_repository = ReservationRepository::new(&txn);

        let Some(stored) = reservation_repository
            .get_for_user(user_id, reservation_id)
            .await?
        else {
            return Err(not_found(reservation_id));
        };

        let booking = check_booking(&txn, input, Some(&stored)).await?;
        let reservation = reservation_repository
            .update(user_id, reservation_id, input, booking.total_cost)
            .await?
            .ok_or_else(|| not_found(reservation_id))?;

        txn.commit().await?;

        to_dto(reservation, Some(booking.area_name))
    }

    pub async fn delete_reservation(&self, user_id: i32, reservation_id: i32) -> Result<(), Error> {
        let result = ReservationRepository::new(self.db)
            .delete(user_id, reservation_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(not_found(reservation_id));
        }

        Ok(())
    }
}

fn not_found(reservation_id: i32) -> Error {
    ResourceError::NotFound {
        resource: RESOURCE,
        id: reservation_id,
    }
    .into()
}

fn to_dto(
    reservation: entity::reservation::Model,
    area_name: Option<String>,
) -> Result<ReservationDto, Error> {
    let mut dto = ReservationDto::try_from(reservation)?;
    dto.common_area_name = area_name;

    Ok(dto)
}

struct Booking {
    area_name: String,
    total_cost: Option<f64>,
}

/// Applies the area's rules and the double-booking check, returning the total cost
///
/// The area row stays locked until the caller's transaction ends, so two bookings of the
/// same area cannot both pass the overlap check.
async fn check_booking<C: ConnectionTrait>(
    db: &C,
    input: &ReservationInput,
    stored: Option<&entity::reservation::Model>,
) -> Result<Booking, Error> {
    let area = lock_area(db, input.common_area_id).await?;

    if input.status.holds_slot() {
        if !keeps_booking(stored, input)? {
            input.validate_for_area(&area)?;
        }

        let conflict = ReservationRepository::new(db)
            .find_overlapping(
                area.id,
                input.start_at,
                input.end_at,
                stored.map(|reservation| reservation.id),
            )
            .await?;

        if let Some(existing) = conflict {
            return Err(ResourceError::ReservationConflict {
                common_area_id: area.id,
                start_at: existing.start_at,
                end_at: existing.end_at,
            }
            .into());
        }
    }

    let total_cost = input.estimate_total_cost(&area);

    Ok(Booking {
        area_name: area.name,
        total_cost,
    })
}

/// Whether the update leaves a slot-holding reservation on the same area, interval and
/// guest count
fn keeps_booking(
    stored: Option<&entity::reservation::Model>,
    input: &ReservationInput,
) -> Result<bool, Error> {
    let Some(stored) = stored else {
        return Ok(false);
    };

    let status: ReservationStatus = parse_stored(&stored.status)?;

    Ok(status.holds_slot()
        && stored.common_area_id == input.common_area_id
        && stored.start_at == input.start_at
        && stored.end_at == input.end_at
        && stored.expected_guests == input.expected_guests)
}

#[cfg(test)]
mod tests;
