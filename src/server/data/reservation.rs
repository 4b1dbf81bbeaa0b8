use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::{
    reservation::{ReservationInput, ReservationStatus},
    validation::normalize,
};

pub struct ReservationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReservationRepository<'a, C> {
    /// Creates a new instance of [`ReservationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a reservation with the cost computed by the caller
    pub async fn create(
        &self,
        user_id: i32,
        input: &ReservationInput,
        total_cost: Option<f64>,
    ) -> Result<entity::reservation::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let mut reservation = entity::reservation::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };
        apply_input(&mut reservation, input, total_cost);

        reservation.insert(self.db).await
    }

    /// Reservations of the user, newest first, each with the area it books
    pub async fn get_all_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<(entity::reservation::Model, Option<entity::common_area::Model>)>, DbErr> {
        entity::prelude::Reservation::find()
            .find_also_related(entity::prelude::CommonArea)
            .filter(entity::reservation::Column::UserId.eq(user_id))
            .order_by_desc(entity::reservation::Column::CreatedAt)
            .order_by_desc(entity::reservation::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_for_user(
        &self,
        user_id: i32,
        reservation_id: i32,
    ) -> Result<Option<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find_by_id(reservation_id)
            .filter(entity::reservation::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Finds a reservation of the area, by any user, whose `[start_at, end_at)` interval
    /// intersects the given one
    ///
    /// Cancelled reservations never block a slot. `exclude_id` skips the reservation being
    /// edited.
    pub async fn find_overlapping(
        &self,
        common_area_id: i32,
        start_at: NaiveDateTime,
        end_at: NaiveDateTime,
        exclude_id: Option<i32>,
    ) -> Result<Option<entity::reservation::Model>, DbErr> {
        let mut query = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::CommonAreaId.eq(common_area_id))
            .filter(entity::reservation::Column::Status.ne(ReservationStatus::Cancelled.as_str()))
            .filter(entity::reservation::Column::StartAt.lt(end_at))
            .filter(entity::reservation::Column::EndAt.gt(start_at));

        if let Some(exclude_id) = exclude_id {
            query = query.filter(entity::reservation::Column::Id.ne(exclude_id));
        }

        query
            .order_by_asc(entity::reservation::Column::StartAt)
            .one(self.db)
            .await
    }

    /// Returns `Ok(None)` if the reservation does not exist or belongs to another user.
    pub async fn update(
        &self,
        user_id: i32,
        reservation_id: i32,
        input: &ReservationInput,
        total_cost: Option<f64>,
    ) -> Result<Option<entity::reservation::Model>, DbErr> {
        let Some(reservation) = self.get_for_user(user_id, reservation_id).await? else {
            return Ok(None);
        };

        let mut reservation_am = reservation.into_active_model();
        apply_input(&mut reservation_am, input, total_cost);
        reservation_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(reservation_am.update(self.db).await?))
    }

    pub async fn delete(&self, user_id: i32, reservation_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Reservation::delete_many()
            .filter(entity::reservation::Column::Id.eq(reservation_id))
            .filter(entity::reservation::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }
}

fn apply_input(
    reservation: &mut entity::reservation::ActiveModel,
    input: &ReservationInput,
    total_cost: Option<f64>,
) {
    let kind = input.location_kind;

    reservation.common_area_id = ActiveValue::Set(input.common_area_id);
    reservation.start_at = ActiveValue::Set(input.start_at);
    reservation.end_at = ActiveValue::Set(input.end_at);
    reservation.status = ActiveValue::Set(input.status.as_str().to_string());
    reservation.payment_status = ActiveValue::Set(input.payment_status.as_str().to_string());
    reservation.purpose = ActiveValue::Set(normalize(input.purpose.clone()));
    reservation.expected_guests = ActiveValue::Set(input.expected_guests);
    reservation.total_cost = ActiveValue::Set(total_cost);
    reservation.location_kind = ActiveValue::Set(kind.as_str().to_string());
    reservation.unit_number = ActiveValue::Set(
        normalize(input.unit_number.clone()).filter(|_| kind.requires_unit_number()),
    );
    reservation.location_detail = ActiveValue::Set(
        normalize(input.location_detail.clone()).filter(|_| kind.requires_detail()),
    );
    reservation.responsible_name = ActiveValue::Set(normalize(input.responsible_name.clone()));
    reservation.responsible_unit = ActiveValue::Set(normalize(input.responsible_unit.clone()));
    reservation.needs_cleaning = ActiveValue::Set(input.needs_cleaning);
    reservation.needs_furniture = ActiveValue::Set(input.needs_furniture);
    reservation.furniture_details = ActiveValue::Set(
        normalize(input.furniture_details.clone()).filter(|_| input.needs_furniture),
    );
    reservation.agrees_to_rules = ActiveValue::Set(input.agrees_to_rules);
    reservation.special_requests = ActiveValue::Set(normalize(input.special_requests.clone()));
    reservation.notes = ActiveValue::Set(normalize(input.notes.clone()));
}
