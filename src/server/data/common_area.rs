use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::{common_area::CommonAreaInput, validation::normalize};

/// Common areas are shared amenities: every user can list and book them, only the user who
/// registered an area may edit it.
pub struct CommonAreaRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommonAreaRepository<'a, C> {
    /// Creates a new instance of [`CommonAreaRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        input: &CommonAreaInput,
    ) -> Result<entity::common_area::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let mut area = entity::common_area::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };
        apply_input(&mut area, input);

        area.insert(self.db).await
    }

    /// Lists active areas of every user plus the user's own inactive ones, ordered by name
    pub async fn get_visible(&self, user_id: i32) -> Result<Vec<entity::common_area::Model>, DbErr> {
        entity::prelude::CommonArea::find()
            .filter(
                Condition::any()
                    .add(entity::common_area::Column::IsActive.eq(true))
                    .add(entity::common_area::Column::UserId.eq(user_id)),
            )
            .order_by_asc(entity::common_area::Column::Name)
            .all(self.db)
            .await
    }

    /// Gets an area by ID with `SELECT ... FOR UPDATE`
    ///
    /// Inside a transaction the row stays locked until commit, so bookings of one area are
    /// checked and written one at a time.
    pub async fn get_for_update(
        &self,
        area_id: i32,
    ) -> Result<Option<entity::common_area::Model>, DbErr> {
        entity::prelude::CommonArea::find_by_id(area_id)
            .lock_exclusive()
            .one(self.db)
            .await
    }

    /// Returns `Ok(None)` if the area does not exist or was registered by another user.
    pub async fn update(
        &self,
        user_id: i32,
        area_id: i32,
        input: &CommonAreaInput,
    ) -> Result<Option<entity::common_area::Model>, DbErr> {
        let Some(area) = entity::prelude::CommonArea::find_by_id(area_id)
            .filter(entity::common_area::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut area_am = area.into_active_model();
        apply_input(&mut area_am, input);
        area_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(area_am.update(self.db).await?))
    }
}

fn apply_input(area: &mut entity::common_area::ActiveModel, input: &CommonAreaInput) {
    area.name = ActiveValue::Set(input.name.trim().to_string());
    area.description = ActiveValue::Set(normalize(input.description.clone()));
    area.capacity = ActiveValue::Set(input.capacity);
    area.hourly_rate = ActiveValue::Set(input.hourly_rate);
    area.daily_rate = ActiveValue::Set(input.daily_rate);
    area.rules = ActiveValue::Set(normalize(input.rules.clone()));
    area.is_active = ActiveValue::Set(input.is_active);
    area.requires_approval = ActiveValue::Set(input.requires_approval);
    area.advance_booking_days = ActiveValue::Set(input.advance_booking_days);
    area.max_booking_duration_hours = ActiveValue::Set(input.max_booking_duration_hours);
}
