use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::{
    model::common_area::{CommonAreaDto, CommonAreaInput},
    server::{
        data::common_area::CommonAreaRepository,
        error::{resource::ResourceError, Error},
    },
};

const RESOURCE: &str = "Common area";

impl From<entity::common_area::Model> for CommonAreaDto {
    fn from(area: entity::common_area::Model) -> Self {
        Self {
            id: area.id,
            name: area.name,
            description: area.description,
            capacity: area.capacity,
            hourly_rate: area.hourly_rate,
            daily_rate: area.daily_rate,
            rules: area.rules,
            is_active: area.is_active,
            requires_approval: area.requires_approval,
            advance_booking_days: area.advance_booking_days,
            max_booking_duration_hours: area.max_booking_duration_hours,
            created_at: area.created_at,
            updated_at: area.updated_at,
        }
    }
}

/// Finds a bookable area by ID regardless of owner, locking its row for the rest of the
/// caller's transaction
///
/// # Returns
/// - `Err(Error::ResourceError(NotFound))` - No area with this ID
pub async fn lock_area<C: ConnectionTrait>(db: &C, area_id: i32) -> Result<CommonAreaDto, Error> {
    let area = CommonAreaRepository::new(db)
        .get_for_update(area_id)
        .await?
        .ok_or(ResourceError::NotFound {
            resource: RESOURCE,
            id: area_id,
        })?;

    Ok(area.into())
}

pub struct CommonAreaService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommonAreaService<'a> {
    /// Creates a new instance of [`CommonAreaService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the active areas every user may book, plus the user's own inactive ones so they
    /// can be reactivated
    pub async fn get_areas(&self, user_id: i32) -> Result<Vec<CommonAreaDto>, Error> {
        let areas = CommonAreaRepository::new(self.db).get_visible(user_id).await?;

        Ok(areas.into_iter().map(CommonAreaDto::from).collect())
    }

    pub async fn create_area(
        &self,
        user_id: i32,
        input: &CommonAreaInput,
    ) -> Result<CommonAreaDto, Error> {
        input.validate()?;

        let area = CommonAreaRepository::new(self.db).create(user_id, input).await?;

        Ok(area.into())
    }

    /// # Returns
    /// - `Err(Error::ResourceError(NotFound))` - Area missing or registered by another user
    pub async fn update_area(
        &self,
        user_id: i32,
        area_id: i32,
        input: &CommonAreaInput,
    ) -> Result<CommonAreaDto, Error> {
        input.validate()?;

        let area = CommonAreaRepository::new(self.db)
            .update(user_id, area_id, input)
            .await?
            .ok_or(ResourceError::NotFound {
                resource: RESOURCE,
                id: area_id,
            })?;

        Ok(area.into())
    }
}
