use sea_orm::DatabaseConnection;

use crate::{
    model::preventive::{PreventiveMaintenanceDto, PreventiveMaintenanceInput},
    server::{
        data::preventive_maintenance::PreventiveMaintenanceRepository,
        error::{resource::ResourceError, Error},
        util::parse::parse_stored,
    },
};

const RESOURCE: &str = "Preventive maintenance";

impl TryFrom<entity::preventive_maintenance::Model> for PreventiveMaintenanceDto {
    type Error = Error;

    fn try_from(entry: entity::preventive_maintenance::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: entry.id,
            periodicity: parse_stored(&entry.periodicity)?,
            status: parse_stored(&entry.status)?,
            asset_id: entry.asset_id,
            maintenance_type: entry.maintenance_type,
            description: entry.description,
            usage_detail: entry.usage_detail,
            next_due_date: entry.next_due_date,
            responsible_party: entry.responsible_party,
            estimated_cost: entry.estimated_cost,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        })
    }
}

/// Preventive schedules; the next due date only moves when a user edits it.
pub struct PreventiveService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PreventiveService<'a> {
    /// Creates a new instance of [`PreventiveService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_schedule(&self, user_id: i32) -> Result<Vec<PreventiveMaintenanceDto>, Error> {
        PreventiveMaintenanceRepository::new(self.db)
            .get_all_by_user(user_id)
            .await?
            .into_iter()
            .map(PreventiveMaintenanceDto::try_from)
            .collect()
    }

    pub async fn create_entry(
        &self,
        user_id: i32,
        input: &PreventiveMaintenanceInput,
    ) -> Result<PreventiveMaintenanceDto, Error> {
        input.validate()?;

        PreventiveMaintenanceRepository::new(self.db)
            .create(user_id, input)
            .await?
            .try_into()
    }

    pub async fn update_entry(
        &self,
        user_id: i32,
        entry_id: i32,
        input: &PreventiveMaintenanceInput,
    ) -> Result<PreventiveMaintenanceDto, Error> {
        input.validate()?;

        PreventiveMaintenanceRepository::new(self.db)
            .update(user_id, entry_id, input)
            .await?
            .ok_or(ResourceError::NotFound {
                resource: RESOURCE,
                id: entry_id,
            })?
            .try_into()
    }

    pub async fn delete_entry(&self, user_id: i32, entry_id: i32) -> Result<(), Error> {
        let result = PreventiveMaintenanceRepository::new(self.db)
            .delete(user_id, entry_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(ResourceError::NotFound {
                resource: RESOURCE,
                id: entry_id,
            }
            .into());
        }

        Ok(())
    }
}
