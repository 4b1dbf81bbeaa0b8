use sea_orm::DatabaseConnection;

use crate::{
    model::asset::{AssetDto, AssetInput},
    server::{
        data::asset::AssetRepository,
        error::{resource::ResourceError, Error},
        util::parse::parse_stored,
    },
};

const RESOURCE: &str = "Asset";

impl TryFrom<entity::asset::Model> for AssetDto {
    type Error = Error;

    fn try_from(asset: entity::asset::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: asset.id,
            condition: parse_stored(&asset.condition)?,
            name: asset.name,
            category: asset.category,
            description: asset.description,
            location: asset.location,
            acquisition_date: asset.acquisition_date,
            acquisition_value: asset.acquisition_value,
            current_value: asset.current_value,
            manufacturer: asset.manufacturer,
            model: asset.model,
            serial_number: asset.serial_number,
            warranty_expiry: asset.warranty_expiry,
            useful_life_years: asset.useful_life_years,
            created_at: asset.created_at,
            updated_at: asset.updated_at,
        })
    }
}

pub struct AssetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AssetService<'a> {
    /// Creates a new instance of [`AssetService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_assets(&self, user_id: i32) -> Result<Vec<AssetDto>, Error> {
        AssetRepository::new(self.db)
            .get_all_by_user(user_id)
            .await?
            .into_iter()
            .map(AssetDto::try_from)
            .collect()
    }

    pub async fn create_asset(&self, user_id: i32, input: &AssetInput) -> Result<AssetDto, Error> {
        input.validate()?;

        AssetRepository::new(self.db)
            .create(user_id, input)
            .await?
            .try_into()
    }

    /// # Returns
    /// - `Err(Error::ResourceError(NotFound))` - Asset missing or owned by another user
    pub async fn update_asset(
        &self,
        user_id: i32,
        asset_id: i32,
        input: &AssetInput,
    ) -> Result<AssetDto, Error> {
        input.validate()?;

        AssetRepository::new(self.db)
            .update(user_id, asset_id, input)
            .await?
            .ok_or(ResourceError::NotFound {
                resource: RESOURCE,
                id: asset_id,
            })?
            .try_into()
    }

    /// Deletes an asset; maintenance records referencing it are left untouched
    pub async fn delete_asset(&self, user_id: i32, asset_id: i32) -> Result<(), Error> {
        let result = AssetRepository::new(self.db).delete(user_id, asset_id).await?;

        if result.rows_affected == 0 {
            return Err(ResourceError::NotFound {
                resource: RESOURCE,
                id: asset_id,
            }
            .into());
        }

        Ok(())
    }
}
