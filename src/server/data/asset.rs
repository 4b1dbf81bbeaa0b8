use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::asset::AssetInput;

pub struct AssetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AssetRepository<'a, C> {
    /// Creates a new instance of [`AssetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        input: &AssetInput,
    ) -> Result<entity::asset::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let mut asset = entity::asset::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        };
        apply_input(&mut asset, input);
        asset.updated_at = ActiveValue::Set(now);

        asset.insert(self.db).await
    }

    /// Lists the user's assets, most recently created first
    pub async fn get_all_by_user(&self, user_id: i32) -> Result<Vec<entity::asset::Model>, DbErr> {
        entity::prelude::Asset::find()
            .filter(entity::asset::Column::UserId.eq(user_id))
            .order_by_desc(entity::asset::Column::CreatedAt)
            .order_by_desc(entity::asset::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_for_user(
        &self,
        user_id: i32,
        asset_id: i32,
    ) -> Result<Option<entity::asset::Model>, DbErr> {
        entity::prelude::Asset::find_by_id(asset_id)
            .filter(entity::asset::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Replaces every editable field of an asset
    ///
    /// Returns `Ok(None)` if the asset does not exist or belongs to another user.
    pub async fn update(
        &self,
        user_id: i32,
        asset_id: i32,
        input: &AssetInput,
    ) -> Result<Option<entity::asset::Model>, DbErr> {
        let Some(asset) = self.get_for_user(user_id, asset_id).await? else {
            return Ok(None);
        };

        let mut asset_am = asset.into_active_model();
        apply_input(&mut asset_am, input);
        asset_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(asset_am.update(self.db).await?))
    }

    /// Returns OK regardless of the asset existing, check [`DeleteResult::rows_affected`]
    pub async fn delete(&self, user_id: i32, asset_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Asset::delete_many()
            .filter(entity::asset::Column::Id.eq(asset_id))
            .filter(entity::asset::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }
}

fn apply_input(asset: &mut entity::asset::ActiveModel, input: &AssetInput) {
    asset.name = ActiveValue::Set(input.name.trim().to_string());
    asset.category = ActiveValue::Set(input.category.trim().to_string());
    asset.description = ActiveValue::Set(input.description.clone());
    asset.location = ActiveValue::Set(input.location.clone());
    asset.acquisition_date = ActiveValue::Set(input.acquisition_date);
    asset.acquisition_value = ActiveValue::Set(input.acquisition_value);
    asset.current_value = ActiveValue::Set(input.current_value);
    asset.condition = ActiveValue::Set(input.condition.as_str().to_string());
    asset.manufacturer = ActiveValue::Set(input.manufacturer.clone());
    asset.model = ActiveValue::Set(input.model.clone());
    asset.serial_number = ActiveValue::Set(input.serial_number.clone());
    asset.warranty_expiry = ActiveValue::Set(input.warranty_expiry);
    asset.useful_life_years = ActiveValue::Set(input.useful_life_years);
}
