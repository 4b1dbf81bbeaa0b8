use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::{
    supplier::{join_services, SupplierInput},
    validation::normalize,
};

pub struct SupplierRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SupplierRepository<'a, C> {
    /// Creates a new instance of [`SupplierRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        input: &SupplierInput,
    ) -> Result<entity::supplier::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let mut supplier = entity::supplier::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };
        apply_input(&mut supplier, input);

        supplier.insert(self.db).await
    }

    pub async fn get_all_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::supplier::Model>, DbErr> {
        entity::prelude::Supplier::find()
            .filter(entity::supplier::Column::UserId.eq(user_id))
            .order_by_desc(entity::supplier::Column::CreatedAt)
            .order_by_desc(entity::supplier::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_for_user(
        &self,
        user_id: i32,
        supplier_id: i32,
    ) -> Result<Option<entity::supplier::Model>, DbErr> {
        entity::prelude::Supplier::find_by_id(supplier_id)
            .filter(entity::supplier::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Returns `Ok(None)` if the supplier does not exist or belongs to another user.
    pub async fn update(
        &self,
        user_id: i32,
        supplier_id: i32,
        input: &SupplierInput,
    ) -> Result<Option<entity::supplier::Model>, DbErr> {
        let Some(supplier) = self.get_for_user(user_id, supplier_id).await? else {
            return Ok(None);
        };

        let mut supplier_am = supplier.into_active_model();
        apply_input(&mut supplier_am, input);
        supplier_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(supplier_am.update(self.db).await?))
    }

    pub async fn delete(&self, user_id: i32, supplier_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Supplier::delete_many()
            .filter(entity::supplier::Column::Id.eq(supplier_id))
            .filter(entity::supplier::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }
}

fn apply_input(supplier: &mut entity::supplier::ActiveModel, input: &SupplierInput) {
    supplier.name = ActiveValue::Set(input.name.trim().to_string());
    supplier.trade_name = ActiveValue::Set(normalize(input.trade_name.clone()));
    supplier.person_type =
        ActiveValue::Set(input.person_type.map(|kind| kind.as_str().to_string()));
    supplier.tax_id = ActiveValue::Set(normalize(input.tax_id.clone()));
    supplier.email = ActiveValue::Set(normalize(input.email.clone()));
    supplier.landline = ActiveValue::Set(normalize(input.landline.clone()));
    supplier.mobile = ActiveValue::Set(normalize(input.mobile.clone()));
    supplier.postal_code = ActiveValue::Set(normalize(input.postal_code.clone()));
    supplier.street = ActiveValue::Set(normalize(input.street.clone()));
    supplier.number = ActiveValue::Set(normalize(input.number.clone()));
    supplier.complement = ActiveValue::Set(normalize(input.complement.clone()));
    supplier.district = ActiveValue::Set(normalize(input.district.clone()));
    supplier.city = ActiveValue::Set(normalize(input.city.clone()));
    supplier.state = ActiveValue::Set(normalize(input.state.clone()));
    supplier.bank = ActiveValue::Set(normalize(input.bank.clone()));
    supplier.bank_branch = ActiveValue::Set(normalize(input.bank_branch.clone()));
    supplier.bank_account = ActiveValue::Set(normalize(input.bank_account.clone()));
    supplier.account_type =
        ActiveValue::Set(input.account_type.map(|kind| kind.as_str().to_string()));
    supplier.category = ActiveValue::Set(input.category.trim().to_string());
    supplier.services = ActiveValue::Set(join_services(&input.services));
    supplier.notes = ActiveValue::Set(normalize(input.notes.clone()));
    supplier.is_active = ActiveValue::Set(input.is_active);
}
