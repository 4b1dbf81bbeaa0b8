use sea_orm::DatabaseConnection;

use crate::{
    model::supplier::{split_services, SupplierDto, SupplierInput},
    server::{
        data::supplier::SupplierRepository,
        error::{resource::ResourceError, Error},
        util::parse::parse_stored_opt,
    },
};

const RESOURCE: &str = "Supplier";

impl TryFrom<entity::supplier::Model> for SupplierDto {
    type Error = Error;

    fn try_from(supplier: entity::supplier::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: supplier.id,
            person_type: parse_stored_opt(supplier.person_type.as_deref())?,
            account_type: parse_stored_opt(supplier.account_type.as_deref())?,
            services: split_services(&supplier.services),
            name: supplier.name,
            trade_name: supplier.trade_name,
            tax_id: supplier.tax_id,
            email: supplier.email,
            landline: supplier.landline,
            mobile: supplier.mobile,
            postal_code: supplier.postal_code,
            street: supplier.street,
            number: supplier.number,
            complement: supplier.complement,
            district: supplier.district,
            city: supplier.city,
            state: supplier.state,
            bank: supplier.bank,
            bank_branch: supplier.bank_branch,
            bank_account: supplier.bank_account,
            category: supplier.category,
            notes: supplier.notes,
            is_active: supplier.is_active,
            created_at: supplier.created_at,
            updated_at: supplier.updated_at,
        })
    }
}

pub struct SupplierService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SupplierService<'a> {
    /// Creates a new instance of [`SupplierService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_suppliers(&self, user_id: i32) -> Result<Vec<SupplierDto>, Error> {
        SupplierRepository::new(self.db)
            .get_all_by_user(user_id)
            .await?
            .into_iter()
            .map(SupplierDto::try_from)
            .collect()
    }

    pub async fn create_supplier(
        &self,
        user_id: i32,
        input: &SupplierInput,
    ) -> Result<SupplierDto, Error> {
        input.validate()?;

        SupplierRepository::new(self.db)
            .create(user_id, input)
            .await?
            .try_into()
    }

    pub async fn update_supplier(
        &self,
        user_id: i32,
        supplier_id: i32,
        input: &SupplierInput,
    ) -> Result<SupplierDto, Error> {
        input.validate()?;

        SupplierRepository::new(self.db)
            .update(user_id, supplier_id, input)
            .await?
            .ok_or(ResourceError::NotFound {
                resource: RESOURCE,
                id: supplier_id,
            })?
            .try_into()
    }

    pub async fn delete_supplier(&self, user_id: i32, supplier_id: i32) -> Result<(), Error> {
        let result = SupplierRepository::new(self.db)
            .delete(user_id, supplier_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(ResourceError::NotFound {
                resource: RESOURCE,
                id: supplier_id,
            }
            .into());
        }

        Ok(())
    }
}
