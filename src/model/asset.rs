use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::model::{
    record_list::{Messages, Record},
    validation::{optional_non_negative, require, ValidationError},
};

text_enum! {
    #[derive(Default)]
    AssetCondition, "condition" {
        Excellent => ("excellent", "Excelente"),
        #[default]
        Good => ("good", "Bom"),
        Fair => ("fair", "Regular"),
        Poor => ("poor", "Ruim"),
    }
}

pub const ASSET_MESSAGES: Messages = Messages {
    created: "Ativo cadastrado com sucesso!",
    updated: "Ativo atualizado com sucesso!",
    deleted: "Ativo removido com sucesso!",
    fetch_failed: "Erro ao carregar ativos",
    create_failed: "Erro ao cadastrar ativo",
    update_failed: "Erro ao atualizar ativo",
    delete_failed: "Erro ao remover ativo",
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct AssetDto {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub acquisition_date: Option<NaiveDate>,
    pub acquisition_value: Option<f64>,
    pub current_value: Option<f64>,
    pub condition: AssetCondition,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub warranty_expiry: Option<NaiveDate>,
    pub useful_life_years: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Record for AssetDto {
    fn id(&self) -> i32 {
        self.id
    }
}

/// Body of asset create and update requests
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct AssetInput {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub acquisition_date: Option<NaiveDate>,
    #[serde(default)]
    pub acquisition_value: Option<f64>,
    #[serde(default)]
    pub current_value: Option<f64>,
    #[serde(default)]
    pub condition: AssetCondition,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub warranty_expiry: Option<NaiveDate>,
    #[serde(default)]
    pub useful_life_years: Option<i32>,
}

impl AssetInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("category", &self.category)?;
        optional_non_negative("acquisition_value", self.acquisition_value)?;
        optional_non_negative("current_value", self.current_value)?;

        if matches!(self.useful_life_years, Some(years) if years < 0) {
            return Err(ValidationError::Negative("useful_life_years"));
        }

        Ok(())
    }
}

impl From<&AssetDto> for AssetInput {
    fn from(asset: &AssetDto) -> Self {
        Self {
            name: asset.name.clone(),
            category: asset.category.clone(),
            description: asset.description.clone(),
            location: asset.location.clone(),
            acquisition_date: asset.acquisition_date,
            acquisition_value: asset.acquisition_value,
            current_value: asset.current_value,
            condition: asset.condition,
            manufacturer: asset.manufacturer.clone(),
            model: asset.model.clone(),
            serial_number: asset.serial_number.clone(),
            warranty_expiry: asset.warranty_expiry,
            useful_life_years: asset.useful_life_years,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> AssetInput {
        AssetInput {
            name: "Bomba d'água".to_string(),
            category: "Hidráulica".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn accepts_minimal_asset() {
        assert!(input().validate().is_ok());
        assert_eq!(input().condition, AssetCondition::Good);
    }

    #[test]
    fn requires_name_and_category() {
        let mut asset = input();
        asset.name = " ".to_string();
        assert_eq!(asset.validate(), Err(ValidationError::Required("name")));

        let mut asset = input();
        asset.category.clear();
        assert_eq!(asset.validate(), Err(ValidationError::Required("category")));
    }

    #[test]
    fn rejects_negative_values() {
        let mut asset = input();
        asset.current_value = Some(-10.0);
        assert_eq!(
            asset.validate(),
            Err(ValidationError::Negative("current_value"))
        );
    }

    #[test]
    fn condition_defaults_when_missing_from_json() {
        let asset: AssetInput =
            serde_json::from_str(r#"{"name":"Portão","category":"Acesso"}"#).unwrap();
        assert_eq!(asset.condition, AssetCondition::Good);
    }
}
