use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::{
    record_list::{Messages, Record},
    validation::{optional_non_negative, require, ValidationError},
};

pub const COMMON_AREA_MESSAGES: Messages = Messages {
    created: "Área comum cadastrada com sucesso!",
    updated: "Área comum atualizada com sucesso!",
    deleted: "Área comum removida com sucesso!",
    fetch_failed: "Erro ao carregar áreas comuns",
    create_failed: "Erro ao cadastrar área comum",
    update_failed: "Erro ao atualizar área comum",
    delete_failed: "Erro ao remover área comum",
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CommonAreaDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub capacity: Option<i32>,
    pub hourly_rate: Option<f64>,
    pub daily_rate: Option<f64>,
    pub rules: Option<String>,
    pub is_active: bool,
    pub requires_approval: bool,
    pub advance_booking_days: Option<i32>,
    pub max_booking_duration_hours: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Record for CommonAreaDto {
    fn id(&self) -> i32 {
        self.id
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CommonAreaInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub capacity: Option<i32>,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub daily_rate: Option<f64>,
    #[serde(default)]
    pub rules: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub requires_approval: bool,
    #[serde(default)]
    pub advance_booking_days: Option<i32>,
    #[serde(default)]
    pub max_booking_duration_hours: Option<i32>,
}

fn default_active() -> bool {
    true
}

impl Default for CommonAreaInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            capacity: None,
            hourly_rate: None,
            daily_rate: None,
            rules: None,
            is_active: true,
            requires_approval: false,
            advance_booking_days: None,
            max_booking_duration_hours: None,
        }
    }
}

impl CommonAreaInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        optional_non_negative("hourly_rate", self.hourly_rate)?;
        optional_non_negative("daily_rate", self.daily_rate)?;

        for (field, value) in [
            ("capacity", self.capacity),
            ("advance_booking_days", self.advance_booking_days),
            ("max_booking_duration_hours", self.max_booking_duration_hours),
        ] {
            if matches!(value, Some(v) if v <= 0) {
                return Err(ValidationError::NotPositive(field));
            }
        }

        Ok(())
    }
}

impl From<&CommonAreaDto> for CommonAreaInput {
    fn from(area: &CommonAreaDto) -> Self {
        Self {
            name: area.name.clone(),
            description: area.description.clone(),
            capacity: area.capacity,
            hourly_rate: area.hourly_rate,
            daily_rate: area.daily_rate,
            rules: area.rules.clone(),
            is_active: area.is_active,
            requires_approval: area.requires_approval,
            advance_booking_days: area.advance_booking_days,
            max_booking_duration_hours: area.max_booking_duration_hours,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_active() {
        let area = CommonAreaInput {
            name: "Salão de Festas".to_string(),
            ..Default::default()
        };
        assert!(area.is_active);
        assert!(area.validate().is_ok());
    }

    #[test]
    fn rejects_zero_capacity() {
        let area = CommonAreaInput {
            name: "Quadra".to_string(),
            capacity: Some(0),
            ..Default::default()
        };
        assert_eq!(area.validate(), Err(ValidationError::NotPositive("capacity")));
    }

    #[test]
    fn rejects_negative_rate() {
        let area = CommonAreaInput {
            name: "Churrasqueira".to_string(),
            hourly_rate: Some(-1.0),
            ..Default::default()
        };
        assert_eq!(area.validate(), Err(ValidationError::Negative("hourly_rate")));
    }
}
