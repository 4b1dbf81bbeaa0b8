use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::model::{
    record_list::{Messages, Record},
    validation::{is_blank, optional_non_negative, require, ValidationError},
};

text_enum! {
    #[derive(Default)]
    Periodicity, "periodicity" {
        Daily => ("daily", "Diária"),
        Weekly => ("weekly", "Semanal"),
        Biweekly => ("biweekly", "Quinzenal"),
        #[default]
        Monthly => ("monthly", "Mensal"),
        Quarterly => ("quarterly", "Trimestral"),
        Semiannual => ("semiannual", "Semestral"),
        Annual => ("annual", "Anual"),
        PerUse => ("per_use", "Por uso"),
    }
}

text_enum! {
    #[derive(Default)]
    PreventiveStatus, "status" {
        #[default]
        Pending => ("pending", "Pendente"),
        Scheduled => ("scheduled", "Agendada"),
        InProgress => ("in_progress", "Em andamento"),
        Completed => ("completed", "Concluída"),
        Cancelled => ("cancelled", "Cancelada"),
    }
}

pub const PREVENTIVE_MESSAGES: Messages = Messages {
    created: "Manutenção preventiva cadastrada com sucesso!",
    updated: "Manutenção preventiva atualizada com sucesso!",
    deleted: "Manutenção preventiva removida com sucesso!",
    fetch_failed: "Erro ao carregar manutenções preventivas",
    create_failed: "Erro ao cadastrar manutenção preventiva",
    update_failed: "Erro ao atualizar manutenção preventiva",
    delete_failed: "Erro ao remover manutenção preventiva",
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PreventiveMaintenanceDto {
    pub id: i32,
    pub asset_id: Option<i32>,
    pub maintenance_type: String,
    pub description: String,
    pub periodicity: Periodicity,
    pub usage_detail: Option<String>,
    pub next_due_date: NaiveDate,
    pub responsible_party: String,
    pub estimated_cost: Option<f64>,
    pub status: PreventiveStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Record for PreventiveMaintenanceDto {
    fn id(&self) -> i32 {
        self.id
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PreventiveMaintenanceInput {
    #[serde(default)]
    pub asset_id: Option<i32>,
    pub maintenance_type: String,
    pub description: String,
    #[serde(default)]
    pub periodicity: Periodicity,
    #[serde(default)]
    pub usage_detail: Option<String>,
    pub next_due_date: NaiveDate,
    pub responsible_party: String,
    #[serde(default)]
    pub estimated_cost: Option<f64>,
    #[serde(default)]
    pub status: PreventiveStatus,
}

impl PreventiveMaintenanceInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("maintenance_type", &self.maintenance_type)?;
        require("description", &self.description)?;
        require("responsible_party", &self.responsible_party)?;

        if self.periodicity == Periodicity::PerUse && is_blank(self.usage_detail.as_deref()) {
            return Err(ValidationError::MissingUsageDetail);
        }

        optional_non_negative("estimated_cost", self.estimated_cost)?;

        Ok(())
    }

    /// Usage detail only means something for per-use schedules
    pub fn usage_detail(&self) -> Option<String> {
        match self.periodicity {
            Periodicity::PerUse => crate::model::validation::normalize(self.usage_detail.clone()),
            _ => None,
        }
    }
}

impl From<&PreventiveMaintenanceDto> for PreventiveMaintenanceInput {
    fn from(entry: &PreventiveMaintenanceDto) -> Self {
        Self {
            asset_id: entry.asset_id,
            maintenance_type: entry.maintenance_type.clone(),
            description: entry.description.clone(),
            periodicity: entry.periodicity,
            usage_detail: entry.usage_detail.clone(),
            next_due_date: entry.next_due_date,
            responsible_party: entry.responsible_party.clone(),
            estimated_cost: entry.estimated_cost,
            status: entry.status,
        }
    }
}
