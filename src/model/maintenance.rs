use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::model::{
    location::{resolve_location, validate_location, LocationKind},
    record_list::{Messages, Record},
    validation::{optional_non_negative, require, ValidationError},
};

text_enum! {
    #[derive(Default)]
    MaintenancePriority, "priority" {
        Low => ("low", "Baixa"),
        #[default]
        Medium => ("medium", "Média"),
        High => ("high", "Alta"),
        Urgent => ("urgent", "Urgente"),
    }
}

text_enum! {
    #[derive(Default)]
    MaintenanceStatus, "status" {
        #[default]
        Open => ("open", "Aberto"),
        InProgress => ("in_progress", "Em andamento"),
        Completed => ("completed", "Concluído"),
        Cancelled => ("cancelled", "Cancelado"),
    }
}

/// Ticket categories offered by the request form; the column itself is free text
pub const REQUEST_CATEGORIES: &[&str] = &[
    "Manutenção Predial",
    "Problema com Áreas Comuns",
    "Reclamação de Vizinhança",
    "Segurança",
    "Financeiro",
    "Outro",
];

pub const MAINTENANCE_MESSAGES: Messages = Messages {
    created: "Chamado aberto com sucesso!",
    updated: "Chamado atualizado com sucesso!",
    deleted: "Chamado removido com sucesso!",
    fetch_failed: "Erro ao carregar chamados",
    create_failed: "Erro ao abrir chamado",
    update_failed: "Erro ao atualizar chamado",
    delete_failed: "Erro ao remover chamado",
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct MaintenanceRequestDto {
    pub id: i32,
    pub asset_id: Option<i32>,
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: MaintenancePriority,
    pub status: MaintenanceStatus,
    pub location_kind: Option<LocationKind>,
    pub location: Option<String>,
    pub requested_date: NaiveDate,
    pub scheduled_date: Option<NaiveDate>,
    pub completed_date: Option<NaiveDate>,
    pub estimated_cost: Option<f64>,
    pub actual_cost: Option<f64>,
    pub assigned_to: Option<String>,
    pub requester_name: Option<String>,
    pub requester_unit: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Record for MaintenanceRequestDto {
    fn id(&self) -> i32 {
        self.id
    }
}

/// Body of maintenance request create and update requests.
///
/// When `location_kind` is set, `unit_number` and `location_detail` follow the location rule
/// and the stored `location` is resolved from them. Without a kind, `location_detail` is kept
/// as free text.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct MaintenanceRequestInput {
    #[serde(default)]
    pub asset_id: Option<i32>,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub priority: MaintenancePriority,
    #[serde(default)]
    pub status: MaintenanceStatus,
    #[serde(default)]
    pub location_kind: Option<LocationKind>,
    #[serde(default)]
    pub unit_number: Option<String>,
    #[serde(default)]
    pub location_detail: Option<String>,
    pub requested_date: NaiveDate,
    #[serde(default)]
    pub scheduled_date: Option<NaiveDate>,
    #[serde(default)]
    pub completed_date: Option<NaiveDate>,
    #[serde(default)]
    pub estimated_cost: Option<f64>,
    #[serde(default)]
    pub actual_cost: Option<f64>,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub requester_name: Option<String>,
    #[serde(default)]
    pub requester_unit: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl MaintenanceRequestInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title)?;
        require("description", &self.description)?;
        require("category", &self.category)?;

        if let Some(kind) = self.location_kind {
            validate_location(
                kind,
                self.unit_number.as_deref(),
                self.location_detail.as_deref(),
            )?;
        }

        optional_non_negative("estimated_cost", self.estimated_cost)?;
        optional_non_negative("actual_cost", self.actual_cost)?;

        Ok(())
    }

    /// Location text persisted alongside the kind
    pub fn location(&self) -> Option<String> {
        match self.location_kind {
            Some(kind) => resolve_location(
                kind,
                self.unit_number.as_deref(),
                self.location_detail.as_deref(),
            ),
            None => crate::model::validation::normalize(self.location_detail.clone()),
        }
    }
}

impl From<&MaintenanceRequestDto> for MaintenanceRequestInput {
    fn from(request: &MaintenanceRequestDto) -> Self {
        let is_apartment = request.location_kind == Some(LocationKind::Apartment);

        Self {
            asset_id: request.asset_id,
            title: request.title.clone(),
            description: request.description.clone(),
            category: request.category.clone(),
            priority: request.priority,
            status: request.status,
            location_kind: request.location_kind,
            unit_number: request.location.clone().filter(|_| is_apartment),
            location_detail: request.location.clone().filter(|_| !is_apartment),
            requested_date: request.requested_date,
            scheduled_date: request.scheduled_date,
            completed_date: request.completed_date,
            estimated_cost: request.estimated_cost,
            actual_cost: request.actual_cost,
            assigned_to: request.assigned_to.clone(),
            requester_name: request.requester_name.clone(),
            requester_unit: request.requester_unit.clone(),
            notes: request.notes.clone(),
        }
    }
}
