use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{
            form::{
                date_value, enum_options, format_currency, format_date, number_value, optional,
                parse_date, parse_decimal, Field, FormActions, FormError, RowActions,
            },
            location::LocationFields,
            Page,
        },
        hooks::{use_resource_form, use_resource_list, ResourceForm, ResourceList},
        resource,
    },
    model::{
        location::LocationKind,
        maintenance::{MaintenancePriority, MaintenanceStatus, REQUEST_CATEGORIES},
    },
};

#[component]
fn RequestForm() -> Element {
    let form = use_context::<ResourceForm<resource::MaintenanceRequests>>();
    let requests = use_context::<ResourceList<resource::MaintenanceRequests>>();
    // Own fetch; the asset link is only a soft reference
    let assets = use_resource_list::<resource::Assets>();
    let mut input = form.input;

    let location_kind = input.read().location_kind.unwrap_or(LocationKind::Other);
    let asset_options = assets.list.read().items().to_vec();

    rsx!(
        form {
            class: "card bg-base-200 shadow-sm",
            onsubmit: move |e: FormEvent| async move {
                e.prevent_default();
                form.submit(requests).await;
            },
            div { class: "card-body grid grid-cols-1 md:grid-cols-3 gap-2",
                div { class: "md:col-span-2",
                    Field { label: "Título *",
                        input {
                            class: "input w-full",
                            value: "{input.read().title}",
                            oninput: move |e| input.write().title = e.value(),
                        }
                    }
                }
                Field { label: "Categoria *",
                    select {
                        class: "select w-full",
                        onchange: move |e| input.write().category = e.value(),
                        option { value: "", disabled: true, selected: input.read().category.is_empty(), "Selecione" }
                        for category in REQUEST_CATEGORIES.iter() {
                            option {
                                value: *category,
                                selected: input.read().category == *category,
                                "{category}"
                            }
                        }
                    }
                }
                Field { label: "Prioridade",
                    select {
                        class: "select w-full",
                        onchange: move |e| {
                            if let Ok(priority) = e.value().parse() {
                                input.write().priority = priority;
                            }
                        },
                        {enum_options(MaintenancePriority::ALL, input.read().priority, MaintenancePriority::as_str, MaintenancePriority::label)}
                    }
                }
                Field { label: "Status",
                    select {
                        class: "select w-full",
                        onchange: move |e| {
                            if let Ok(status) = e.value().parse() {
                                input.write().status = status;
                            }
                        },
                        {enum_options(MaintenanceStatus::ALL, input.read().status, MaintenanceStatus::as_str, MaintenanceStatus::label)}
                    }
                }
                Field { label: "Ativo relacionado",
                    select {
                        class: "select w-full",
                        onchange: move |e| input.write().asset_id = e.value().parse().ok(),
                        option { value: "", selected: input.read().asset_id.is_none(), "Nenhum" }
                        for asset in asset_options {
                            option {
                                value: "{asset.id}",
                                selected: input.read().asset_id == Some(asset.id),
                                "{asset.name}"
                            }
                        }
                    }
                }
                LocationFields {
                    kind: location_kind,
                    unit_number: input.read().unit_number.clone(),
                    location_detail: input.read().location_detail.clone(),
                    on_kind: move |kind| input.write().location_kind = Some(kind),
                    on_unit_number: move |value| input.write().unit_number = value,
                    on_location_detail: move |value| input.write().location_detail = value,
                }
                Field { label: "Data da solicitação",
                    input {
                        class: "input w-full",
                        r#type: "date",
                        value: date_value(Some(input.read().requested_date)),
                        oninput: move |e| {
                            if let Some(date) = parse_date(&e.value()) {
                                input.write().requested_date = date;
                            }
                        },
                    }
                }
                Field { label: "Data agendada",
                    input {
                        class: "input w-full",
                        r#type: "date",
                        value: date_value(input.read().scheduled_date),
                        oninput: move |e| input.write().scheduled_date = parse_date(&e.value()),
                    }
                }
                Field { label: "Data de conclusão",
                    input {
                        class: "input w-full",
                        r#type: "date",
                        value: date_value(input.read().completed_date),
                        oninput: move |e| input.write().completed_date = parse_date(&e.value()),
                    }
                }
                Field { label: "Custo estimado",
                    input {
                        class: "input w-full",
                        r#type: "number",
                        step: "0.01",
                        value: number_value(input.read().estimated_cost),
                        oninput: move |e| input.write().estimated_cost = parse_decimal(&e.value()),
                    }
                }
                Field { label: "Custo real",
                    input {
                        class: "input w-full",
                        r#type: "number",
                        step: "0.01",
                        value: number_value(input.read().actual_cost),
                        oninput: move |e| input.write().actual_cost = parse_decimal(&e.value()),
                    }
                }
                Field { label: "Responsável",
                    input {
                        class: "input w-full",
                        value: input.read().assigned_to.clone().unwrap_or_default(),
                        oninput: move |e| input.write().assigned_to = optional(e.value()),
                    }
                }
                Field { label: "Solicitante",
                    input {
                        class: "input w-full",
                        value: input.read().requester_name.clone().unwrap_or_default(),
                        oninput: move |e| input.write().requester_name = optional(e.value()),
                    }
                }
                Field { label: "Unidade do solicitante",
                    input {
                        class: "input w-full",
                        value: input.read().requester_unit.clone().unwrap_or_default(),
                        oninput: move |e| input.write().requester_unit = optional(e.value()),
                    }
                }
                div { class: "md:col-span-3",
                    Field { label: "Descrição *",
                        textarea {
                            class: "textarea w-full",
                            value: "{input.read().description}",
                            oninput: move |e| input.write().description = e.value(),
                        }
                    }
                }
                div { class: "md:col-span-3",
                    Field { label: "Observações",
                        textarea {
                            class: "textarea w-full",
                            value: input.read().notes.clone().unwrap_or_default(),
                            oninput: move |e| input.write().notes = optional(e.value()),
                        }
                    }
                }
                div { class: "md:col-span-3 flex flex-col gap-2",
                    FormError { error: form.error.read().clone() }
                    FormActions {
                        editing: form.is_editing(),
                        submitting: *form.submitting.read(),
                        on_cancel: move |_| form.reset(),
                    }
                }
            }
        }
    )
}

fn priority_badge(priority: MaintenancePriority) -> &'static str {
    match priority {
        MaintenancePriority::Low => "badge badge-ghost",
        MaintenancePriority::Medium => "badge badge-info",
        MaintenancePriority::High => "badge badge-warning",
        MaintenancePriority::Urgent => "badge badge-error",
    }
}

#[component]
fn RequestTable() -> Element {
    let form = use_context::<ResourceForm<resource::MaintenanceRequests>>();
    let requests = use_context::<ResourceList<resource::MaintenanceRequests>>();
    let list = requests.list.read();

    if list.is_loading() {
        return rsx!(span { class: "loading loading-spinner" });
    }

    rsx!(
        div { class: "overflow-x-auto",
            table { class: "table table-md",
                thead {
                    tr {
                        th { "Título" }
                        th { "Categoria" }
                        th { "Local" }
                        th { "Prioridade" }
                        th { "Status" }
                        th { "Solicitado em" }
                        th { "Custo estimado" }
                        th {}
                    }
                }
                tbody {
                    for request in list.items().iter().cloned() {
                        tr { key: "{request.id}",
                            td { "{request.title}" }
                            td { "{request.category}" }
                            td {
                                {request.location_kind.map(|kind| kind.label()).unwrap_or_default()}
                                " "
                                {request.location.clone().unwrap_or_default()}
                            }
                            td {
                                span { class: priority_badge(request.priority), {request.priority.label()} }
                            }
                            td { {request.status.label()} }
                            td { {format_date(request.requested_date)} }
                            td { {request.estimated_cost.map(format_currency).unwrap_or_default()} }
                            RowActions {
                                on_edit: {
                                    let request = request.clone();
                                    move |_| form.edit(&request)
                                },
                                on_delete: move |_| async move {
                                    requests.delete(request.id).await;
                                },
                            }
                        }
                    }
                }
            }
            if list.is_empty() {
                p { class: "p-4 text-center", "Nenhum chamado aberto." }
            }
        }
    )
}

#[component]
pub fn Maintenance() -> Element {
    let requests = use_resource_list::<resource::MaintenanceRequests>();
    let form = use_resource_form::<resource::MaintenanceRequests>();

    use_context_provider(|| requests);
    use_context_provider(|| form);

    rsx!(
        Title { "Chamados | Mirtilo" }
        Page { heading: "Chamados de manutenção",
            div { class: "flex flex-col gap-4",
                RequestForm {}
                RequestTable {}
            }
        }
    )
}
