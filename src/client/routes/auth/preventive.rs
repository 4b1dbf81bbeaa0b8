use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{
            form::{
                date_value, enum_options, format_currency, format_date, number_value, optional,
                parse_date, parse_decimal, Field, FormActions, FormError, RowActions,
            },
            Page,
        },
        hooks::{use_resource_form, use_resource_list, ResourceForm, ResourceList},
        resource,
    },
    model::preventive::{Periodicity, PreventiveStatus},
};

#[component]
fn ScheduleForm() -> Element {
    let form = use_context::<ResourceForm<resource::PreventiveSchedule>>();
    let schedule = use_context::<ResourceList<resource::PreventiveSchedule>>();
    let assets = use_resource_list::<resource::Assets>();
    let mut input = form.input;

    let asset_options = assets.list.read().items().to_vec();
    let per_use = input.read().periodicity == Periodicity::PerUse;

    rsx!(
        form {
            class: "card bg-base-200 shadow-sm",
            onsubmit: move |e: FormEvent| async move {
                e.prevent_default();
                form.submit(schedule).await;
            },
            div { class: "card-body grid grid-cols-1 md:grid-cols-3 gap-2",
                Field { label: "Tipo de manutenção *",
                    input {
                        class: "input w-full",
                        value: "{input.read().maintenance_type}",
                        oninput: move |e| input.write().maintenance_type = e.value(),
                    }
                }
                Field { label: "Periodicidade",
                    select {
                        class: "select w-full",
                        onchange: move |e| {
                            if let Ok(periodicity) = e.value().parse() {
                                input.write().periodicity = periodicity;
                            }
                        },
                        {enum_options(Periodicity::ALL, input.read().periodicity, Periodicity::as_str, Periodicity::label)}
                    }
                }
                if per_use {
                    Field { label: "Detalhe de uso *",
                        input {
                            class: "input w-full",
                            placeholder: "Ex: a cada 500 horas",
                            value: input.read().usage_detail.clone().unwrap_or_default(),
                            oninput: move |e| input.write().usage_detail = optional(e.value()),
                        }
                    }
                }
                Field { label: "Próxima data *",
                    input {
                        class: "input w-full",
                        r#type: "date",
                        value: date_value(Some(input.read().next_due_date)),
                        oninput: move |e| {
                            if let Some(date) = parse_date(&e.value()) {
                                input.write().next_due_date = date;
                            }
                        },
                    }
                }
                Field { label: "Responsável *",
                    input {
                        class: "input w-full",
                        value: "{input.read().responsible_party}",
                        oninput: move |e| input.write().responsible_party = e.value(),
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
                Field { label: "Status",
                    select {
                        class: "select w-full",
                        onchange: move |e| {
                            if let Ok(status) = e.value().parse() {
                                input.write().status = status;
                            }
                        },
                        {enum_options(PreventiveStatus::ALL, input.read().status, PreventiveStatus::as_str, PreventiveStatus::label)}
                    }
                }
                Field { label: "Ativo",
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
                div { class: "md:col-span-3",
                    Field { label: "Descrição *",
                        textarea {
                            class: "textarea w-full",
                            value: "{input.read().description}",
                            oninput: move |e| input.write().description = e.value(),
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

#[component]
fn ScheduleTable() -> Element {
    let form = use_context::<ResourceForm<resource::PreventiveSchedule>>();
    let schedule = use_context::<ResourceList<resource::PreventiveSchedule>>();
    let list = schedule.list.read();

    if list.is_loading() {
        return rsx!(span { class: "loading loading-spinner" });
    }

    rsx!(
        div { class: "overflow-x-auto",
            table { class: "table table-md",
                thead {
                    tr {
                        th { "Tipo" }
                        th { "Periodicidade" }
                        th { "Próxima data" }
                        th { "Responsável" }
                        th { "Custo estimado" }
                        th { "Status" }
                        th {}
                    }
                }
                tbody {
                    for entry in list.items().iter().cloned() {
                        tr { key: "{entry.id}",
                            td { "{entry.maintenance_type}" }
                            td {
                                {entry.periodicity.label()}
                                if let Some(detail) = entry.usage_detail.clone() {
                                    span { class: "text-xs", " ({detail})" }
                                }
                            }
                            td { {format_date(entry.next_due_date)} }
                            td { "{entry.responsible_party}" }
                            td { {entry.estimated_cost.map(format_currency).unwrap_or_default()} }
                            td { {entry.status.label()} }
                            RowActions {
                                on_edit: {
                                    let entry = entry.clone();
                                    move |_| form.edit(&entry)
                                },
                                on_delete: move |_| async move {
                                    schedule.delete(entry.id).await;
                                },
                            }
                        }
                    }
                }
            }
            if list.is_empty() {
                p { class: "p-4 text-center", "Nenhuma preventiva agendada." }
            }
        }
    )
}

#[component]
pub fn Preventive() -> Element {
    let schedule = use_resource_list::<resource::PreventiveSchedule>();
    let form = use_resource_form::<resource::PreventiveSchedule>();

    use_context_provider(|| schedule);
    use_context_provider(|| form);

    rsx!(
        Title { "Preventivas | Mirtilo" }
        Page { heading: "Manutenção preventiva",
            div { class: "flex flex-col gap-4",
                ScheduleForm {}
                ScheduleTable {}
            }
        }
    )
}
