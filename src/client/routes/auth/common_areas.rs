use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{
    components::{
        form::{
            format_currency, number_value, optional, parse_decimal, parse_integer, Field,
            FormActions, FormError, OptionalText,
        },
        Page,
    },
    hooks::{use_resource_form, use_resource_list, ResourceForm, ResourceList},
    resource,
};

#[component]
fn AreaForm() -> Element {
    let form = use_context::<ResourceForm<resource::CommonAreas>>();
    let areas = use_context::<ResourceList<resource::CommonAreas>>();
    let mut input = form.input;

    rsx!(
        form {
            class: "card bg-base-200 shadow-sm",
            onsubmit: move |e: FormEvent| async move {
                e.prevent_default();
                form.submit(areas).await;
            },
            div { class: "card-body grid grid-cols-1 md:grid-cols-3 gap-2",
                Field { label: "Nome *",
                    input {
                        class: "input w-full",
                        value: "{input.read().name}",
                        oninput: move |e| input.write().name = e.value(),
                    }
                }
                Field { label: "Capacidade",
                    input {
                        class: "input w-full",
                        r#type: "number",
                        value: number_value(input.read().capacity),
                        oninput: move |e| input.write().capacity = parse_integer(&e.value()),
                    }
                }
                Field { label: "Valor por hora",
                    input {
                        class: "input w-full",
                        r#type: "number",
                        step: "0.01",
                        value: number_value(input.read().hourly_rate),
                        oninput: move |e| input.write().hourly_rate = parse_decimal(&e.value()),
                    }
                }
                Field { label: "Valor por dia",
                    input {
                        class: "input w-full",
                        r#type: "number",
                        step: "0.01",
                        value: number_value(input.read().daily_rate),
                        oninput: move |e| input.write().daily_rate = parse_decimal(&e.value()),
                    }
                }
                Field { label: "Antecedência máxima (dias)",
                    input {
                        class: "input w-full",
                        r#type: "number",
                        value: number_value(input.read().advance_booking_days),
                        oninput: move |e| input.write().advance_booking_days = parse_integer(&e.value()),
                    }
                }
                Field { label: "Duração máxima (horas)",
                    input {
                        class: "input w-full",
                        r#type: "number",
                        value: number_value(input.read().max_booking_duration_hours),
                        oninput: move |e| input.write().max_booking_duration_hours = parse_integer(&e.value()),
                    }
                }
                OptionalText {
                    label: "Descrição",
                    value: input.read().description.clone(),
                    on_input: move |v| input.write().description = v,
                }
                label { class: "label cursor-pointer gap-2",
                    input {
                        r#type: "checkbox",
                        class: "checkbox",
                        checked: input.read().is_active,
                        onchange: move |e| input.write().is_active = e.checked(),
                    }
                    span { "Disponível para reservas" }
                }
                label { class: "label cursor-pointer gap-2",
                    input {
                        r#type: "checkbox",
                        class: "checkbox",
                        checked: input.read().requires_approval,
                        onchange: move |e| input.write().requires_approval = e.checked(),
                    }
                    span { "Exige aprovação" }
                }
                div { class: "md:col-span-3",
                    Field { label: "Regras de uso",
                        textarea {
                            class: "textarea w-full",
                            value: input.read().rules.clone().unwrap_or_default(),
                            oninput: move |e| input.write().rules = optional(e.value()),
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
fn AreaTable() -> Element {
    let form = use_context::<ResourceForm<resource::CommonAreas>>();
    let areas = use_context::<ResourceList<resource::CommonAreas>>();
    let list = areas.list.read();

    if list.is_loading() {
        return rsx!(span { class: "loading loading-spinner" });
    }

    rsx!(
        div { class: "overflow-x-auto",
            table { class: "table table-md",
                thead {
                    tr {
                        th { "Nome" }
                        th { "Capacidade" }
                        th { "Valor/hora" }
                        th { "Duração máxima" }
                        th { "Aprovação" }
                        th {}
                    }
                }
                tbody {
                    for area in list.items().iter().cloned() {
                        tr { key: "{area.id}",
                            td {
                                "{area.name}"
                                if !area.is_active {
                                    span { class: "badge badge-ghost ml-2", "Inativa" }
                                }
                            }
                            td { {number_value(area.capacity)} }
                            td { {area.hourly_rate.map(format_currency).unwrap_or_default()} }
                            td { {area.max_booking_duration_hours.map(|h| format!("{} h", h)).unwrap_or_default()} }
                            td { if area.requires_approval { "Sim" } else { "Não" } }
                            td {
                                button {
                                    class: "btn btn-xs btn-outline",
                                    onclick: {
                                        let area = area.clone();
                                        move |_| form.edit(&area)
                                    },
                                    "Editar"
                                }
                            }
                        }
                    }
                }
            }
            if list.is_empty() {
                p { class: "p-4 text-center", "Nenhuma área comum disponível." }
            }
        }
    )
}

/// Common areas are shared by every resident and cannot be deleted, only deactivated.
/// Owners keep seeing their inactive areas so they can reactivate them.
#[component]
pub fn CommonAreas() -> Element {
    let areas = use_resource_list::<resource::CommonAreas>();
    let form = use_resource_form::<resource::CommonAreas>();

    use_context_provider(|| areas);
    use_context_provider(|| form);

    rsx!(
        Title { "Áreas comuns | Mirtilo" }
        Page { heading: "Áreas comuns",
            div { class: "flex flex-col gap-4",
                AreaForm {}
                AreaTable {}
            }
        }
    )
}
