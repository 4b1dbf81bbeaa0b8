use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{
            form::{
                date_value, enum_options, format_currency, number_value, optional, parse_date,
                parse_decimal, parse_integer, Field, FormActions, FormError, RowActions,
            },
            Page,
        },
        hooks::{use_resource_form, use_resource_list, ResourceForm, ResourceList},
        resource,
    },
    model::asset::AssetCondition,
};

#[component]
fn AssetForm() -> Element {
    let form = use_context::<ResourceForm<resource::Assets>>();
    let assets = use_context::<ResourceList<resource::Assets>>();
    let mut input = form.input;

    rsx!(
        form {
            class: "card bg-base-200 shadow-sm",
            onsubmit: move |e: FormEvent| async move {
                e.prevent_default();
                form.submit(assets).await;
            },
            div { class: "card-body grid grid-cols-1 md:grid-cols-3 gap-2",
                Field { label: "Nome *",
                    input {
                        class: "input w-full",
                        value: "{input.read().name}",
                        oninput: move |e| input.write().name = e.value(),
                    }
                }
                Field { label: "Categoria *",
                    input {
                        class: "input w-full",
                        value: "{input.read().category}",
                        oninput: move |e| input.write().category = e.value(),
                    }
                }
                Field { label: "Localização",
                    input {
                        class: "input w-full",
                        value: input.read().location.clone().unwrap_or_default(),
                        oninput: move |e| input.write().location = optional(e.value()),
                    }
                }
                Field { label: "Estado",
                    select {
                        class: "select w-full",
                        onchange: move |e| {
                            if let Ok(condition) = e.value().parse() {
                                input.write().condition = condition;
                            }
                        },
                        {enum_options(AssetCondition::ALL, input.read().condition, AssetCondition::as_str, AssetCondition::label)}
                    }
                }
                Field { label: "Data de aquisição",
                    input {
                        class: "input w-full",
                        r#type: "date",
                        value: date_value(input.read().acquisition_date),
                        oninput: move |e| input.write().acquisition_date = parse_date(&e.value()),
                    }
                }
                Field { label: "Valor de aquisição",
                    input {
                        class: "input w-full",
                        r#type: "number",
                        step: "0.01",
                        value: number_value(input.read().acquisition_value),
                        oninput: move |e| input.write().acquisition_value = parse_decimal(&e.value()),
                    }
                }
                Field { label: "Valor atual",
                    input {
                        class: "input w-full",
                        r#type: "number",
                        step: "0.01",
                        value: number_value(input.read().current_value),
                        oninput: move |e| input.write().current_value = parse_decimal(&e.value()),
                    }
                }
                Field { label: "Fabricante",
                    input {
                        class: "input w-full",
                        value: input.read().manufacturer.clone().unwrap_or_default(),
                        oninput: move |e| input.write().manufacturer = optional(e.value()),
                    }
                }
                Field { label: "Modelo",
                    input {
                        class: "input w-full",
                        value: input.read().model.clone().unwrap_or_default(),
                        oninput: move |e| input.write().model = optional(e.value()),
                    }
                }
                Field { label: "Número de série",
                    input {
                        class: "input w-full",
                        value: input.read().serial_number.clone().unwrap_or_default(),
                        oninput: move |e| input.write().serial_number = optional(e.value()),
                    }
                }
                Field { label: "Garantia até",
                    input {
                        class: "input w-full",
                        r#type: "date",
                        value: date_value(input.read().warranty_expiry),
                        oninput: move |e| input.write().warranty_expiry = parse_date(&e.value()),
                    }
                }
                Field { label: "Vida útil (anos)",
                    input {
                        class: "input w-full",
                        r#type: "number",
                        value: number_value(input.read().useful_life_years),
                        oninput: move |e| input.write().useful_life_years = parse_integer(&e.value()),
                    }
                }
                div { class: "md:col-span-3",
                    Field { label: "Descrição",
                        textarea {
                            class: "textarea w-full",
                            value: input.read().description.clone().unwrap_or_default(),
                            oninput: move |e| input.write().description = optional(e.value()),
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
fn AssetTable() -> Element {
    let form = use_context::<ResourceForm<resource::Assets>>();
    let assets = use_context::<ResourceList<resource::Assets>>();
    let list = assets.list.read();

    if list.is_loading() {
        return rsx!(span { class: "loading loading-spinner" });
    }

    rsx!(
        div { class: "overflow-x-auto",
            table { class: "table table-md",
                thead {
                    tr {
                        th { "Nome" }
                        th { "Categoria" }
                        th { "Localização" }
                        th { "Estado" }
                        th { "Valor atual" }
                        th {}
                    }
                }
                tbody {
                    for asset in list.items().iter().cloned() {
                        tr { key: "{asset.id}",
                            td { "{asset.name}" }
                            td { "{asset.category}" }
                            td { {asset.location.clone().unwrap_or_default()} }
                            td { {asset.condition.label()} }
                            td { {asset.current_value.map(format_currency).unwrap_or_default()} }
                            RowActions {
                                on_edit: {
                                    let asset = asset.clone();
                                    move |_| form.edit(&asset)
                                },
                                on_delete: move |_| async move {
                                    assets.delete(asset.id).await;
                                },
                            }
                        }
                    }
                }
            }
            if list.is_empty() {
                p { class: "p-4 text-center", "Nenhum ativo cadastrado." }
            }
        }
    )
}

#[component]
pub fn Assets() -> Element {
    let assets = use_resource_list::<resource::Assets>();
    let form = use_resource_form::<resource::Assets>();

    use_context_provider(|| assets);
    use_context_provider(|| form);

    rsx!(
        Title { "Ativos | Mirtilo" }
        Page { heading: "Ativos",
            div { class: "flex flex-col gap-4",
                AssetForm {}
                AssetTable {}
            }
        }
    )
}
