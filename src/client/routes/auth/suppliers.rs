use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{
            form::{optional, Field, FormActions, FormError, OptionalText, RowActions},
            Page,
        },
        hooks::{use_resource_form, use_resource_list, ResourceForm, ResourceList},
        resource,
    },
    model::supplier::{
        format_phone, format_postal_code, format_tax_id, join_services, split_services,
        AccountType, PersonType, SupplierDto,
    },
};

#[component]
fn SupplierForm() -> Element {
    let form = use_context::<ResourceForm<resource::Suppliers>>();
    let suppliers = use_context::<ResourceList<resource::Suppliers>>();
    let mut input = form.input;

    // Raw text keeps trailing commas while typing
    let mut services_text = use_signal(String::new);
    use_effect(move || {
        let services = input.read().services.clone();
        if split_services(&*services_text.peek()) != services {
            services_text.set(join_services(&services));
        }
    });

    let person_type = input.read().person_type;
    let account_type = input.read().account_type;

    rsx!(
        form {
            class: "card bg-base-200 shadow-sm",
            onsubmit: move |e: FormEvent| async move {
                e.prevent_default();
                form.submit(suppliers).await;
            },
            div { class: "card-body grid grid-cols-1 md:grid-cols-3 gap-2",
                h3 { class: "md:col-span-3 font-semibold", "Identificação" }
                Field { label: "Nome / Razão social *",
                    input {
                        class: "input w-full",
                        value: "{input.read().name}",
                        oninput: move |e| input.write().name = e.value(),
                    }
                }
                OptionalText {
                    label: "Nome fantasia",
                    value: input.read().trade_name.clone(),
                    on_input: move |v| input.write().trade_name = v,
                }
                Field { label: "Tipo de pessoa",
                    select {
                        class: "select w-full",
                        onchange: move |e| input.write().person_type = e.value().parse().ok(),
                        option { value: "", selected: person_type.is_none(), "Não informado" }
                        for kind in PersonType::ALL.iter() {
                            option {
                                value: kind.as_str(),
                                selected: person_type == Some(*kind),
                                {kind.label()}
                            }
                        }
                    }
                }
                OptionalText {
                    label: "CPF / CNPJ",
                    value: input.read().tax_id.clone(),
                    on_input: move |v| input.write().tax_id = v,
                }
                Field { label: "Categoria *",
                    input {
                        class: "input w-full",
                        value: "{input.read().category}",
                        oninput: move |e| input.write().category = e.value(),
                    }
                }
                Field { label: "Serviços (separados por vírgula)",
                    input {
                        class: "input w-full",
                        placeholder: "Ex: Elétrica, Hidráulica",
                        value: "{services_text}",
                        oninput: move |e| {
                            let raw = e.value();
                            input.write().services = split_services(&raw);
                            services_text.set(raw);
                        },
                    }
                }

                h3 { class: "md:col-span-3 font-semibold", "Contato" }
                OptionalText {
                    label: "E-mail",
                    value: input.read().email.clone(),
                    on_input: move |v| input.write().email = v,
                }
                OptionalText {
                    label: "Telefone fixo",
                    value: input.read().landline.clone(),
                    on_input: move |v| input.write().landline = v,
                }
                OptionalText {
                    label: "Celular",
                    value: input.read().mobile.clone(),
                    on_input: move |v| input.write().mobile = v,
                }

                h3 { class: "md:col-span-3 font-semibold", "Endereço" }
                OptionalText {
                    label: "CEP",
                    value: input.read().postal_code.clone(),
                    on_input: move |v| input.write().postal_code = v,
                }
                OptionalText {
                    label: "Logradouro",
                    value: input.read().street.clone(),
                    on_input: move |v| input.write().street = v,
                }
                OptionalText {
                    label: "Número",
                    value: input.read().number.clone(),
                    on_input: move |v| input.write().number = v,
                }
                OptionalText {
                    label: "Complemento",
                    value: input.read().complement.clone(),
                    on_input: move |v| input.write().complement = v,
                }
                OptionalText {
                    label: "Bairro",
                    value: input.read().district.clone(),
                    on_input: move |v| input.write().district = v,
                }
                OptionalText {
                    label: "Cidade",
                    value: input.read().city.clone(),
                    on_input: move |v| input.write().city = v,
                }
                OptionalText {
                    label: "UF",
                    value: input.read().state.clone(),
                    on_input: move |v| input.write().state = v,
                }

                h3 { class: "md:col-span-3 font-semibold", "Dados bancários" }
                OptionalText {
                    label: "Banco",
                    value: input.read().bank.clone(),
                    on_input: move |v| input.write().bank = v,
                }
                OptionalText {
                    label: "Agência",
                    value: input.read().bank_branch.clone(),
                    on_input: move |v| input.write().bank_branch = v,
                }
                OptionalText {
                    label: "Conta",
                    value: input.read().bank_account.clone(),
                    on_input: move |v| input.write().bank_account = v,
                }
                Field { label: "Tipo de conta",
                    select {
                        class: "select w-full",
                        onchange: move |e| input.write().account_type = e.value().parse().ok(),
                        option { value: "", selected: account_type.is_none(), "Não informado" }
                        for kind in AccountType::ALL.iter() {
                            option {
                                value: kind.as_str(),
                                selected: account_type == Some(*kind),
                                {kind.label()}
                            }
                        }
                    }
                }
                label { class: "label cursor-pointer gap-2",
                    input {
                        r#type: "checkbox",
                        class: "checkbox",
                        checked: input.read().is_active,
                        onchange: move |e| input.write().is_active = e.checked(),
                    }
                    span { "Ativo" }
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

fn phone_of(supplier: &SupplierDto) -> String {
    supplier
        .mobile
        .as_deref()
        .or(supplier.landline.as_deref())
        .map(format_phone)
        .unwrap_or_default()
}

#[component]
fn SupplierTable() -> Element {
    let form = use_context::<ResourceForm<resource::Suppliers>>();
    let suppliers = use_context::<ResourceList<resource::Suppliers>>();
    let list = suppliers.list.read();

    if list.is_loading() {
        return rsx!(span { class: "loading loading-spinner" });
    }

    rsx!(
        div { class: "overflow-x-auto",
            table { class: "table table-md",
                thead {
                    tr {
                        th { "Nome" }
                        th { "CPF / CNPJ" }
                        th { "Categoria" }
                        th { "Serviços" }
                        th { "Telefone" }
                        th { "CEP" }
                        th { "Situação" }
                        th {}
                    }
                }
                tbody {
                    for supplier in list.items().iter().cloned() {
                        tr { key: "{supplier.id}",
                            td {
                                div { "{supplier.name}" }
                                if let Some(trade_name) = supplier.trade_name.clone() {
                                    div { class: "text-xs", "{trade_name}" }
                                }
                            }
                            td { {supplier.tax_id.as_deref().map(format_tax_id).unwrap_or_default()} }
                            td { "{supplier.category}" }
                            td {
                                div { class: "flex flex-wrap gap-1",
                                    for service in supplier.services.iter() {
                                        span { class: "badge badge-outline", "{service}" }
                                    }
                                }
                            }
                            td { {phone_of(&supplier)} }
                            td { {supplier.postal_code.as_deref().map(format_postal_code).unwrap_or_default()} }
                            td {
                                if supplier.is_active {
                                    span { class: "badge badge-success", "Ativo" }
                                } else {
                                    span { class: "badge badge-ghost", "Inativo" }
                                }
                            }
                            RowActions {
                                on_edit: {
                                    let supplier = supplier.clone();
                                    move |_| form.edit(&supplier)
                                },
                                on_delete: move |_| async move {
                                    suppliers.delete(supplier.id).await;
                                },
                            }
                        }
                    }
                }
            }
            if list.is_empty() {
                p { class: "p-4 text-center", "Nenhum fornecedor cadastrado." }
            }
        }
    )
}

#[component]
pub fn Suppliers() -> Element {
    let suppliers = use_resource_list::<resource::Suppliers>();
    let form = use_resource_form::<resource::Suppliers>();

    use_context_provider(|| suppliers);
    use_context_provider(|| form);

    rsx!(
        Title { "Fornecedores | Mirtilo" }
        Page { heading: "Fornecedores",
            div { class: "flex flex-col gap-4",
                SupplierForm {}
                SupplierTable {}
            }
        }
    )
}
