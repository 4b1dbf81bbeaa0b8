use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{
            form::{
                date_value, enum_options, format_currency, format_date, number_value,
                parse_date, parse_decimal, Field, FormActions, FormError, RowActions,
            },
            Page,
        },
        hooks::{use_resource_form, use_resource_list, ResourceForm, ResourceList},
        resource,
    },
    model::financial::{FinancialSummary, TransactionType},
};

#[component]
fn SummaryCards() -> Element {
    let transactions = use_context::<ResourceList<resource::Transactions>>();
    // Recomputed from the local list on every render
    let summary = FinancialSummary::from_transactions(transactions.list.read().items());

    let balance_class = if summary.balance < 0.0 {
        "stat-value text-error"
    } else {
        "stat-value text-success"
    };

    rsx!(
        div { class: "stats stats-vertical md:stats-horizontal shadow-sm bg-base-200",
            div { class: "stat",
                div { class: "stat-title", "Receitas" }
                div { class: "stat-value text-success", {format_currency(summary.income)} }
            }
            div { class: "stat",
                div { class: "stat-title", "Despesas" }
                div { class: "stat-value text-error", {format_currency(summary.expense)} }
            }
            div { class: "stat",
                div { class: "stat-title", "Saldo" }
                div { class: balance_class, {format_currency(summary.balance)} }
            }
        }
    )
}

#[component]
fn TransactionForm() -> Element {
    let form = use_context::<ResourceForm<resource::Transactions>>();
    let transactions = use_context::<ResourceList<resource::Transactions>>();
    let mut input = form.input;

    let transaction_type = input.read().transaction_type;

    rsx!(
        form {
            class: "card bg-base-200 shadow-sm",
            onsubmit: move |e: FormEvent| async move {
                e.prevent_default();
                form.submit(transactions).await;
            },
            div { class: "card-body grid grid-cols-1 md:grid-cols-3 gap-2",
                Field { label: "Tipo",
                    select {
                        class: "select w-full",
                        onchange: move |e| {
                            if let Ok(kind) = e.value().parse::<TransactionType>() {
                                let mut input = input.write();
                                // Categories belong to one type
                                if input.transaction_type != kind {
                                    input.category.clear();
                                }
                                input.transaction_type = kind;
                            }
                        },
                        {enum_options(TransactionType::ALL, transaction_type, TransactionType::as_str, TransactionType::label)}
                    }
                }
                Field { label: "Categoria *",
                    select {
                        class: "select w-full",
                        onchange: move |e| input.write().category = e.value(),
                        option { value: "", disabled: true, selected: input.read().category.is_empty(), "Selecione" }
                        for category in transaction_type.categories().iter() {
                            option {
                                value: *category,
                                selected: input.read().category == *category,
                                "{category}"
                            }
                        }
                    }
                }
                Field { label: "Valor *",
                    input {
                        class: "input w-full",
                        r#type: "number",
                        step: "0.01",
                        min: "0",
                        value: number_value(Some(input.read().amount).filter(|a| *a != 0.0)),
                        oninput: move |e| input.write().amount = parse_decimal(&e.value()).unwrap_or(0.0),
                    }
                }
                div { class: "md:col-span-2",
                    Field { label: "Descrição *",
                        input {
                            class: "input w-full",
                            value: "{input.read().description}",
                            oninput: move |e| input.write().description = e.value(),
                        }
                    }
                }
                Field { label: "Data",
                    input {
                        class: "input w-full",
                        r#type: "date",
                        value: date_value(Some(input.read().transaction_date)),
                        oninput: move |e| {
                            if let Some(date) = parse_date(&e.value()) {
                                input.write().transaction_date = date;
                            }
                        },
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
fn TransactionTable() -> Element {
    let form = use_context::<ResourceForm<resource::Transactions>>();
    let transactions = use_context::<ResourceList<resource::Transactions>>();
    let list = transactions.list.read();

    if list.is_loading() {
        return rsx!(span { class: "loading loading-spinner" });
    }

    rsx!(
        div { class: "overflow-x-auto",
            table { class: "table table-md",
                thead {
                    tr {
                        th { "Data" }
                        th { "Descrição" }
                        th { "Categoria" }
                        th { "Tipo" }
                        th { class: "text-right", "Valor" }
                        th {}
                    }
                }
                tbody {
                    for transaction in list.items().iter().cloned() {
                        tr { key: "{transaction.id}",
                            td { {format_date(transaction.transaction_date)} }
                            td { "{transaction.description}" }
                            td { "{transaction.category}" }
                            td { {transaction.transaction_type.label()} }
                            td {
                                class: match transaction.transaction_type {
                                    TransactionType::Income => "text-right text-success",
                                    TransactionType::Expense => "text-right text-error",
                                },
                                {format_currency(transaction.amount)}
                            }
                            RowActions {
                                on_edit: {
                                    let transaction = transaction.clone();
                                    move |_| form.edit(&transaction)
                                },
                                on_delete: move |_| async move {
                                    transactions.delete(transaction.id).await;
                                },
                            }
                        }
                    }
                }
            }
            if list.is_empty() {
                p { class: "p-4 text-center", "Nenhuma transação registrada." }
            }
        }
    )
}

#[component]
pub fn Financial() -> Element {
    let transactions = use_resource_list::<resource::Transactions>();
    let form = use_resource_form::<resource::Transactions>();

    use_context_provider(|| transactions);
    use_context_provider(|| form);

    rsx!(
        Title { "Financeiro | Mirtilo" }
        Page { heading: "Financeiro",
            div { class: "flex flex-col gap-4",
                SummaryCards {}
                TransactionForm {}
                TransactionTable {}
            }
        }
    )
}
