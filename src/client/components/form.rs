//! Field wrappers and the conversions between input text and typed form values.

use chrono::{NaiveDate, NaiveDateTime};
use dioxus::prelude::*;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Labelled field; the input itself is passed as children
#[component]
pub fn Field(label: &'static str, children: Element) -> Element {
    rsx!(
        label { class: "form-control w-full",
            div { class: "label",
                span { class: "label-text", "{label}" }
            }
            {children}
        }
    )
}

/// Free-text input for an optional column; blank clears it
#[component]
pub fn OptionalText(
    label: &'static str,
    value: Option<String>,
    placeholder: Option<&'static str>,
    on_input: EventHandler<Option<String>>,
) -> Element {
    rsx!(
        Field { label: label,
            input {
                class: "input w-full",
                placeholder: placeholder.unwrap_or(""),
                value: value.unwrap_or_default(),
                oninput: move |e| on_input.call(optional(e.value())),
            }
        }
    )
}

/// Validation message above the form buttons
#[component]
pub fn FormError(error: Option<String>) -> Element {
    rsx!(
        if let Some(error) = error {
            div { class: "alert alert-error", "{error}" }
        }
    )
}

/// Submit and cancel buttons shared by every form
#[component]
pub fn FormActions(editing: bool, submitting: bool, on_cancel: EventHandler<()>) -> Element {
    rsx!(
        div { class: "flex gap-2 justify-end",
            if editing {
                button {
                    r#type: "button",
                    class: "btn btn-ghost",
                    onclick: move |_| on_cancel.call(()),
                    "Cancelar"
                }
            }
            button {
                r#type: "submit",
                class: "btn btn-primary",
                disabled: submitting,
                if submitting {
                    span { class: "loading loading-spinner" }
                }
                if editing { "Salvar" } else { "Cadastrar" }
            }
        }
    )
}

/// Edit and delete buttons at the end of a table row
#[component]
pub fn RowActions(on_edit: EventHandler<()>, on_delete: EventHandler<()>) -> Element {
    rsx!(
        td { class: "flex gap-1 justify-end",
            button {
                class: "btn btn-xs btn-outline",
                onclick: move |_| on_edit.call(()),
                "Editar"
            }
            button {
                class: "btn btn-xs btn-error btn-outline",
                onclick: move |_| on_delete.call(()),
                "Excluir"
            }
        }
    )
}

/// `<option>` list for one of the text enums
pub fn enum_options<T: Copy + PartialEq + 'static>(
    all: &'static [T],
    selected: T,
    value: fn(&T) -> &'static str,
    label: fn(&T) -> &'static str,
) -> Element {
    rsx!(
        for item in all.iter() {
            option {
                value: value(item),
                selected: *item == selected,
                {label(item)}
            }
        }
    )
}

/// Blank input clears an optional field
pub fn optional(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Accepts both `1234.5` and `1234,5`
pub fn parse_decimal(value: &str) -> Option<f64> {
    value.trim().replace(',', ".").parse().ok()
}

pub fn parse_integer(value: &str) -> Option<i32> {
    value.trim().parse().ok()
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Parses the value of a `datetime-local` input
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, DATETIME_FORMAT).ok()
}

pub fn date_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

pub fn datetime_value(datetime: NaiveDateTime) -> String {
    datetime.format(DATETIME_FORMAT).to_string()
}

pub fn number_value<N: ToString>(number: Option<N>) -> String {
    number.map(|n| n.to_string()).unwrap_or_default()
}

/// Brazilian currency, e.g. `R$ 1.234,50`
pub fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let cents = (value.abs() * 100.0).round() as u64;
    let digits = (cents / 100).to_string();

    let mut integer = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            integer.push('.');
        }
        integer.push(c);
    }

    format!("{}R$ {},{:02}", sign, integer, cents % 100)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

pub fn format_datetime(datetime: NaiveDateTime) -> String {
    datetime.format("%d/%m/%Y %H:%M").to_string()
}
