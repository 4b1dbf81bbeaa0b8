use dioxus::prelude::*;

use crate::{
    client::components::form::{enum_options, optional, Field},
    model::location::LocationKind,
};

/// Location kind picker that reveals the unit or detail input the kind requires
#[component]
pub fn LocationFields(
    kind: LocationKind,
    unit_number: Option<String>,
    location_detail: Option<String>,
    on_kind: EventHandler<LocationKind>,
    on_unit_number: EventHandler<Option<String>>,
    on_location_detail: EventHandler<Option<String>>,
) -> Element {
    rsx!(
        Field { label: "Local *",
            select {
                class: "select w-full",
                onchange: move |e| {
                    if let Ok(kind) = e.value().parse() {
                        on_kind.call(kind);
                    }
                },
                {enum_options(LocationKind::ALL, kind, LocationKind::as_str, LocationKind::label)}
            }
        }
        if kind.requires_unit_number() {
            Field { label: "Número do apartamento *",
                input {
                    class: "input w-full",
                    placeholder: "Ex: 101",
                    value: unit_number.unwrap_or_default(),
                    oninput: move |e| on_unit_number.call(optional(e.value())),
                }
            }
        }
        if kind.requires_detail() {
            Field { label: "Especifique o local *",
                input {
                    class: "input w-full",
                    placeholder: "Ex: Salão de festas",
                    value: location_detail.unwrap_or_default(),
                    oninput: move |e| on_location_detail.call(optional(e.value())),
                }
            }
        }
    )
}
