use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{
            form::{
                datetime_value, enum_options, format_currency, format_datetime, number_value,
                optional, parse_datetime, parse_integer, Field, FormActions, FormError,
                OptionalText, RowActions,
            },
            location::LocationFields,
            Page,
        },
        hooks::{use_resource_form, use_resource_list, ResourceForm, ResourceList},
        resource,
    },
    model::{
        common_area::CommonAreaDto,
        reservation::{PaymentStatus, ReservationStatus},
    },
};

fn find_area(areas: &[CommonAreaDto], id: i32) -> Option<&CommonAreaDto> {
    areas.iter().find(|area| area.id == id)
}

#[component]
fn ReservationForm() -> Element {
    let form = use_context::<ResourceForm<resource::Reservations>>();
    let reservations = use_context::<ResourceList<resource::Reservations>>();
    let areas = use_context::<ResourceList<resource::CommonAreas>>();
    let mut input = form.input;

    let all_areas = areas.list.read().items().to_vec();
    let selected_area = find_area(&all_areas, input.read().common_area_id).cloned();
    // Inactive areas stay listed only while already selected
    let area_options: Vec<CommonAreaDto> = all_areas
        .into_iter()
        .filter(|area| area.is_active || area.id == input.read().common_area_id)
        .collect();
    let estimate = selected_area
        .as_ref()
        .and_then(|area| input.read().estimate_total_cost(area));

    let submit = move |e: FormEvent| async move {
        e.prevent_default();

        let areas = areas.list.peek().items().to_vec();
        form.submit_checked(reservations, move |input| {
            // Areas this user cannot see are checked by the server alone
            match find_area(&areas, input.common_area_id) {
                Some(area) if input.status.holds_slot() => input.validate_for_area(area),
                _ => Ok(()),
            }
        })
        .await;
    };

    rsx!(
        form {
            class: "card bg-base-200 shadow-sm",
            onsubmit: submit,
            div { class: "card-body grid grid-cols-1 md:grid-cols-3 gap-2",
                Field { label: "Área comum *",
                    select {
                        class: "select w-full",
                        onchange: move |e| input.write().common_area_id = parse_integer(&e.value()).unwrap_or(0),
                        option { value: "", disabled: true, selected: selected_area.is_none(), "Selecione" }
                        for area in area_options.iter() {
                            option {
                                value: "{area.id}",
                                selected: input.read().common_area_id == area.id,
                                "{area.name}"
                                if !area.is_active { " (inativa)" }
                            }
                        }
                    }
                }
                Field { label: "Início *",
                    input {
                        class: "input w-full",
                        r#type: "datetime-local",
                        value: datetime_value(input.read().start_at),
                        oninput: move |e| {
                            if let Some(start_at) = parse_datetime(&e.value()) {
                                input.write().start_at = start_at;
                            }
                        },
                    }
                }
                Field { label: "Término *",
                    input {
                        class: "input w-full",
                        r#type: "datetime-local",
                        value: datetime_value(input.read().end_at),
                        oninput: move |e| {
                            if let Some(end_at) = parse_datetime(&e.value()) {
                                input.write().end_at = end_at;
                            }
                        },
                    }
                }
                LocationFields {
                    kind: input.read().location_kind,
                    unit_number: input.read().unit_number.clone(),
                    location_detail: input.read().location_detail.clone(),
                    on_kind: move |kind| input.write().location_kind = kind,
                    on_unit_number: move |value| input.write().unit_number = value,
                    on_location_detail: move |value| input.write().location_detail = value,
                }
                Field { label: "Número de convidados",
                    input {
                        class: "input w-full",
                        r#type: "number",
                        min: "0",
                        value: number_value(input.read().expected_guests),
                        oninput: move |e| input.write().expected_guests = parse_integer(&e.value()),
                    }
                }
                OptionalText {
                    label: "Finalidade",
                    placeholder: "Ex: Aniversário",
                    value: input.read().purpose.clone(),
                    on_input: move |v| input.write().purpose = v,
                }
                OptionalText {
                    label: "Responsável",
                    value: input.read().responsible_name.clone(),
                    on_input: move |v| input.write().responsible_name = v,
                }
                OptionalText {
                    label: "Unidade do responsável",
                    value: input.read().responsible_unit.clone(),
                    on_input: move |v| input.write().responsible_unit = v,
                }
                Field { label: "Status",
                    select {
                        class: "select w-full",
                        onchange: move |e| {
                            if let Ok(status) = e.value().parse() {
                                input.write().status = status;
                            }
                        },
                        {enum_options(ReservationStatus::ALL, input.read().status, ReservationStatus::as_str, ReservationStatus::label)}
                    }
                }
                Field { label: "Pagamento",
                    select {
                        class: "select w-full",
                        onchange: move |e| {
                            if let Ok(payment_status) = e.value().parse() {
                                input.write().payment_status = payment_status;
                            }
                        },
                        {enum_options(PaymentStatus::ALL, input.read().payment_status, PaymentStatus::as_str, PaymentStatus::label)}
                    }
                }
                div { class: "md:col-span-3 flex flex-wrap gap-4",
                    label { class: "label cursor-pointer gap-2",
                        input {
                            r#type: "checkbox",
                            class: "checkbox",
                            checked: input.read().needs_cleaning,
                            onchange: move |e| input.write().needs_cleaning = e.checked(),
                        }
                        span { "Limpeza após o uso" }
                    }
                    label { class: "label cursor-pointer gap-2",
                        input {
                            r#type: "checkbox",
                            class: "checkbox",
                            checked: input.read().needs_furniture,
                            onchange: move |e| input.write().needs_furniture = e.checked(),
                        }
                        span { "Mobiliário extra" }
                    }
                }
                if input.read().needs_furniture {
                    div { class: "md:col-span-3",
                        OptionalText {
                            label: "Mobiliário necessário",
                            placeholder: "Ex: 10 mesas e 40 cadeiras",
                            value: input.read().furniture_details.clone(),
                            on_input: move |v| input.write().furniture_details = v,
                        }
                    }
                }
                div { class: "md:col-span-3",
                    Field { label: "Pedidos especiais",
                        textarea {
                            class: "textarea w-full",
                            value: input.read().special_requests.clone().unwrap_or_default(),
                            oninput: move |e| input.write().special_requests = optional(e.value()),
                        }
                    }
                }
                if let Some(rules) = selected_area.as_ref().and_then(|area| area.rules.clone()) {
                    div { class: "md:col-span-3 alert",
                        span { class: "font-semibold", "Regras: " }
                        span { "{rules}" }
                    }
                }
                label { class: "md:col-span-3 label cursor-pointer gap-2",
                    input {
                        r#type: "checkbox",
                        class: "checkbox",
                        checked: input.read().agrees_to_rules,
                        onchange: move |e| input.write().agrees_to_rules = e.checked(),
                    }
                    span { "Li e aceito as regras de uso da área *" }
                }
                div { class: "md:col-span-3 flex justify-between items-center",
                    span { class: "text-lg",
                        "Custo estimado: "
                        {estimate.map(format_currency).unwrap_or_else(|| "-".to_string())}
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

fn status_badge(status: ReservationStatus) -> &'static str {
    match status {
        ReservationStatus::Pending => "badge badge-warning",
        ReservationStatus::Confirmed => "badge badge-success",
        ReservationStatus::Cancelled => "badge badge-ghost",
        ReservationStatus::Completed => "badge badge-info",
    }
}

#[component]
fn ReservationTable() -> Element {
    let form = use_context::<ResourceForm<resource::Reservations>>();
    let reservations = use_context::<ResourceList<resource::Reservations>>();
    let areas = use_context::<ResourceList<resource::CommonAreas>>();
    let list = reservations.list.read();
    let area_list = areas.list.read();

    if list.is_loading() {
        return rsx!(span { class: "loading loading-spinner" });
    }

    rsx!(
        div { class: "overflow-x-auto",
            table { class: "table table-md",
                thead {
                    tr {
                        th { "Área" }
                        th { "Início" }
                        th { "Término" }
                        th { "Local" }
                        th { "Status" }
                        th { "Pagamento" }
                        th { "Custo" }
                        th {}
                    }
                }
                tbody {
                    for reservation in list.items().iter().cloned() {
                        tr { key: "{reservation.id}",
                            td {
                                {reservation.common_area_name.clone()
                                    .or_else(|| find_area(area_list.items(), reservation.common_area_id).map(|area| area.name.clone()))
                                    .unwrap_or_else(|| format!("#{}", reservation.common_area_id))}
                            }
                            td { {format_datetime(reservation.start_at)} }
                            td { {format_datetime(reservation.end_at)} }
                            td {
                                {reservation.location_kind.label()}
                                " "
                                {reservation.unit_number.clone().or(reservation.location_detail.clone()).unwrap_or_default()}
                            }
                            td {
                                span { class: status_badge(reservation.status), {reservation.status.label()} }
                            }
                            td { {reservation.payment_status.label()} }
                            td { {reservation.total_cost.map(format_currency).unwrap_or_default()} }
                            RowActions {
                                on_edit: {
                                    let reservation = reservation.clone();
                                    move |_| form.edit(&reservation)
                                },
                                on_delete: move |_| async move {
                                    reservations.delete(reservation.id).await;
                                },
                            }
                        }
                    }
                }
            }
            if list.is_empty() {
                p { class: "p-4 text-center", "Nenhuma reserva registrada." }
            }
        }
    )
}

#[component]
pub fn Reservations() -> Element {
    let reservations = use_resource_list::<resource::Reservations>();
    let areas = use_resource_list::<resource::CommonAreas>();
    let form = use_resource_form::<resource::Reservations>();

    use_context_provider(|| reservations);
    use_context_provider(|| areas);
    use_context_provider(|| form);

    rsx!(
        Title { "Reservas | Mirtilo" }
        Page { heading: "Reservas de áreas comuns",
            div { class: "flex flex-col gap-4",
                ReservationForm {}
                ReservationTable {}
            }
        }
    )
}
