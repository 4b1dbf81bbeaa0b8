use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaBuilding, FaCalendarDays, FaClipboardList, FaDoorOpen, FaHouse, FaMoneyBill,
    FaRightFromBracket, FaTruck, FaWrench,
};
use dioxus_free_icons::Icon;

use crate::client::{router::Route, store::user::UserState};

/// Signed-in pages in navbar order
fn sections() -> [(Route, &'static str); 8] {
    [
        (Route::Dashboard {}, "Painel"),
        (Route::Assets {}, "Ativos"),
        (Route::Maintenance {}, "Chamados"),
        (Route::Preventive {}, "Preventivas"),
        (Route::Suppliers {}, "Fornecedores"),
        (Route::CommonAreas {}, "Áreas comuns"),
        (Route::Reservations {}, "Reservas"),
        (Route::Financial {}, "Financeiro"),
    ]
}

fn section_icon(route: &Route) -> Element {
    match route {
        Route::Assets {} => rsx!(Icon { width: 16, height: 16, icon: FaBuilding }),
        Route::Maintenance {} => rsx!(Icon { width: 16, height: 16, icon: FaWrench }),
        Route::Preventive {} => rsx!(Icon { width: 16, height: 16, icon: FaClipboardList }),
        Route::Suppliers {} => rsx!(Icon { width: 16, height: 16, icon: FaTruck }),
        Route::CommonAreas {} => rsx!(Icon { width: 16, height: 16, icon: FaDoorOpen }),
        Route::Reservations {} => rsx!(Icon { width: 16, height: 16, icon: FaCalendarDays }),
        Route::Financial {} => rsx!(Icon { width: 16, height: 16, icon: FaMoneyBill }),
        _ => rsx!(Icon { width: 16, height: 16, icon: FaHouse }),
    }
}

#[component]
fn NavLink(to: Route, label: &'static str, children: Element) -> Element {
    rsx!(
        li {
            Link { to: to, class: "flex gap-2",
                {children}
                span { "{label}" }
            }
        }
    )
}

#[component]
pub fn AuthNavbar() -> Element {
    let user_store = use_context::<Store<UserState>>();
    let email = user_store
        .read()
        .user
        .as_ref()
        .map(|user| user.email.clone())
        .unwrap_or_default();

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-40",
            div {
                class: "navbar-start",
                Link { to: Route::Dashboard {},
                    p { class: "text-xl", "Mirtilo" }
                }
            }
            div {
                class: "navbar-center hidden lg:flex",
                ul { class: "menu menu-horizontal px-1",
                    for (route, label) in sections() {
                        NavLink { key: "{label}", to: route.clone(), label: label,
                            {section_icon(&route)}
                        }
                    }
                }
            }
            div {
                class: "navbar-end flex gap-2",
                span { class: "text-sm", "{email}" }
                a { href: "/api/auth/logout",
                    button {
                        class: "btn btn-outline flex gap-2",
                        Icon { width: 16, height: 16, icon: FaRightFromBracket }
                        "Sair"
                    }
                }
            }
        }
    }
}
