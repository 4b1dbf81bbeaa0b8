use dioxus::prelude::*;

use crate::client::{router::Route, store::user::UserState};

/// Top bar for the public pages
#[component]
pub fn Navbar() -> Element {
    let user_store = use_context::<Store<UserState>>();

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-40",
            div {
                class: "navbar-start",
                Link { to: Route::Home {},
                    p { class: "text-xl", "Mirtilo" }
                }
            }
            div {
                class: "navbar-end",
                if user_store.read().user.is_some() {
                    Link {
                        to: Route::Dashboard {},
                        class: "btn btn-primary",
                        "Painel"
                    }
                } else if user_store.read().fetched {
                    Link {
                        to: Route::Login {},
                        class: "btn btn-outline",
                        "Entrar"
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
