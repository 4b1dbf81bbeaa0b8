use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::{components::Page, router::Route, store::user::UserState};

#[component]
pub fn Home() -> Element {
    let user_store = use_context::<Store<UserState>>();

    rsx!(
        Title { "Mirtilo" }
        Meta {
            name: "description",
            content: "Gestão de condomínio: ativos, manutenção, fornecedores, reservas e finanças."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4 max-w-256 px-4",
                p { class: "text-3xl", "Mirtilo" }
                p { class: "text-center",
                    "Cadastre ativos, abra chamados de manutenção, planeje preventivas, mantenha fornecedores, reserve áreas comuns e acompanhe o caixa do condomínio."
                }
                ul { class: "flex gap-2",
                    if user_store.read().user.is_some() {
                        li {
                            Link { to: Route::Dashboard {}, class: "btn btn-primary w-32", "Painel" }
                        }
                        li {
                            a { href: "/api/docs",
                                button { class: "btn btn-secondary w-32", "API Docs" }
                            }
                        }
                    } else if user_store.read().fetched {
                        li {
                            Link { to: Route::Login {}, class: "btn btn-primary w-32", "Entrar" }
                        }
                    }
                }
            }
        }
    )
}
