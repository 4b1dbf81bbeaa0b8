use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{components::Page, router::Route, store::user::UserState};

#[component]
fn ShortcutCard(to: Route, title: &'static str, description: &'static str) -> Element {
    rsx!(
        Link { to: to, class: "card bg-base-200 shadow-sm hover:bg-base-300",
            div { class: "card-body",
                h2 { class: "card-title", "{title}" }
                p { "{description}" }
            }
        }
    )
}

#[component]
pub fn Dashboard() -> Element {
    let user_store = use_context::<Store<UserState>>();
    let email = user_store
        .read()
        .user
        .as_ref()
        .map(|user| user.email.clone())
        .unwrap_or_default();

    rsx!(
        Title { "Painel | Mirtilo" }
        Page { heading: "Painel",
            p { class: "pb-4", "Bem-vindo, {email}." }
            div { class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                ShortcutCard { to: Route::Assets {}, title: "Ativos", description: "Equipamentos e bens do condomínio" }
                ShortcutCard { to: Route::Maintenance {}, title: "Chamados", description: "Solicitações de manutenção" }
                ShortcutCard { to: Route::Preventive {}, title: "Preventivas", description: "Cronograma de manutenção preventiva" }
                ShortcutCard { to: Route::Suppliers {}, title: "Fornecedores", description: "Prestadores de serviço e dados bancários" }
                ShortcutCard { to: Route::Reservations {}, title: "Reservas", description: "Agendamento das áreas comuns" }
                ShortcutCard { to: Route::CommonAreas {}, title: "Áreas comuns", description: "Capacidade, tarifas e regras" }
                ShortcutCard { to: Route::Financial {}, title: "Financeiro", description: "Receitas, despesas e saldo" }
            }
        }
    )
}
