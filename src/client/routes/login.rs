use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api,
        components::{form::Field, Page},
        router::Route,
        store::user::UserState,
    },
    model::user::LoginDto,
};

#[component]
pub fn Login() -> Element {
    let mut user_store = use_context::<Store<UserState>>();
    let navigator = use_navigator();

    let mut credentials = use_signal(LoginDto::default);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    // Already signed in
    use_effect(move || {
        if user_store.read().user.is_some() {
            navigator.replace(Route::Dashboard {});
        }
    });

    let submit = move |event: FormEvent| async move {
        event.prevent_default();

        let dto = credentials.peek().clone();
        if let Err(err) = dto.validate() {
            error.set(Some(err.to_string()));
            return;
        }

        error.set(None);
        submitting.set(true);

        match api::login(&dto).await {
            Ok(user) => {
                tracing::info!("Signed in as user {}", user.id);
                user_store.write().sign_in(user);
                navigator.replace(Route::Dashboard {});
            }
            Err(err) => error.set(Some(err)),
        }

        submitting.set(false);
    };

    rsx!(
        Title { "Entrar | Mirtilo" }
        Page { class: "flex items-center justify-center",
            form {
                class: "card bg-base-200 shadow-sm w-full max-w-96",
                onsubmit: submit,
                div { class: "card-body flex flex-col gap-2",
                    h2 { class: "card-title", "Entrar" }
                    Field { label: "E-mail",
                        input {
                            class: "input w-full",
                            r#type: "email",
                            autocomplete: "username",
                            value: "{credentials.read().email}",
                            oninput: move |e| credentials.write().email = e.value(),
                        }
                    }
                    Field { label: "Senha",
                        input {
                            class: "input w-full",
                            r#type: "password",
                            autocomplete: "current-password",
                            value: "{credentials.read().password}",
                            oninput: move |e| credentials.write().password = e.value(),
                        }
                    }
                    if let Some(error) = error() {
                        div { class: "alert alert-error", "{error}" }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: submitting(),
                        "Entrar"
                    }
                }
            }
        }
    )
}
