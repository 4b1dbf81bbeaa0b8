use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    api,
    components::Toasts,
    router::Route,
    store::{toast::ToastState, user::UserState},
};

#[component]
pub fn App() -> Element {
    let mut user_store = use_store(UserState::default);
    let toasts = use_signal(ToastState::default);

    use_context_provider(|| user_store);
    use_context_provider(|| toasts);

    // Resolve the session once; pages wait on `fetched` before redirecting
    use_future(move || async move {
        let user = match api::get_user().await {
            Ok(user) => user,
            Err(err) => {
                tracing::error!("Failed to retrieve session user: {}", err);
                None
            }
        };

        let mut state = user_store.write();
        state.user = user;
        state.fetched = true;
    });

    rsx! {
        Router::<Route> {}
        Toasts {}
    }
}
