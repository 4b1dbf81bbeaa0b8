use dioxus::prelude::*;

use crate::client::{
    components::{auth::AuthNavbar, Page},
    router::Route,
    store::user::UserState,
};

/// Wraps every management page; sends visitors without a session to the login page
#[component]
pub fn AuthLayout() -> Element {
    let user_store = use_context::<Store<UserState>>();
    let navigator = use_navigator();

    use_effect(move || {
        let state = user_store.read();
        if state.fetched && state.user.is_none() {
            navigator.replace(Route::Login {});
        }
    });

    let signed_in = user_store.read().user.is_some();

    rsx!(
        AuthNavbar {}
        if signed_in {
            Outlet::<Route> {}
        } else {
            Page { class: "flex items-center justify-center",
                span { class: "loading loading-spinner loading-lg" }
            }
        }
    )
}
