use dioxus::prelude::*;

use crate::client::{
    components::{auth::AuthLayout, Navbar},
    routes::{
        auth::{Assets, CommonAreas, Dashboard, Financial, Maintenance, Preventive, Reservations, Suppliers},
        Home, Login, NotFound,
    },
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

        #[route("/")]
        Home {},

        #[route("/login")]
        Login {},

    #[end_layout]

    #[layout(AuthLayout)]

        #[route("/dashboard")]
        Dashboard {},

        #[route("/assets")]
        Assets {},

        #[route("/maintenance")]
        Maintenance {},

        #[route("/preventive")]
        Preventive {},

        #[route("/suppliers")]
        Suppliers {},

        #[route("/common-areas")]
        CommonAreas {},

        #[route("/reservations")]
        Reservations {},

        #[route("/financial")]
        Financial {},

    #[end_layout]

    #[layout(Navbar)]

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
