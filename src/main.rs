#![allow(non_snake_case)]

mod client;

use mirtilo::model;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;
        use mirtilo::server::{config::Config, model::app::AppState, router, startup};

        dotenvy::dotenv().ok();
        let config = or_exit("Configuration error", Config::from_env());

        let auth = or_exit(
            "Failed to build auth provider client",
            startup::build_auth_provider(&config),
        );
        let session = or_exit(
            "Failed to connect to session store",
            startup::connect_to_session(&config).await,
        );
        let db = or_exit(
            "Failed to connect to database",
            startup::connect_to_database(&config).await,
        );

        tracing::info!("Starting server");

        let mut app = dioxus::server::router(client::App);
        let server_routes = router::routes()
            .with_state(AppState { db, auth })
            .layer(session);
        app = app.merge(server_routes);

        Ok(app)
    })
}

/// Startup failures are unrecoverable: report and exit
#[cfg(feature = "server")]
fn or_exit<T, E: std::fmt::Display>(context: &str, result: Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            eprintln!("{}: {}", context, e);
            std::process::exit(1);
        }
    }
}
