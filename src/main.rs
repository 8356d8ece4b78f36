#![allow(non_snake_case)]

mod client;

#[cfg(feature = "server")]
use arrival::server;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{config::Config, model::app::AppState, startup};

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        let http = match startup::build_http_client(&config) {
            Ok(http) => http,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        };

        tracing::info!(
            "Starting server, proxying backend health from {}",
            config.backend_health_url
        );

        let mut router = dioxus::server::router(client::App);
        let server_routes = server::router::routes().with_state(AppState::new(config, http));
        router = router.merge(server_routes);

        Ok(router)
    })
}
