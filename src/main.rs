use std::sync::Arc;
use syllabus_search::config::Config;
use syllabus_search::syllabus::SyllabusClient;
use syllabus_search::ui::{make_config, App, AppContext};
use tracing::{error, info};

fn main() {
    // Use RUST_LOG env var if set, otherwise default to info level
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    let config = Config::load();

    let client = match SyllabusClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create syllabus client: {}", e);
            std::process::exit(1);
        }
    };

    info!("Starting syllabus search against {}", client.base_url());

    let context = AppContext {
        config,
        syllabus_api: Arc::new(client),
    };

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_config())
        .with_context(context)
        .launch(App);
}
