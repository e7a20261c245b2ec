use crate::{
    adapters::{http::app_state::AppState, persistence::PostgresPersistence},
    infra::{InfraError, config::AppConfig, postgres_persistence},
    use_cases::waitlist::{WaitlistRepoTrait, WaitlistUseCases},
};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Builds the application state. The returned persistence handle owns the
/// connection pool and should be closed once the server has stopped.
pub async fn init_app_state(config: AppConfig) -> Result<(AppState, PostgresPersistence), InfraError> {
    let postgres = postgres_persistence(&config).await?;

    let waitlist_repo_arc = Arc::new(postgres.clone()) as Arc<dyn WaitlistRepoTrait>;
    let waitlist_use_cases = WaitlistUseCases::new(waitlist_repo_arc);

    let app_state = AppState {
        config: Arc::new(config),
        waitlist_use_cases: Arc::new(waitlist_use_cases),
    };

    Ok((app_state, postgres))
}

pub fn init_tracing(log_file: Option<&Path>) -> Result<(), InfraError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "waitlist_api=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don’t show target (module path)
        .with_level(true) // show log level
        .pretty(); // human-friendly, with colors

    // File (structured JSON logs)
    let json_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(InfraError::LogFile)?;
            Some(
                fmt::layer()
                    .json()
                    .with_writer(file)
                    .with_current_span(true)
                    .with_span_list(true),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();

    Ok(())
}
