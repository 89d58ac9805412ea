pub mod router;
pub mod server;
pub mod state;
pub mod tracing;

use crate::config;
use crate::error::ConsoleError;

/// Application entry point. Initializes tracing, configuration, and starts
/// the server.
pub async fn run() -> Result<(), ConsoleError> {
    tracing::init_tracing();

    let settings =
        config::get_configuration().map_err(|e| ConsoleError::Config(e.to_string()))?;
    ::tracing::info!("Loaded settings");

    let app_state = state::AppState::from_settings(&settings);
    let app = router::router(app_state);

    server::serve(app, settings.http_port).await
}
