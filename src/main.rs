use ecommerce_api::config::Config;
use ecommerce_api::startup::Application;
use ecommerce_api::telemetry::init_tracing;

/// Main application entry point
///
/// This function:
/// 1. Loads configuration from the environment and `.env` files
/// 2. Sets up logging for the configured mode
/// 3. Builds the application and binds the listening socket
/// 4. Connects to the database, exiting with code 1 if that fails
/// 5. Serves requests until Ctrl-C
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    init_tracing(config.mode);
    tracing::info!("Configuration loaded: {:?}", config);

    let application = Application::build(config).await?;

    if let Err(e) = application.connect_database().await {
        tracing::error!("Error starting database: {:?}", e);
        std::process::exit(1);
    }

    application.run_until_stopped().await
}
