use house_service::config::HouseConfig;
use house_service::startup::Application;
use service_core::error::AppError;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    init_tracing("info");

    let config = HouseConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        e
    })?;

    tracing::info!(
        port = config.common.port,
        database = %config.mongodb.database,
        "Starting house-service"
    );

    let app = Application::build(config).await?;

    app.run_until_stopped().await?;

    Ok(())
}
