use tracing::Level;

use crate::shared::structs::{AppState, config::Configuration};

mod controller;
mod shared;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Configuration::load()?;

    let log_level = match config.log_level.as_str() {
        "TRACE" => Level::TRACE,
        "INFO" => Level::INFO,
        "WARN" => Level::WARN,
        "ERROR" => Level::ERROR,
        _ => Level::DEBUG,
    };

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(log_level)
        .pretty()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!(
            "Initialization of tracing subscriber failed with error: {}",
            e
        );
    }

    let server_bind_point = config.server_bind_point.clone();
    let app = controller::router(AppState::new(config)?);

    tracing::info!("Listening on {}", &server_bind_point);
    let listener = tokio::net::TcpListener::bind(&server_bind_point).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
