mod config;
mod error;
mod routes;
mod state;

use error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt::init();
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            tracing::warn!(error = %e, "failed to load .env");
        }
    }

    let config = config::Config::from_env()?;
    let port = config.port;
    tracing::info!(api_url = %config.recognition_api_url, "recognition service configured");

    let state = state::AppState::new(config);
    let app = routes::leptos_app(state)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "mathboard listening");
    axum::serve(listener, app).await?;
    Ok(())
}
