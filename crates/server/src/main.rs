use anyhow::Result;
use logging::setup_logging;
use tracing::info;

const HTTP_LISTEN: &str = "0.0.0.0:8000";

#[tokio::main]
async fn main() -> Result<()> {
    // Populate the process environment before logging reads DEVELOPMENT.
    let env_file = dotenvy::dotenv_override().ok();

    let logger = setup_logging("server")?;
    match &env_file {
        Some(path) => logger.info(format!("loaded environment from {}", path.display())),
        None => logger.info("no .env file found, using the process environment"),
    }

    let listener = tokio::net::TcpListener::bind(HTTP_LISTEN).await?;
    info!(local = %listener.local_addr()?, "HTTP server listening");
    axum::serve(listener, server::http::router()).await?;
    Ok(())
}
