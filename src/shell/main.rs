use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use wellness_booking::shell::config::Config;
use wellness_booking::shell::http::{GRAPHQL_PATH, app};
use wellness_booking::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let state = AppState::from_config(&config)?;

    let addr = config.server_addr();
    info!("REST endpoints: http://{}", addr);
    info!("GraphQL endpoint: http://{}{}", addr, GRAPHQL_PATH);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;
    Ok(())
}
