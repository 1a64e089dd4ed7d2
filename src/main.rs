use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use chatbox_server::routes;
use chatbox_server::services::chatbot::RuleBasedProvider;
use chatbox_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let state = Arc::new(AppState::new(Arc::new(RuleBasedProvider)));

    let app = routes::create_router().with_state(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;

    tracing::info!("chatbox server running at http://localhost:{port}");
    axum::serve(listener, app).await?;

    Ok(())
}
