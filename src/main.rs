use fitness_app::{router, AppState, ChatClient, ChatConfig};
use std::{env, net::SocketAddr};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let chat_config = ChatConfig::from_env();
    if chat_config.api_key.is_empty() {
        warn!("CHAT_API_KEY is not set; chat replies will use the fallback message");
    }

    let state = AppState::new(ChatClient::new(chat_config)?);
    let app = router(state);

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
