use tracing::info;
use zdk_backend::{AppState, app, config::{Config, FrontendDir}, session::Sessions, zdk::ZdkClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "zdk_backend=debug,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let state = AppState {
        zdk: ZdkClient::new(&config.api_key, &config.api_host),
        sessions: Sessions::new(),
        frontend: FrontendDir(config.frontend_path.clone()),
    };

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!("zdk-backend is running on http://{}", config.listen_addr);
    axum::serve(listener, app(state)).await?;

    Ok(())
}
