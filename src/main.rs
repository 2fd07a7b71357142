use dotenvy::dotenv;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use linkfront::api::routes::router;
use linkfront::client::ShortenClient;
use linkfront::config::Config;
use linkfront::state::AppState;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let (writer, _guard) = tracing_appender::non_blocking(std::io::stdout());
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("linkfront=debug,tower_http=debug")),
        )
        .init();

    let config = Config::load();
    let client = ShortenClient::new(config.backend_url.clone());
    let app = router(AppState::new(client));

    let listener = tokio::net::TcpListener::bind(&config.server_addr)
        .await
        .expect("failed to bind server address");
    tracing::info!(
        addr = %config.server_addr,
        backend = %config.backend_url,
        "linkfront is running"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received, stopping server");
}
