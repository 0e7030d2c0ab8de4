use std::net::SocketAddr;
use std::process;

use tokio::signal;

use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use booking_notifier::app::create_app;
use booking_notifier::config::AppConfig;
use booking_notifier::state::SharedAppState;
use booking_notifier::utils::init_email_service;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenv().ok();

  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let config = match AppConfig::from_env() {
    Ok(config) => config,
    Err(e) => {
      tracing::error!("{}", e);
      process::exit(1);
    }
  };

  tracing::info!(
    email_user = %config.sender(),
    admin_email = %config.admin_email,
    port = config.port,
    "Server starting"
  );

  let email_service = init_email_service(&config).await?;
  let app_state = SharedAppState::new(&config, email_service);
  let app = create_app(app_state);

  let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
  let listener = tokio::net::TcpListener::bind(addr).await?;

  tracing::info!("Server running on port {}", config.port);

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
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

  tracing::info!("Received termination signal, shutting down gracefully...");
}
