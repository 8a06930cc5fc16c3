use std::sync::Arc;

use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use rdsp_api::{HttpApi, PanelService};
use rdsp_model::{ENV_ADMIN_TOKEN, PanelConfig};
use rdsp_observe::{LoggerConfig, init_logger};
use rdsp_runtime::DockerRuntime;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    // 1) logger
    let log_cfg = LoggerConfig::from_env()?;
    init_logger(&log_cfg)?;

    // 2) config
    let cfg = PanelConfig::from_env()?;
    if cfg.admin_token.is_default() {
        warn!(
            "{} is not set, using the built-in default token; set it before exposing the panel",
            ENV_ADMIN_TOKEN
        );
    }
    info!(
        container = %cfg.container,
        docker_socket = %cfg.docker_socket,
        log_format = %log_cfg.format,
        "configuration loaded"
    );

    // 3) runtime client; a missing daemon only fails individual requests
    let runtime = DockerRuntime::new(cfg.docker_socket.clone());

    // 4) http
    let addr = cfg.listen_addr();
    let service = Arc::new(PanelService::new(cfg, runtime));
    let app = HttpApi::new(service).router();

    let listener = TcpListener::bind(addr).await?;
    info!("RDS panel listening on {}", addr);

    let shutdown = CancellationToken::new();
    tokio::spawn(watch_signals(shutdown.clone()));

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    info!("RDS panel stopped");
    Ok(())
}

/// Cancels `token` on Ctrl-C or SIGTERM.
async fn watch_signals(token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("failed to listen for ctrl-c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received ctrl-c, shutting down"),
        _ = terminate => info!("received SIGTERM, shutting down"),
    }
    token.cancel();
}
