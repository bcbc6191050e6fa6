//! Feedback intake server.
use feedback_server::store::MssqlConnector;
use feedback_server::{ServerConfig, SubmissionWriter, route};
use salvo::prelude::*;
use salvo::server::ServerHandle;
use tokio::signal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), salvo::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env();
    tracing::info!(?config, "starting feedback server");
    let writer = SubmissionWriter::new(MssqlConnector, config.connection_string);

    let acceptor = TcpListener::new(config.listen_addr).try_bind().await?;
    let server = Server::new(acceptor);
    tokio::spawn(listen_shutdown_signal(server.handle()));

    server.serve(route(writer)).await;
    Ok(())
}

async fn listen_shutdown_signal(handle: ServerHandle) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("ctrl_c signal received"),
        _ = terminate => tracing::info!("terminate signal received"),
    };

    handle.stop_graceful(None);
}
