use crate::plugin::{Plugin, PluginAdapter};
use crate::proto::plugin_server::PluginServer;
use crate::{PluginError, Result};
use clap::Parser;
use std::net::SocketAddr;
use tokio::signal;
use tonic::transport::Server;
use tracing::info;

type Service<P> = PluginServer<PluginAdapter<P>>;

/// Command-line arguments for the plugin server.
#[derive(Parser, Debug)]
#[command(author, version, about = "hello-world plugin server", long_about = None)]
struct Args {
    /// Address to bind to (socket path for unix, host:port for tcp).
    #[arg(long)]
    address: String,

    /// Network type (unix or tcp).
    #[arg(long, default_value = "unix")]
    network: String,
}

/// Serves a plugin until SIGINT or SIGTERM.
///
/// `args` overrides the process arguments, which is mainly useful in tests.
/// Unix sockets are removed before binding if stale, and again on shutdown.
pub async fn serve<P: Plugin>(plugin: P, args: Option<Vec<String>>) -> Result<()> {
    // Parse command-line arguments.
    let args = match args {
        Some(args) => Args::try_parse_from(args)
            .map_err(|e| PluginError::Configuration(e.to_string()))?,
        None => Args::parse(),
    };

    info!(
        "Starting plugin server on {} ({})",
        args.address, args.network
    );

    // Wrap the plugin in the generated gRPC service.
    let service = PluginServer::new(PluginAdapter::new(plugin));

    // Serve based on network type.
    match args.network.as_str() {
        "unix" => serve_unix(service, &args.address).await,
        "tcp" => serve_tcp(service, &args.address).await,
        network => Err(PluginError::Configuration(format!(
            "Unsupported network type: {}",
            network
        ))),
    }
}

#[cfg(unix)]
async fn serve_unix<P: Plugin>(service: Service<P>, address: &str) -> Result<()> {
    use std::path::Path;
    use tokio::net::UnixListener;
    use tokio_stream::wrappers::UnixListenerStream;
    use tracing::warn;

    let path = Path::new(address);

    // Remove a stale socket file left by a previous run.
    if path.exists() {
        warn!("Removing existing socket file: {}", address);
        std::fs::remove_file(path)?;
    }

    // Create Unix listener.
    let listener = UnixListener::bind(path)?;
    let stream = UnixListenerStream::new(listener);

    info!("Listening on Unix socket: {}", address);

    // Serve with graceful shutdown.
    Server::builder()
        .add_service(service)
        .serve_with_incoming_shutdown(stream, shutdown_signal())
        .await?;

    // Clean up socket file on shutdown.
    if path.exists() {
        info!("Cleaning up socket file: {}", address);
        let _ = std::fs::remove_file(path);
    }

    Ok(())
}

#[cfg(not(unix))]
async fn serve_unix<P: Plugin>(_service: Service<P>, _address: &str) -> Result<()> {
    Err(PluginError::Configuration(
        "Unix sockets not supported on this platform".to_string(),
    ))
}

async fn serve_tcp<P: Plugin>(service: Service<P>, address: &str) -> Result<()> {
    let addr = parse_tcp_address(address)?;

    info!("Listening on TCP: {}", addr);

    // Serve with graceful shutdown.
    Server::builder()
        .add_service(service)
        .serve_with_shutdown(addr, shutdown_signal())
        .await?;

    Ok(())
}

fn parse_tcp_address(address: &str) -> Result<SocketAddr> {
    address
        .parse()
        .map_err(|e| PluginError::Configuration(format!("Invalid TCP address: {}", e)))
}

/// Waits for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received SIGINT, shutting down gracefully");
        }
        _ = terminate => {
            info!("Received SIGTERM, shutting down gracefully");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, HelloWorldHandler};

    #[test]
    fn network_defaults_to_unix() {
        let args = Args::try_parse_from(["plugin", "--address", "/tmp/hw.sock"]).unwrap();
        assert_eq!(args.network, "unix");
        assert_eq!(args.address, "/tmp/hw.sock");
    }

    #[test]
    fn address_is_required() {
        assert!(Args::try_parse_from(["plugin"]).is_err());
    }

    #[test]
    fn tcp_address_must_be_host_and_port() {
        assert!(parse_tcp_address("127.0.0.1:50051").is_ok());
        assert!(matches!(
            parse_tcp_address("localhost"),
            Err(PluginError::Configuration(_))
        ));
    }

    #[tokio::test]
    async fn unsupported_network_is_rejected() {
        let handler = HelloWorldHandler::new(Config::default());
        let args = ["plugin", "--address", "x", "--network", "udp"]
            .map(String::from)
            .to_vec();

        let err = serve(handler, Some(args)).await.unwrap_err();
        assert!(matches!(err, PluginError::Configuration(msg) if msg.contains("udp")));
    }

    #[tokio::test]
    async fn bad_arguments_are_a_configuration_error() {
        let handler = HelloWorldHandler::new(Config::default());
        let err = serve(handler, Some(vec!["plugin".to_string()]))
            .await
            .unwrap_err();
        assert!(matches!(err, PluginError::Configuration(_)));
    }
}
