// chain-devtools/src/bin/dummy_rpc.rs
use clap::Parser;
use chain_devtools::ServerConfig;
use rpc::{RpcMethods, RpcServer};
use std::net::SocketAddr;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "dummy-rpc")]
#[command(about = "Stub JSON-RPC endpoint answering eth_blockNumber with a canned value", version, long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<String>,

    /// Override the listen address (port 0 picks a free port)
    #[arg(short, long)]
    listen: Option<SocketAddr>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    chain_devtools::init_tracing(cli.debug);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path);
            ServerConfig::from_file(path)?
        }
        None => ServerConfig::default(),
    };

    if let Some(listen) = cli.listen {
        config.rpc.listen_addr = listen;
    }

    let server = Arc::new(RpcServer::bind(config.rpc, RpcMethods::new()).await?);
    println!("Dummy RPC server is running on http://{}...", server.local_addr()?);

    tokio::select! {
        res = server.serve() => res?,
        _ = tokio::signal::ctrl_c() => tracing::info!("Received shutdown signal"),
    }

    Ok(())
}
