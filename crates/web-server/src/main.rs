use anyhow::Context;
use std::net::SocketAddr;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Where the server listens when `OPINIAO_BIND_ADDR` is not set.
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

// This main function is the entry point when running `cargo run -p web-server`.
// Its only job is to set up logging and hand control to `run_server`.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("web_server=debug,database=debug,tower_http=info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let addr = std::env::var("OPINIAO_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let addr: SocketAddr = addr
        .parse()
        .with_context(|| format!("Invalid bind address: {addr}"))?;

    web_server::run_server(addr).await
}
