use distributed_fs::api;
use distributed_fs::config::StoreConfig;
use distributed_fs::store::service::FileStore;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const DEFAULT_BIND: &str = "127.0.0.1:5000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = DEFAULT_BIND.parse()?;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                let Some(value) = args.get(i + 1) else {
                    eprintln!("Usage: {} [--bind <addr:port>]", args[0]);
                    std::process::exit(1);
                };
                bind_addr = value.parse()?;
                i += 2;
            }
            "--help" | "-h" => {
                eprintln!("Usage: {} [--bind <addr:port>]", args[0]);
                eprintln!("Example: {} --bind 0.0.0.0:5000", args[0]);
                eprintln!("Store settings are read from DFS_* environment variables.");
                return Ok(());
            }
            _ => {
                i += 1;
            }
        }
    }

    let config = StoreConfig::from_env()?;
    tracing::info!("Store config: {:?}", config);

    let store = Arc::new(FileStore::new(config));
    let app = api::router(store);

    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
