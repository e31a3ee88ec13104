use anyhow::Result;
use clap::Parser;
use litsearch_proxy::{Client, ClientConfig, server};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(
    name = "litsearch-proxy",
    version,
    about = "Normalized PubMed and Europe PMC search over HTTP"
)]
struct Args {
    /// Address to bind
    #[arg(long, env = "LITSEARCH_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 10000)]
    port: u16,

    /// NCBI API key sent with E-utilities requests
    #[arg(long, env = "NCBI_API_KEY")]
    ncbi_api_key: Option<String>,

    /// Contact email sent with E-utilities requests
    #[arg(long, env = "NCBI_EMAIL")]
    ncbi_email: Option<String>,

    /// Override the E-utilities base URL
    #[arg(long, env = "PUBMED_BASE_URL")]
    pubmed_base_url: Option<String>,

    /// Override the Europe PMC REST base URL
    #[arg(long, env = "EUROPE_PMC_BASE_URL")]
    europe_pmc_base_url: Option<String>,
}

impl Args {
    fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new();
        if let Some(ref key) = self.ncbi_api_key {
            config = config.with_api_key(key);
        }
        if let Some(ref email) = self.ncbi_email {
            config = config.with_email(email);
        }
        if let Some(ref url) = self.pubmed_base_url {
            config = config.with_pubmed_base_url(url);
        }
        if let Some(ref url) = self.europe_pmc_base_url {
            config = config.with_europe_pmc_base_url(url);
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("litsearch_proxy=info")),
        )
        .init();

    info!("Starting litsearch-proxy {}", env!("CARGO_PKG_VERSION"));

    let client = Arc::new(Client::with_config(args.client_config())?);
    let app = server::router(client);

    let listener = tokio::net::TcpListener::bind((args.host.as_str(), args.port)).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to install Ctrl-C handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
