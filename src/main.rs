use alloy_provider::ProviderBuilder;
use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::{self, EnvFilter};

use erc20_transfer_export::indexer::RpcLogSource;
use erc20_transfer_export::run;
use erc20_transfer_export::utils::load_config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    info!("=========================== INITIALIZING ===========================");

    // Load config
    let config = match load_config("config.yml") {
        Ok(config) => {
            info!("Config loaded successfully");
            config
        }
        Err(e) => {
            error!("Failed to load config: {:#}", e);
            return Err(e);
        }
    };

    // Create RPC provider
    let rpc_url = config.rpc_url()?;
    info!("RPC host: {}", rpc_url.host_str().unwrap_or("<none>"));
    let provider = ProviderBuilder::new().connect_http(rpc_url);
    let source = RpcLogSource::new(provider, config.contract_address);

    info!("Contract: {}", config.contract_address);
    info!("========================= STARTING EXPORT ==========================");

    let position = run(&config, &source).await?;

    info!(
        "Export complete: latestBlock={}, latestTransactionIndex={}",
        position.latest_block, position.latest_transaction_index
    );
    Ok(())
}
