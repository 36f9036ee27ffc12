pub mod indexer;
pub mod models;
pub mod storage;
pub mod utils;

use anyhow::Result;
use tracing::{info, warn};

use crate::indexer::{LogSource, fetch_transfers};
use crate::models::common::Config;
use crate::models::datasets::transfers::ScanPosition;
use crate::storage::{OutputPaths, write_checkpoint, write_records};

/// Scan from the contract's deploy block to `end_block` (or the chain tip), then
/// write the transfers CSV followed by the waypoint. Nothing is written if any
/// fetch fails.
pub async fn run<S: LogSource>(config: &Config, source: &S) -> Result<ScanPosition> {
    let start_block = config.deploy_block;
    let end_block = match config.end_block {
        Some(end_block) => end_block,
        None => source.latest_block_number().await?,
    };
    info!("Scanning blocks {} to {}", start_block, end_block);

    let fetched = fetch_transfers(source, start_block, end_block, config.batch_size).await?;
    info!("Fetched {} transfers", fetched.records.len());

    let latest_transaction_index = fetched.latest_transaction_index.unwrap_or_else(|| {
        // Indistinguishable from a last event at index 0 once written
        warn!("No ERC20Transfer events in range, recording latestTransactionIndex as 0");
        0
    });
    let position = ScanPosition {
        latest_block: end_block,
        latest_transaction_index,
    };

    let paths = OutputPaths::new(&config.data_dir, &config.file_name);
    write_records(&paths.records, &fetched.records)?;
    write_checkpoint(&paths.waypoint, &position)?;

    Ok(position)
}
