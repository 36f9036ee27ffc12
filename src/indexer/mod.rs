pub mod ranges;
pub mod rpc;
pub mod transformations;

use std::future::Future;

use alloy_primitives::Address;
use alloy_provider::Provider;
use alloy_rpc_types_eth::{Filter, Log};
use alloy_sol_types::SolEvent;
use anyhow::{Context, Result, anyhow};
use tracing::{debug, info, warn};

use crate::indexer::ranges::BlockWindows;
use crate::indexer::rpc::logs::LogParser;
use crate::indexer::transformations::transfers::TransferTransformer;
use crate::models::datasets::transfers::{ERC20Transfer, FetchedTransfers, TransferLog};
use crate::utils::strip_html;

/// Where transfer events come from. Bounds passed to `transfer_logs` are inclusive.
pub trait LogSource {
    fn latest_block_number(&self) -> impl Future<Output = Result<u64>> + Send;

    fn transfer_logs(
        &self,
        from_block: u64,
        to_block: u64,
    ) -> impl Future<Output = Result<Vec<TransferLog>>> + Send;
}

/// `LogSource` backed by a JSON-RPC provider, filtered to one contract's `ERC20Transfer` events.
pub struct RpcLogSource<P> {
    provider: P,
    contract_address: Address,
}

impl<P: Provider> RpcLogSource<P> {
    pub fn new(provider: P, contract_address: Address) -> Self {
        Self {
            provider,
            contract_address,
        }
    }

    pub fn transfer_filter(&self, from_block: u64, to_block: u64) -> Filter {
        Filter::new()
            .address(self.contract_address)
            .event_signature(ERC20Transfer::SIGNATURE_HASH)
            .from_block(from_block)
            .to_block(to_block)
    }
}

impl<P: Provider> LogSource for RpcLogSource<P> {
    async fn latest_block_number(&self) -> Result<u64> {
        get_latest_block_number(&self.provider).await
    }

    async fn transfer_logs(&self, from_block: u64, to_block: u64) -> Result<Vec<TransferLog>> {
        let filter = self.transfer_filter(from_block, to_block);
        get_logs(&self.provider, &filter)
            .await?
            .parse_transfer_logs()
            .with_context(|| format!("Invalid logs in blocks {from_block}-{to_block}"))
    }
}

pub async fn get_latest_block_number<P: Provider>(provider: &P) -> Result<u64> {
    provider.get_block_number().await.map_err(|e| {
        warn!("Failed to get latest block number. Error details:\n{:#?}", e);
        anyhow!("RPC error: {}", strip_html(&e.to_string()))
    })
}

pub async fn get_logs<P: Provider>(provider: &P, filter: &Filter) -> Result<Vec<Log>> {
    provider.get_logs(filter).await.map_err(|e| {
        warn!(
            "Failed to get logs for blocks {:?}-{:?}. Error details:\n{:#?}",
            filter.get_from_block(),
            filter.get_to_block(),
            e
        );
        anyhow!("RPC error: {}", strip_html(&e.to_string()))
    })
}

/// Collect every transfer in `[from_block, end_block]`, one window of at most
/// `batch_size` blocks at a time. Windows are fetched sequentially and the first
/// failure aborts the whole scan.
pub async fn fetch_transfers<S: LogSource>(
    source: &S,
    from_block: u64,
    end_block: u64,
    batch_size: u64,
) -> Result<FetchedTransfers> {
    let mut windows = BlockWindows::new(from_block, end_block, batch_size)?;
    let mut fetched = FetchedTransfers::default();

    loop {
        let blocks_left = windows.blocks_left();
        let Some(window) = windows.next() else {
            break;
        };

        info!(
            "Fetching events from block {} to {}, there are {} blocks left",
            window.from, window.to, blocks_left
        );

        let logs = source
            .transfer_logs(window.from, window.to)
            .await
            .with_context(|| {
                format!("Failed to fetch transfers for blocks {}-{}", window.from, window.to)
            })?;

        debug!(
            "Blocks {}-{}: {} transfer events",
            window.from,
            window.to,
            logs.len()
        );

        // Empty windows keep the previous position
        if let Some(last) = logs.last() {
            fetched.latest_transaction_index = Some(last.transaction_index);
        }

        fetched
            .records
            .extend(TransferLog::transform_transfers(logs));
    }

    Ok(fetched)
}
