use alloy_primitives::{Address, U256};
use alloy_sol_types::sol;
use serde::Serialize;

sol! {
    /// Transfer event emitted by the tracked contract. Note the non-standard name,
    /// so topic0 differs from the canonical ERC-20 `Transfer` event.
    #[derive(Debug, PartialEq, Eq)]
    event ERC20Transfer(address indexed from, address indexed to, uint256 amount);
}

////////////////////////////////////// RPC Data ////////////////////////////////////////
// Decoded event arguments plus the position of the emitting transaction in its block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferLog {
    pub from: Address,
    pub to: Address,
    pub amount: U256,
    pub transaction_index: u64,
}

/////////////////////////////////// Transformed Data ///////////////////////////////////
// Final output format, one CSV row per record
#[derive(Debug, Clone, PartialEq)]
pub struct TransferRecord {
    pub from: Address,
    pub to: Address,
    pub amount: f64,
}

/// Progress marker persisted next to the CSV output. Written only, never read back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanPosition {
    pub latest_block: u64,
    pub latest_transaction_index: u64,
}

#[derive(Debug, Clone, Default)]
pub struct FetchedTransfers {
    pub records: Vec<TransferRecord>,
    /// Transaction index of the last event in the last window that returned any.
    /// `None` when no window returned events.
    pub latest_transaction_index: Option<u64>,
}
