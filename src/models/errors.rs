use alloy_primitives::B256;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No RPC endpoint configured: set either `rpc_url` or `infura_key`")]
    MissingRpcUrl,
    #[error("Invalid RPC URL {url}: {source}")]
    InvalidRpcUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RangeError {
    #[error("Invalid batch size: must be greater than zero")]
    ZeroBatchSize,
    #[error("Invalid block range: start block {from} is after end block {end}")]
    InvalidRange { from: u64, end: u64 },
}

#[derive(Error, Debug)]
pub enum LogError {
    #[error("Missing required field in log: {field}")]
    MissingField { field: String },
    #[error("Unexpected event topic {topic0:?}: not an ERC20Transfer log")]
    UnexpectedEvent { topic0: Option<B256> },
    #[error("Failed to decode ERC20Transfer log (tx {tx_hash:?}): {source}")]
    Decode {
        tx_hash: Option<B256>,
        #[source]
        source: alloy_sol_types::Error,
    },
}
