use std::path::PathBuf;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::models::errors::ConfigError;

pub const DEFAULT_BATCH_SIZE: u64 = 1000;

const INFURA_MAINNET_URL: &str = "https://mainnet.infura.io/v3";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub rpc_url: Option<String>,
    pub infura_key: Option<String>,
    pub contract_address: Address,
    pub deploy_block: u64,
    pub end_block: Option<u64>,
    #[serde(default = "default_batch_size")]
    pub batch_size: u64,
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

fn default_batch_size() -> u64 {
    DEFAULT_BATCH_SIZE
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_file_name() -> String {
    "erc20-transfers".to_string()
}

impl Config {
    /// Resolve the RPC endpoint. An explicit `rpc_url` wins over `infura_key`.
    pub fn rpc_url(&self) -> Result<Url, ConfigError> {
        let non_empty = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_owned)
        };

        let url = match (non_empty(&self.rpc_url), non_empty(&self.infura_key)) {
            (Some(url), _) => url,
            (None, Some(key)) => format!("{INFURA_MAINNET_URL}/{key}"),
            (None, None) => return Err(ConfigError::MissingRpcUrl),
        };

        url.parse::<Url>()
            .map_err(|source| ConfigError::InvalidRpcUrl { url, source })
    }
}
