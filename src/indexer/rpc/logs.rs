use alloy_rpc_types_eth::Log;
use alloy_sol_types::SolEvent;
use anyhow::Result;

use crate::models::datasets::transfers::{ERC20Transfer, TransferLog};
use crate::models::errors::LogError;

pub trait LogParser {
    fn parse_transfer_logs(self) -> Result<Vec<TransferLog>>;
}

impl LogParser for Vec<Log> {
    fn parse_transfer_logs(self) -> Result<Vec<TransferLog>> {
        self.into_iter()
            .map(|log| -> Result<TransferLog> {
                let transaction_index =
                    log.transaction_index.ok_or_else(|| LogError::MissingField {
                        field: "transactionIndex".to_string(),
                    })?;

                let topic0 = log.inner.data.topics().first().copied();
                if topic0 != Some(ERC20Transfer::SIGNATURE_HASH) {
                    return Err(LogError::UnexpectedEvent { topic0 }.into());
                }

                let decoded = ERC20Transfer::decode_log(&log.inner).map_err(|source| {
                    LogError::Decode {
                        tx_hash: log.transaction_hash,
                        source,
                    }
                })?;

                Ok(TransferLog {
                    from: decoded.data.from,
                    to: decoded.data.to,
                    amount: decoded.data.amount,
                    transaction_index,
                })
            })
            .collect()
    }
}
