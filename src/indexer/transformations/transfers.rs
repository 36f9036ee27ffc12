use crate::models::datasets::transfers::{TransferLog, TransferRecord};
use crate::utils::wei_to_ether;

pub trait TransferTransformer {
    fn transform_transfers(logs: Vec<TransferLog>) -> Vec<TransferRecord>;
}

impl TransferTransformer for TransferLog {
    fn transform_transfers(logs: Vec<TransferLog>) -> Vec<TransferRecord> {
        logs.into_iter()
            .map(|log| TransferRecord {
                from: log.from,
                to: log.to,
                amount: wei_to_ether(log.amount),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{Address, U256, address};

    const ALICE: Address = address!("0x2222222222222222222222222222222222222222");
    const BOB: Address = address!("0x3333333333333333333333333333333333333333");

    fn log(amount: u128, transaction_index: u64) -> TransferLog {
        TransferLog {
            from: ALICE,
            to: BOB,
            amount: U256::from(amount),
            transaction_index,
        }
    }

    #[test]
    fn maps_arguments_and_scales_amount_by_18_decimals() {
        let records = TransferLog::transform_transfers(vec![log(123_450_000_000_000_000_000, 0)]);

        assert_eq!(
            records,
            vec![TransferRecord {
                from: ALICE,
                to: BOB,
                amount: 123.45,
            }]
        );
    }

    #[test]
    fn preserves_source_order() {
        let logs = vec![
            log(3_000_000_000_000_000_000, 2),
            log(1_000_000_000_000_000_000, 0),
            log(2_000_000_000_000_000_000, 1),
        ];

        let amounts: Vec<f64> = TransferLog::transform_transfers(logs)
            .into_iter()
            .map(|r| r.amount)
            .collect();

        assert_eq!(amounts, vec![3.0, 1.0, 2.0]);
    }
}
