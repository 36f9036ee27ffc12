use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::models::datasets::transfers::{ScanPosition, TransferRecord};

const WAYPOINTS_DIR: &str = "waypoints";

/// Output locations for one export: `{data_dir}/{name}.csv` and
/// `{data_dir}/waypoints/{name}.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub records: PathBuf,
    pub waypoint: PathBuf,
}

impl OutputPaths {
    pub fn new(data_dir: &Path, file_name: &str) -> Self {
        Self {
            records: data_dir.join(format!("{file_name}.csv")),
            waypoint: data_dir.join(WAYPOINTS_DIR).join(format!("{file_name}.json")),
        }
    }
}

/// One `from,to,amount` line per record, no header, no trailing newline.
pub fn records_to_csv(records: &[TransferRecord]) -> String {
    records
        .iter()
        .map(|r| format!("{},{},{}", r.from, r.to, r.amount))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Overwrites `path` with the CSV rendering of `records`.
pub fn write_records(path: &Path, records: &[TransferRecord]) -> Result<()> {
    fs::write(path, records_to_csv(records))
        .with_context(|| format!("Failed to write records to {}", path.display()))?;
    info!("Data saved to {}", path.display());
    Ok(())
}

/// Overwrites `path` with the JSON waypoint.
pub fn write_checkpoint(path: &Path, position: &ScanPosition) -> Result<()> {
    let json = serde_json::to_string(position).context("Failed to serialize waypoint")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write waypoint to {}", path.display()))?;
    info!("Waypoints saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{Address, address};

    const ALICE: Address = address!("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
    const BOB: Address = address!("0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359");

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "erc20-export-storage-{}-{}",
            name,
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn output_paths_follow_data_layout() {
        let paths = OutputPaths::new(Path::new("data"), "erc20-transfers");
        assert_eq!(paths.records, Path::new("data/erc20-transfers.csv"));
        assert_eq!(
            paths.waypoint,
            Path::new("data/waypoints/erc20-transfers.json")
        );
    }

    #[test]
    fn csv_lines_use_checksummed_addresses_and_plain_decimals() {
        let records = vec![
            TransferRecord {
                from: ALICE,
                to: BOB,
                amount: 123.45,
            },
            TransferRecord {
                from: BOB,
                to: ALICE,
                amount: 1.0,
            },
        ];

        assert_eq!(
            records_to_csv(&records),
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed,0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359,123.45\n\
             0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359,0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed,1"
        );
    }

    #[test]
    fn csv_for_no_records_is_empty() {
        assert_eq!(records_to_csv(&[]), "");
    }

    #[test]
    fn writes_overwrite_previous_content() -> Result<()> {
        let dir = scratch_dir("overwrite");
        let path = dir.join("out.csv");
        fs::write(&path, "stale,stale,0\nstale,stale,0\n")?;

        let record = TransferRecord {
            from: ALICE,
            to: BOB,
            amount: 0.5,
        };
        write_records(&path, &[record])?;

        assert_eq!(
            fs::read_to_string(&path)?,
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed,0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359,0.5"
        );
        fs::remove_dir_all(&dir)?;
        Ok(())
    }

    #[test]
    fn checkpoint_is_camel_case_json() -> Result<()> {
        let dir = scratch_dir("checkpoint");
        let path = dir.join("waypoint.json");

        write_checkpoint(
            &path,
            &ScanPosition {
                latest_block: 2500,
                latest_transaction_index: 17,
            },
        )?;

        assert_eq!(
            fs::read_to_string(&path)?,
            r#"{"latestBlock":2500,"latestTransactionIndex":17}"#
        );
        fs::remove_dir_all(&dir)?;
        Ok(())
    }

    #[test]
    fn missing_directory_is_an_error() {
        let path = std::env::temp_dir()
            .join(format!("erc20-export-missing-{}", std::process::id()))
            .join("nested")
            .join("out.csv");

        let err = write_records(&path, &[]).unwrap_err();
        assert!(err.to_string().contains("Failed to write records"));
    }
}
