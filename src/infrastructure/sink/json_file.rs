//! File-per-trade JSON persistence.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;

use crate::domain::model::TradeRecord;
use crate::domain::traits::TradeSink;

/// Stores each record as pretty-printed JSON at
/// `<output_dir>/trade_<order_id>.json`. A re-sent confirmation with the
/// same order id overwrites the earlier file, which keeps the directory
/// deduplicated without any bookkeeping.
pub struct JsonFileSink {
    output_dir: PathBuf,
}

impl JsonFileSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Where a given order's record lands.
    pub fn target_path(&self, order_id: &str) -> PathBuf {
        self.output_dir.join(format!("trade_{}.json", order_id))
    }
}

impl TradeSink for JsonFileSink {
    fn store(&self, record: &TradeRecord) -> Result<()> {
        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!(
                "Failed to create output directory '{}'",
                self.output_dir.display()
            )
        })?;

        let payload = serde_json::to_string_pretty(record)
            .with_context(|| format!("Failed to serialize trade {}", record.order_id))?;

        let path = self.target_path(&record.order_id);
        fs::write(&path, payload)
            .with_context(|| format!("Failed to write '{}'", path.display()))?;

        info!("Stored trade {} at {}", record.order_id, path.display());
        Ok(())
    }
}
