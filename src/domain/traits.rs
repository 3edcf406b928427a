use crate::domain::model::trade::TradeRecord;
use anyhow::Result;

/// Seam to whatever stores assembled records. The parser hands a record
/// over and forgets it; retry policy and dedup by order id live behind
/// this trait, not in the parsing stages.
pub trait TradeSink {
    fn store(&self, record: &TradeRecord) -> Result<()>;
}
