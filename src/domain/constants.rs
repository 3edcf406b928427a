// Defaults used to recognize broker mail and to place ingest/output files.
// The filter values can be overridden per deployment through config.toml;
// these match the production tastytrade notification stream.
pub const BROKER_SENDER_DOMAIN: &str = "tastytrade.com";
pub const FILL_SUBJECT_MARKER: &str = "Order Fill";

pub const DEFAULT_INBOX_DIR: &str = "data";
pub const DEFAULT_OUTPUT_DIR: &str = "output";
