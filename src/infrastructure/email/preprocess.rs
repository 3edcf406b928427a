//! Body normalization. Confirmation bodies often reach us as text pulled
//! out of PDF prints, which mangles labels and spacing; every pattern rule
//! assumes the cleaned, single-line form this module produces.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Label colons get lost in PDF extraction; restore them. Runs of
    // colons are collapsed afterwards, so already-clean text is unchanged.
    static ref RECEIVED_AT_LABEL: Regex = Regex::new(r"Received\s+At").unwrap();
    static ref ORDER_TYPE_LABEL: Regex = Regex::new(r"Order\s+T\s*ype").unwrap();
    static ref FILLED_AT_LABEL: Regex = Regex::new(r"Filled\s+at:+").unwrap();

    // "Type" sometimes comes apart mid-token
    static ref SPLIT_TYPE_TOKEN: Regex = Regex::new(r"T\s+ype").unwrap();

    static ref COLON_RUNS: Regex = Regex::new(r":+").unwrap();

    // Footer links and browser print-header stamps carry no trade data
    static ref URLS: Regex = Regex::new(r"https?://\S+").unwrap();
    static ref PRINT_STAMPS: Regex = Regex::new(r"\d{1,2}/\d{1,2}/\d{4},\s+\d{1,2}:\d{2}").unwrap();
}

/// Cleans a raw body into the single-spaced form the field rules expect.
/// Pure and idempotent: normalizing already-normalized text is a no-op.
pub fn normalize(body: &str) -> String {
    let text = RECEIVED_AT_LABEL.replace_all(body, "Received At:");
    let text = ORDER_TYPE_LABEL.replace_all(&text, "Order Type:");
    let text = FILLED_AT_LABEL.replace_all(&text, "Filled at:");
    let text = SPLIT_TYPE_TOKEN.replace_all(&text, "Type");
    let text = COLON_RUNS.replace_all(&text, ":");
    let text = URLS.replace_all(&text, "");
    let text = PRINT_STAMPS.replace_all(&text, "");

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
