//! Compiled pattern rules for the field extractor. All rules assume the
//! normalized body form produced by [`super::preprocess::normalize`].

use lazy_static::lazy_static;
use regex::Regex;

/// Date-time shapes the broker prints: either the eastern-time form
/// `Nov 06, 2024 09:42:21 AM EST` or plain ISO `2024-11-06T09:42:21`.
const DATETIME: &str = r"(?:[A-Za-z]+\s+\d{1,2},\s+\d{4}\s+\d{1,2}:\d{2}:\d{2}\s+(?:AM|PM)\s+EST)|(?:\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2})";

lazy_static! {
    /// `Order #360559962` anywhere in the body.
    pub static ref ORDER_ID: Regex = Regex::new(r"(?i)order\s*#\s*(\d+)").unwrap();

    /// The submission timestamp after the `Received At` label.
    pub static ref DATE_RECEIVED: Regex =
        Regex::new(&format!(r"(?i)Received\s*At[\s:]*({DATETIME})")).unwrap();

    /// Free text after the `Submitted Order Type` label, up to the fill
    /// section or the first leg line.
    pub static ref ORDER_TYPE: Regex =
        Regex::new(r"(?i)Submitted\s+Order\s+T\s?ype[\s:]*(.+?)(?:\s+Fill|\s+Bought\b|\s+Sold\b|\s*$)")
            .unwrap();

    /// Where a leg line begins. The body is sliced between consecutive
    /// starts so per-leg rules only ever see their own segment.
    pub static ref LEG_START: Regex = Regex::new(r"\b(?:Sold|Bought)\s+\d").unwrap();

    pub static ref LEG_ACTION: Regex = Regex::new(r"^(Sold|Bought)\b").unwrap();
    pub static ref LEG_QUANTITY: Regex = Regex::new(r"^(?:Sold|Bought)\s+(\d+)\b").unwrap();
    pub static ref LEG_SYMBOL: Regex =
        Regex::new(r"^(?:Sold|Bought)\s+\d+\s+([A-Za-z][A-Za-z0-9./]*)").unwrap();

    /// Option qualifier inside the instrument descriptor.
    pub static ref OPTION_TYPE: Regex = Regex::new(r"\b(Put|Call)\b").unwrap();

    /// The strike is the token adjacent to the Put/Call word on the price
    /// side, i.e. at the tail of the descriptor: `... 6200.0 Put` or
    /// `... Put 6200.0`. Exactly one of the two groups captures.
    pub static ref STRIKE_SLOT: Regex =
        Regex::new(r"(?:(\S+)\s+(?:Put|Call)|(?:Put|Call)\s+(\S+))\s*$").unwrap();

    /// Expiration date inside the descriptor, `1/06/24` or `Jan 06, 2024`
    /// style. Only consulted for option legs, so fill times (which live
    /// after the `@` separator) can never shadow it.
    pub static ref EXPIRATION: Regex =
        Regex::new(r"((?:\d{1,2}/\d{1,2}/\d{2,4})|(?:[A-Za-z]{3,9}\s+\d{1,2},?\s+\d{4}))").unwrap();

    /// Execution price after the `@` separator. Sign is kept as printed.
    pub static ref FILL_PRICE: Regex = Regex::new(r"@\s*(-?\d+(?:\.\d+)?)").unwrap();

    /// Per-leg execution timestamp after a `Filled`/`Filled at` label.
    pub static ref FILL_TIME: Regex =
        Regex::new(&format!(r"(?i)\bfilled(?:\s+at)?[\s:]*({DATETIME})")).unwrap();
}
