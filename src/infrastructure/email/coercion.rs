//! String-to-typed conversions shared by the extractor (to verify a
//! captured value will coerce) and the assembler (to build the record).

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Accepted timestamp layouts, tried in order. The eastern-time forms keep
/// the broker's literal `EST` suffix; no zone conversion is applied.
pub const DATETIME_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%b %d, %Y %I:%M:%S %p EST",
    "%B %d, %Y %I:%M:%S %p EST",
];

/// Accepted expiration-date layouts, tried in order.
pub const DATE_LAYOUTS: &[&str] = &[
    "%m/%d/%y",
    "%m/%d/%Y",
    "%b %d %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%B %d, %Y",
];

pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    DATETIME_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(value, layout).ok())
}

/// Expiration dates carry no clock component; midnight is used.
pub fn parse_expiration(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    DATE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDate::parse_from_str(value, layout).ok())
        .map(|date| date.and_time(NaiveTime::MIN))
}

pub fn parse_quantity(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok()
}

pub fn parse_price(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|price| price.is_finite())
}
