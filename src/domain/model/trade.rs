use std::fmt;
use chrono::NaiveDateTime;
use serde::{Serialize, Deserialize};

use crate::domain::enums::{OptionType, TradeAction};

/// One executed instrument within a (possibly multi-instrument) order
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    /// Whether the leg was bought or sold
    pub action: TradeAction,

    /// Number of contracts or shares executed
    pub quantity: u32,

    /// Underlying ticker
    pub symbol: String,

    /// Option expiry at midnight; absent for equity legs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<NaiveDateTime>,

    /// Put or Call; absent for equity legs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_type: Option<OptionType>,

    /// Strike price; absent for equity legs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strike: Option<f64>,

    /// Execution price for this leg, exactly as the broker printed it
    pub fill_price: f64,

    /// When this leg executed; legs of one order may fill at different times
    pub fill_time: NaiveDateTime,
}

impl Leg {
    /// True when the leg carries option qualifiers
    pub fn is_option(&self) -> bool {
        self.option_type.is_some()
    }
}

/// A parsed fill confirmation: one broker order together with every leg
/// that executed under it. Immutable once assembled; the record owns its
/// legs outright.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    /// Numeric identifier assigned by the broker
    pub order_id: String,

    /// When the broker received the order
    pub date_received: NaiveDateTime,

    /// Broker's textual order description (e.g. "Limit @ 1.10 Credit")
    pub order_type: String,

    /// Executed legs, in the order they appeared in the source text
    pub legs: Vec<Leg>,
}

impl fmt::Display for TradeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TradeRecord {{ order_id: {}, order_type: {}, legs: {} }}",
            self.order_id, self.order_type, self.legs.len())
    }
}

/// One field-level difference between two records, path-addressed
/// (e.g. `legs[1].strike`). Produced by [`TradeRecord::diff`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDiff {
    pub field: String,
    pub left: String,
    pub right: String,
}

impl FieldDiff {
    fn of<T: fmt::Debug>(field: String, left: &T, right: &T) -> Self {
        FieldDiff {
            field,
            left: format!("{:?}", left),
            right: format!("{:?}", right),
        }
    }
}

impl TradeRecord {
    /// Field-by-field comparison against another record. Empty result
    /// means the records are structurally identical. Used by the
    /// reconciliation check that compares independently produced records,
    /// and by tests.
    pub fn diff(&self, other: &TradeRecord) -> Vec<FieldDiff> {
        let mut diffs = Vec::new();

        if self.order_id != other.order_id {
            diffs.push(FieldDiff::of("order_id".to_string(), &self.order_id, &other.order_id));
        }
        if self.date_received != other.date_received {
            diffs.push(FieldDiff::of("date_received".to_string(), &self.date_received, &other.date_received));
        }
        if self.order_type != other.order_type {
            diffs.push(FieldDiff::of("order_type".to_string(), &self.order_type, &other.order_type));
        }
        if self.legs.len() != other.legs.len() {
            diffs.push(FieldDiff::of("legs.len".to_string(), &self.legs.len(), &other.legs.len()));
        }

        for (i, (a, b)) in self.legs.iter().zip(other.legs.iter()).enumerate() {
            if a.action != b.action {
                diffs.push(FieldDiff::of(format!("legs[{}].action", i), &a.action, &b.action));
            }
            if a.quantity != b.quantity {
                diffs.push(FieldDiff::of(format!("legs[{}].quantity", i), &a.quantity, &b.quantity));
            }
            if a.symbol != b.symbol {
                diffs.push(FieldDiff::of(format!("legs[{}].symbol", i), &a.symbol, &b.symbol));
            }
            if a.expiration != b.expiration {
                diffs.push(FieldDiff::of(format!("legs[{}].expiration", i), &a.expiration, &b.expiration));
            }
            if a.option_type != b.option_type {
                diffs.push(FieldDiff::of(format!("legs[{}].option_type", i), &a.option_type, &b.option_type));
            }
            if a.strike != b.strike {
                diffs.push(FieldDiff::of(format!("legs[{}].strike", i), &a.strike, &b.strike));
            }
            if a.fill_price != b.fill_price {
                diffs.push(FieldDiff::of(format!("legs[{}].fill_price", i), &a.fill_price, &b.fill_price));
            }
            if a.fill_time != b.fill_time {
                diffs.push(FieldDiff::of(format!("legs[{}].fill_time", i), &a.fill_time, &b.fill_time));
            }
        }

        diffs
    }
}
