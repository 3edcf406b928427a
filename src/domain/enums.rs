use serde::{Serialize, Deserialize, Serializer};
use anyhow::{Result, anyhow};

// The broker prints these title-cased in both the email text and the export
// shape, so the variant names double as the wire strings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub enum TradeAction {
    Bought,
    Sold,
}

// Custom serialization for TradeAction so the export carries the exact
// title-case strings downstream stores compare against
impl Serialize for TradeAction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            TradeAction::Bought => serializer.serialize_str("Bought"),
            TradeAction::Sold => serializer.serialize_str("Sold"),
        }
    }
}

impl TradeAction {
    pub fn from_str(s: &str) -> Result<Self> {
        match s {
            "Bought" => Ok(TradeAction::Bought),
            "Sold" => Ok(TradeAction::Sold),
            _ => Err(anyhow!("Unknown trade action: {}", s)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub enum OptionType {
    Put,
    Call,
}

// Custom serialization for OptionType
impl Serialize for OptionType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            OptionType::Put => serializer.serialize_str("Put"),
            OptionType::Call => serializer.serialize_str("Call"),
        }
    }
}

impl OptionType {
    pub fn from_str(s: &str) -> Result<Self> {
        match s {
            "Put" => Ok(OptionType::Put),
            "Call" => Ok(OptionType::Call),
            _ => Err(anyhow!("Unknown option type: {}", s)),
        }
    }
}
