pub mod message;
pub mod raw;
pub mod trade;

pub use message::EmailMessage;
pub use raw::{RawFillConfirm, RawLeg};
pub use trade::{FieldDiff, Leg, TradeRecord};
