pub mod config_loader;
pub mod domain;
pub mod infrastructure;

pub use domain::constants::*;
pub use domain::enums::*;
pub use domain::errors::*;
pub use domain::model::message::*;
pub use domain::model::raw::*;
pub use domain::model::trade::*;
pub use domain::traits::*;
pub use infrastructure::email::*;
pub use infrastructure::ingest::*;
pub use infrastructure::sink::*;
