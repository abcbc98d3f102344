mod builder;
mod types;

mod contract;
mod lottery;
mod nep171;

pub use contract::*;
pub use lottery::*;
pub use nep171::*;

pub(crate) const STANDARD: &str = "lottery";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const LOTTERY: &str = "LOTTERY_UPDATE";
pub(crate) const CONTRACT: &str = "CONTRACT_UPDATE";
