//! Lottery ticket NFT. NEP-171/177/181 compliant, with per-ticket numbers,
//! purchase amount, issue index and reward claim status.

use near_sdk::json_types::{U64, U128};
use near_sdk::store::{IterableMap, IterableSet, LookupMap};
use near_sdk::{AccountId, Gas, NearToken, PanicOnDefault, Promise, env, near};

pub mod constants;
mod errors;
mod guards;
mod storage;

mod events;
mod lottery;
mod nft;
mod render;

mod admin;
mod upgrade;


pub use constants::*;
pub use errors::LotteryError;
pub use lottery::{LotteryNumbers, LotteryTicket, TicketView};
pub use nft::{LotteryContractMetadata, Token, TokenMetadata};
pub use storage::StorageKey;

pub type TokenId = String;

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        standard(standard = "nep171", version = "1.2.0"),
        standard(standard = "nep177", version = "2.0.0"),
        standard(standard = "nep181", version = "1.0.0"),
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,

    pub owner_id: AccountId,

    pub tickets: IterableMap<TokenId, LotteryTicket>,
    pub(crate) tickets_per_owner: LookupMap<AccountId, IterableSet<TokenId>>,
    // Token ids are never reused: the counter only moves forward, burns included.
    pub next_token_id: u64,

    pub contract_metadata: LotteryContractMetadata,
}
