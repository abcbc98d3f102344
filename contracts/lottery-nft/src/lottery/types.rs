use near_sdk::json_types::{U64, U128};
use near_sdk::{AccountId, near};

use crate::LOTTERY_NUMBER_COUNT;

/// The four numbers drawn on a ticket, in the order the player picked them.
pub type LotteryNumbers = [u8; LOTTERY_NUMBER_COUNT];

#[near(serializers = [borsh])]
#[derive(Clone, Debug, PartialEq)]
pub struct LotteryTicket {
    pub owner_id: AccountId,
    pub lottery_numbers: LotteryNumbers,
    pub amount: u128,
    pub issue_index: u64,
    pub claimed: bool,
    pub minted_at: u64,
}

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct TicketView {
    pub token_id: String,
    pub owner_id: AccountId,
    pub lottery_numbers: LotteryNumbers,
    pub amount: U128,
    pub issue_index: U64,
    pub claimed: bool,
    pub minted_at: U64,
}

impl LotteryTicket {
    pub fn to_view(&self, token_id: &str) -> TicketView {
        TicketView {
            token_id: token_id.to_string(),
            owner_id: self.owner_id.clone(),
            lottery_numbers: self.lottery_numbers,
            amount: U128(self.amount),
            issue_index: U64(self.issue_index),
            claimed: self.claimed,
            minted_at: U64(self.minted_at),
        }
    }
}
