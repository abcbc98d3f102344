use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::LOTTERY;

pub fn emit_ticket_minted(
    minter_id: &AccountId,
    player_id: &AccountId,
    token_id: &str,
    lottery_numbers: &[u8],
    amount: u128,
    issue_index: u64,
) {
    EventBuilder::new(LOTTERY, "ticket_minted", minter_id)
        .field("player_id", player_id)
        .field("token_id", token_id)
        .field("lottery_numbers", lottery_numbers)
        .field("amount", amount)
        .field("issue_index", issue_index)
        .emit();
}

pub fn emit_reward_claimed(owner_id: &AccountId, token_ids: &[&str]) {
    EventBuilder::new(LOTTERY, "reward_claimed", owner_id)
        .field("token_ids", token_ids)
        .emit();
}

pub fn emit_ticket_burned(owner_id: &AccountId, ticket_owner_id: &AccountId, token_id: &str) {
    EventBuilder::new(LOTTERY, "ticket_burned", owner_id)
        .field("ticket_owner_id", ticket_owner_id)
        .field("token_id", token_id)
        .emit();
}
