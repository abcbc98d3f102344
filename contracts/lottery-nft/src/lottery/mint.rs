use crate::*;

#[near]
impl Contract {
    /// Mints the next ticket to `player`. Owner only; returns the new token id.
    #[payable]
    #[handle_result]
    pub fn new_lottery_item(
        &mut self,
        player: AccountId,
        lottery_numbers: LotteryNumbers,
        amount: U128,
        issue_index: U64,
    ) -> Result<TokenId, LotteryError> {
        self.check_owner_call()?;
        let minter_id = env::predecessor_account_id();
        self.mint_ticket(&minter_id, player, lottery_numbers, amount.0, issue_index.0)
    }
}

impl Contract {
    pub(crate) fn mint_ticket(
        &mut self,
        minter_id: &AccountId,
        player: AccountId,
        lottery_numbers: LotteryNumbers,
        amount: u128,
        issue_index: u64,
    ) -> Result<TokenId, LotteryError> {
        let id = self
            .next_token_id
            .checked_add(1)
            .ok_or_else(|| LotteryError::InternalError("Token ID counter overflow".into()))?;
        let token_id = id.to_string();

        if self.tickets.contains_key(&token_id) {
            return Err(LotteryError::InvalidState(
                "Token ID already exists".into(),
            ));
        }
        self.next_token_id = id;

        let ticket = LotteryTicket {
            owner_id: player.clone(),
            lottery_numbers,
            amount,
            issue_index,
            claimed: false,
            minted_at: env::block_timestamp(),
        };
        self.tickets.insert(token_id.clone(), ticket);
        self.add_token_to_owner(&player, &token_id);

        events::emit_mint(player.as_str(), &[token_id.as_str()], None);
        events::emit_ticket_minted(
            minter_id,
            &player,
            &token_id,
            &lottery_numbers,
            amount,
            issue_index,
        );
        Ok(token_id)
    }
}
