use crate::*;

#[near]
impl Contract {
    #[payable]
    #[handle_result]
    pub fn claim_reward(&mut self, token_id: TokenId) -> Result<(), LotteryError> {
        self.check_owner_call()?;
        self.mark_claimed(&token_id)?;

        events::emit_reward_claimed(&self.owner_id, &[token_id.as_str()]);
        events::emit_metadata_update(&[token_id.as_str()]);
        Ok(())
    }

    /// All-or-nothing: one unknown or already claimed id rejects the whole batch.
    #[payable]
    #[handle_result]
    pub fn multi_claim_reward(&mut self, token_ids: Vec<TokenId>) -> Result<(), LotteryError> {
        self.check_owner_call()?;
        if token_ids.is_empty() || token_ids.len() > MAX_BATCH_CLAIM {
            return Err(LotteryError::InvalidInput(format!(
                "Batch size must be 1-{}",
                MAX_BATCH_CLAIM
            )));
        }
        for (i, token_id) in token_ids.iter().enumerate() {
            if token_ids[..i].contains(token_id) {
                return Err(LotteryError::InvalidInput(format!(
                    "Duplicate token ID in batch: {}",
                    token_id
                )));
            }
            if self.ticket_or_err(token_id)?.claimed {
                return Err(LotteryError::already_claimed(token_id));
            }
        }
        for token_id in &token_ids {
            self.mark_claimed(token_id)?;
        }

        let ids: Vec<&str> = token_ids.iter().map(String::as_str).collect();
        events::emit_reward_claimed(&self.owner_id, &ids);
        events::emit_metadata_update(&ids);
        Ok(())
    }

    pub fn get_claim_status(&self, token_id: TokenId) -> Option<bool> {
        self.tickets.get(&token_id).map(|ticket| ticket.claimed)
    }
}

impl Contract {
    fn mark_claimed(&mut self, token_id: &str) -> Result<(), LotteryError> {
        let ticket = self
            .tickets
            .get_mut(token_id)
            .ok_or_else(|| LotteryError::ticket_not_found(token_id))?;
        if ticket.claimed {
            return Err(LotteryError::already_claimed(token_id));
        }
        ticket.claimed = true;
        Ok(())
    }
}
