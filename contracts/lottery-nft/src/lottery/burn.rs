use crate::*;

#[near]
impl Contract {
    /// Owner only. Supply drops by one; the burned id is never issued again.
    #[payable]
    #[handle_result]
    pub fn burn(&mut self, token_id: TokenId) -> Result<(), LotteryError> {
        self.check_owner_call()?;
        crate::guards::check_token_id(&token_id)?;

        let ticket = self
            .tickets
            .remove(&token_id)
            .ok_or_else(|| LotteryError::ticket_not_found(&token_id))?;
        self.remove_token_from_owner(&ticket.owner_id, &token_id);

        let owner_id = env::predecessor_account_id();
        events::emit_burn(
            ticket.owner_id.as_str(),
            &[token_id.as_str()],
            Some(owner_id.as_str()),
            None,
        );
        events::emit_ticket_burned(&owner_id, &ticket.owner_id, &token_id);
        Ok(())
    }
}
