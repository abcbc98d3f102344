use crate::guards::{check_memo, check_one_yocto, check_token_id};
use crate::*;

#[near]
impl Contract {
    /// Approvals are not supported; `approval_id` must be `None`.
    #[payable]
    #[handle_result]
    pub fn nft_transfer(
        &mut self,
        receiver_id: AccountId,
        token_id: TokenId,
        approval_id: Option<u64>,
        memo: Option<String>,
    ) -> Result<(), LotteryError> {
        check_one_yocto()?;
        let sender_id = env::predecessor_account_id();

        self.transfer(&sender_id, &receiver_id, &token_id, approval_id, memo)
    }

    pub fn nft_token(&self, token_id: TokenId) -> Option<Token> {
        self.tickets
            .get(&token_id)
            .map(|ticket| ticket.to_token(&token_id, &self.contract_metadata.name))
    }
}

impl Contract {
    pub(crate) fn transfer(
        &mut self,
        sender_id: &AccountId,
        receiver_id: &AccountId,
        token_id: &str,
        approval_id: Option<u64>,
        memo: Option<String>,
    ) -> Result<(), LotteryError> {
        check_token_id(token_id)?;
        check_memo(memo.as_deref())?;
        if approval_id.is_some() {
            return Err(LotteryError::InvalidInput(
                "Approvals are not supported".into(),
            ));
        }

        let mut ticket = self.ticket_or_err(token_id)?.clone();
        if sender_id != &ticket.owner_id {
            return Err(LotteryError::Unauthorized(
                "Sender does not own this ticket".into(),
            ));
        }
        if receiver_id == &ticket.owner_id {
            return Err(LotteryError::InvalidInput(
                "Receiver must differ from current owner".into(),
            ));
        }

        let old_owner_id = ticket.owner_id.clone();
        self.remove_token_from_owner(&old_owner_id, token_id);

        ticket.owner_id = receiver_id.clone();
        self.add_token_to_owner(receiver_id, token_id);
        self.tickets.insert(token_id.to_string(), ticket);

        events::emit_transfer(
            old_owner_id.as_str(),
            receiver_id.as_str(),
            &[token_id],
            None,
            memo.as_deref(),
        );
        Ok(())
    }
}
