use crate::*;

impl Contract {
    pub(crate) fn add_token_to_owner(&mut self, owner_id: &AccountId, token_id: &str) {
        if !self.tickets_per_owner.contains_key(owner_id) {
            self.tickets_per_owner.insert(
                owner_id.clone(),
                IterableSet::new(StorageKey::TicketsPerOwnerInner {
                    account_id_hash: env::sha256(owner_id.as_bytes()),
                }),
            );
        }
        if let Some(owner_tokens) = self.tickets_per_owner.get_mut(owner_id) {
            owner_tokens.insert(token_id.to_string());
        }
    }

    pub(crate) fn remove_token_from_owner(&mut self, owner_id: &AccountId, token_id: &str) {
        if let Some(owner_tokens) = self.tickets_per_owner.get_mut(owner_id) {
            owner_tokens.remove(token_id);
            if owner_tokens.is_empty() {
                self.tickets_per_owner.remove(owner_id);
            }
        }
    }

    pub(crate) fn ticket_or_err(&self, token_id: &str) -> Result<&LotteryTicket, LotteryError> {
        self.tickets
            .get(token_id)
            .ok_or_else(|| LotteryError::ticket_not_found(token_id))
    }
}
