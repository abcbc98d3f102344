use crate::*;

fn page_bounds(from_index: Option<U128>, limit: Option<u64>) -> (usize, usize) {
    let start = from_index
        .map(|i| usize::try_from(i.0).unwrap_or(usize::MAX))
        .unwrap_or(0);
    let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).min(MAX_PAGE_LIMIT) as usize;
    (start, limit)
}

#[near]
impl Contract {
    /// Live tickets only; burned tickets no longer count.
    pub fn nft_total_supply(&self) -> U128 {
        U128(self.tickets.len() as u128)
    }

    pub fn total_supply(&self) -> U128 {
        self.nft_total_supply()
    }

    pub fn nft_tokens(&self, from_index: Option<U128>, limit: Option<u64>) -> Vec<Token> {
        let (start, limit) = page_bounds(from_index, limit);

        self.tickets
            .iter()
            .skip(start)
            .take(limit)
            .map(|(token_id, ticket)| ticket.to_token(token_id, &self.contract_metadata.name))
            .collect()
    }

    pub fn nft_supply_for_owner(&self, account_id: AccountId) -> U128 {
        self.tickets_per_owner
            .get(&account_id)
            .map(|tokens| U128(tokens.len() as u128))
            .unwrap_or(U128(0))
    }

    pub fn nft_tokens_for_owner(
        &self,
        account_id: AccountId,
        from_index: Option<U128>,
        limit: Option<u64>,
    ) -> Vec<Token> {
        let Some(tokens_set) = self.tickets_per_owner.get(&account_id) else {
            return vec![];
        };
        let (start, limit) = page_bounds(from_index, limit);

        tokens_set
            .iter()
            .skip(start)
            .filter_map(|token_id| {
                self.tickets
                    .get(token_id.as_str())
                    .map(|ticket| ticket.to_token(token_id, &self.contract_metadata.name))
            })
            .take(limit)
            .collect()
    }
}
