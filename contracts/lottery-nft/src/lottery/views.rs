use crate::*;

#[near]
impl Contract {
    /// `None` for ids that were never minted or have been burned.
    pub fn get_lottery_numbers(&self, token_id: TokenId) -> Option<LotteryNumbers> {
        self.tickets.get(&token_id).map(|ticket| ticket.lottery_numbers)
    }

    pub fn get_lottery_amount(&self, token_id: TokenId) -> Option<U128> {
        self.tickets.get(&token_id).map(|ticket| U128(ticket.amount))
    }

    pub fn get_lottery_issue_index(&self, token_id: TokenId) -> Option<U64> {
        self.tickets.get(&token_id).map(|ticket| U64(ticket.issue_index))
    }

    pub fn get_ticket(&self, token_id: TokenId) -> Option<TicketView> {
        self.tickets
            .get(&token_id)
            .map(|ticket| ticket.to_view(&token_id))
    }
}
