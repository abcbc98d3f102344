use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_ENGINE;
use near_sdk::serde_json::json;

use super::svg::{render_ticket_svg, ticket_description};
use crate::*;

pub(crate) const SVG_DATA_URI_PREFIX: &str = "data:image/svg+xml;base64,";
pub(crate) const JSON_DATA_URI_PREFIX: &str = "data:application/json;base64,";

pub(crate) fn svg_data_uri(token_id: &str, ticket: &LotteryTicket) -> String {
    format!(
        "{SVG_DATA_URI_PREFIX}{}",
        BASE64_ENGINE.encode(render_ticket_svg(token_id, ticket))
    )
}

pub(crate) fn token_uri_for(
    token_id: &str,
    ticket: &LotteryTicket,
    collection_name: &str,
) -> String {
    let numbers: Vec<String> = ticket.lottery_numbers.iter().map(u8::to_string).collect();
    let document = json!({
        "name": format!("{} #{}", collection_name, token_id),
        "description": ticket_description(ticket),
        "image": svg_data_uri(token_id, ticket),
        "attributes": [
            { "trait_type": "Issue", "value": ticket.issue_index.to_string() },
            { "trait_type": "Numbers", "value": numbers.join("-") },
            { "trait_type": "Amount", "value": ticket.amount.to_string() },
            { "trait_type": "Claimed", "value": ticket.claimed },
        ],
    });
    format!(
        "{JSON_DATA_URI_PREFIX}{}",
        BASE64_ENGINE.encode(document.to_string())
    )
}

#[near]
impl Contract {
    /// Self-contained metadata document for a ticket as a base64 JSON data URI.
    #[handle_result]
    pub fn token_uri(&self, token_id: TokenId) -> Result<String, LotteryError> {
        let ticket = self.ticket_or_err(&token_id)?;
        Ok(token_uri_for(
            &token_id,
            ticket,
            &self.contract_metadata.name,
        ))
    }
}
