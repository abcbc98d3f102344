use near_sdk::json_types::Base64VecU8;
use near_sdk::serde_json::json;

use crate::*;

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct LotteryContractMetadata {
    pub spec: String,
    pub name: String,
    pub symbol: String,
    pub icon: Option<String>,
    pub base_uri: Option<String>,
    pub reference: Option<String>,
    pub reference_hash: Option<Base64VecU8>,
}

impl Default for LotteryContractMetadata {
    fn default() -> Self {
        Self {
            spec: NFT_METADATA_SPEC.to_string(),
            name: DEFAULT_CONTRACT_NAME.to_string(),
            symbol: DEFAULT_CONTRACT_SYMBOL.to_string(),
            icon: None,
            base_uri: None,
            reference: None,
            reference_hash: None,
        }
    }
}

impl LotteryContractMetadata {
    pub(crate) fn validate(&self) -> Result<(), LotteryError> {
        if self.spec != NFT_METADATA_SPEC {
            return Err(LotteryError::InvalidInput(format!(
                "Metadata spec must be {}",
                NFT_METADATA_SPEC
            )));
        }
        if self.name.is_empty() || self.symbol.is_empty() {
            return Err(LotteryError::InvalidInput(
                "Contract name and symbol cannot be empty".into(),
            ));
        }
        Ok(())
    }
}

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct TokenMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub media: Option<String>,
    pub media_hash: Option<Base64VecU8>,
    pub copies: Option<u64>,
    pub issued_at: Option<u64>,
    pub expires_at: Option<u64>,
    pub starts_at: Option<u64>,
    pub updated_at: Option<u64>,
    pub extra: Option<String>,
    pub reference: Option<String>,
    pub reference_hash: Option<Base64VecU8>,
}

#[near(serializers = [json])]
#[derive(Clone, Debug)]
pub struct Token {
    pub token_id: TokenId,
    pub owner_id: AccountId,
    pub metadata: Option<TokenMetadata>,
    pub approved_account_ids: Option<std::collections::HashMap<AccountId, u64>>,
}

impl LotteryTicket {
    /// NEP-177 view of a ticket, titled after the current collection name.
    /// `media` is the rendered SVG so wallets need no off-chain fetch.
    pub(crate) fn token_metadata(&self, token_id: &str, collection_name: &str) -> TokenMetadata {
        let extra = json!({
            "lottery_numbers": self.lottery_numbers,
            "amount": self.amount.to_string(),
            "issue_index": self.issue_index.to_string(),
            "claimed": self.claimed,
        });
        TokenMetadata {
            title: Some(format!("{} #{}", collection_name, token_id)),
            description: Some(render::ticket_description(self)),
            media: Some(render::svg_data_uri(token_id, self)),
            media_hash: None,
            copies: Some(1),
            issued_at: Some(self.minted_at),
            expires_at: None,
            starts_at: None,
            updated_at: None,
            extra: Some(extra.to_string()),
            reference: None,
            reference_hash: None,
        }
    }

    pub(crate) fn to_token(&self, token_id: &str, collection_name: &str) -> Token {
        Token {
            token_id: token_id.to_string(),
            owner_id: self.owner_id.clone(),
            metadata: Some(self.token_metadata(token_id, collection_name)),
            approved_account_ids: Some(std::collections::HashMap::new()),
        }
    }
}

#[near]
impl Contract {
    pub fn nft_metadata(&self) -> LotteryContractMetadata {
        self.contract_metadata.clone()
    }

    #[payable]
    #[handle_result]
    pub fn set_contract_metadata(
        &mut self,
        metadata: LotteryContractMetadata,
    ) -> Result<(), LotteryError> {
        self.check_owner_call()?;
        metadata.validate()?;
        self.contract_metadata = metadata;

        let meta = &self.contract_metadata;
        events::emit_contract_metadata_updated(
            &self.owner_id,
            &meta.name,
            &meta.symbol,
            meta.base_uri.as_deref(),
        );
        events::emit_contract_metadata_update();
        Ok(())
    }
}
