use crate::*;

#[near]
impl Contract {
    #[init]
    pub fn new(owner_id: AccountId, contract_metadata: Option<LotteryContractMetadata>) -> Self {
        let contract_metadata = contract_metadata.unwrap_or_default();
        if let Err(e) = contract_metadata.validate() {
            env::panic_str(&e.to_string());
        }

        let version = env!("CARGO_PKG_VERSION").to_string();
        events::emit_contract_initialized(&owner_id, &version);

        Self {
            version,
            owner_id,
            tickets: IterableMap::new(StorageKey::Tickets),
            tickets_per_owner: LookupMap::new(StorageKey::TicketsPerOwner),
            next_token_id: 0,
            contract_metadata,
        }
    }

    #[payable]
    #[handle_result]
    pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), LotteryError> {
        self.check_owner_call()?;
        if new_owner == self.owner_id {
            return Err(LotteryError::InvalidInput(
                "New owner must differ from current owner".to_string(),
            ));
        }
        let old_owner = self.owner_id.clone();
        self.owner_id = new_owner;
        events::emit_owner_transferred(&old_owner, &self.owner_id);
        Ok(())
    }

    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    pub fn get_version(&self) -> String {
        self.version.clone()
    }
}
