use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::CONTRACT;

pub fn emit_contract_initialized(owner_id: &AccountId, version: &str) {
    EventBuilder::new(CONTRACT, "contract_initialized", owner_id)
        .field("version", version)
        .emit();
}

pub fn emit_contract_upgraded(contract_id: &AccountId, old_version: &str, new_version: &str) {
    EventBuilder::new(CONTRACT, "contract_upgrade", contract_id)
        .field("old_version", old_version)
        .field("new_version", new_version)
        .emit();
}

pub fn emit_owner_transferred(old_owner: &AccountId, new_owner: &AccountId) {
    EventBuilder::new(CONTRACT, "owner_transferred", old_owner)
        .field("old_owner", old_owner)
        .field("new_owner", new_owner)
        .emit();
}

pub fn emit_contract_metadata_updated(
    owner_id: &AccountId,
    name: &str,
    symbol: &str,
    base_uri: Option<&str>,
) {
    EventBuilder::new(CONTRACT, "contract_metadata_updated", owner_id)
        .field("name", name)
        .field("symbol", symbol)
        .field_opt("base_uri", base_uri)
        .emit();
}
