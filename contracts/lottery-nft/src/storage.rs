use near_sdk::BorshStorageKey;
use near_sdk::near;

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    Tickets,
    TicketsPerOwner,
    TicketsPerOwnerInner { account_id_hash: Vec<u8> },
}
