use near_sdk::NearToken;

pub const LOTTERY_NUMBER_COUNT: usize = 4;

pub const NFT_METADATA_SPEC: &str = "nft-2.0.0";
pub const DEFAULT_CONTRACT_NAME: &str = "Lottery Ticket";
pub const DEFAULT_CONTRACT_SYMBOL: &str = "LOTTO";

pub const MAX_TOKEN_ID_LEN: usize = 64;
pub const MAX_BATCH_CLAIM: usize = 50;
pub const MAX_MEMO_LEN: usize = 256;

pub const DEFAULT_PAGE_LIMIT: u64 = 50;
pub const MAX_PAGE_LIMIT: u64 = 100;

pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);

pub const GAS_MIGRATE_TGAS: u64 = 200;
