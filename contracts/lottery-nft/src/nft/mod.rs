mod enumeration;
mod metadata;
mod token;

pub use metadata::{LotteryContractMetadata, Token, TokenMetadata};
