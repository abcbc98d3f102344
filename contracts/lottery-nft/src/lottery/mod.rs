mod burn;
mod claim;
mod mint;
mod ownership;
mod types;
mod views;

pub use types::{LotteryNumbers, LotteryTicket, TicketView};
