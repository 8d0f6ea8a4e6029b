#![no_std]

mod contract;
mod errors;
mod events;
mod storage;


pub use contract::{SaleToken, SaleTokenClient};
pub use errors::TokenError;
pub use storage::TokenMetadata;
