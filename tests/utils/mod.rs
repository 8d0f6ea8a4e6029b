//! Testing utilities shared by the cross-contract scenarios
pub mod assertions;
pub mod test_fixtures;

pub use test_fixtures::*;

/// Common test constants
pub mod constants {
    pub const ETHER: i128 = 1_000_000_000_000_000_000;
    pub const RATE: i128 = 8_000;
    pub const MIN_CONTRIBUTION: i128 = ETHER / 2;
    pub const SALE_SUPPLY: i128 = 400_000_000 * ETHER;
    pub const BUYER_FUNDS: i128 = 1_000 * ETHER;
    pub const OPENING: u64 = 1_000_000;
    pub const WEEK: u64 = 7 * 24 * 60 * 60;
    pub const CLOSING: u64 = OPENING + 5 * WEEK;
}
