use soroban_sdk::{contracttype, Address};

/// Denominator for every rate expressed in basis points.
pub const BPS_DENOMINATOR: i128 = 10_000;

/// Terms common to both sale variants, fixed at initialization.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleTerms {
    pub rate: i128, // tokens per unit of contributed value
    pub min_contribution: i128,
    pub collection_wallet: Address,
    pub issuing_address: Address, // holder that approves the sale to pull tokens
    pub token: Address,
    pub payment_token: Address,
}

/// Bonus percentages for one phase, in basis points of the base token amount.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub struct BonusRates {
    pub immediate_bps: u32,
    pub total_bps: u32, // immediate + locked
}

impl BonusRates {
    pub const NONE: BonusRates = BonusRates {
        immediate_bps: 0,
        total_bps: 0,
    };

    pub const fn new(immediate_bps: u32, total_bps: u32) -> Self {
        BonusRates {
            immediate_bps,
            total_bps,
        }
    }

    pub fn locked_bps(&self) -> u32 {
        self.total_bps.saturating_sub(self.immediate_bps)
    }
}

/// Token amounts produced by one accepted contribution.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct Purchase {
    pub base_tokens: i128,
    pub immediate_bonus: i128,
    pub locked_bonus: i128,
}

/// Per-beneficiary bonus balances held back until the release gates open.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct VaultEntry {
    pub immediate_balance: i128,
    pub locked_balance: i128,
    pub immediate_claimed: bool,
    pub locked_claimed: bool,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct VaultStatus {
    pub sale_finalized: bool,
    pub secondary_unlocked: bool,
    pub outstanding_immediate: i128,
    pub outstanding_locked: i128,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum BonusTier {
    Immediate,
    Locked,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Owner,
    Terms,
    WeiRaised,
    Vault,
    VaultEntry(Address),
    Whitelisted(Address),
    RemainingAllowance(Address),
}
