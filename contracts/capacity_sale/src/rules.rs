use sale_core::bonus::EARLY_RATES;
use sale_core::purchase::SaleRules;
use sale_core::{storage, vault, BonusRates, SaleError, SaleTerms};
use soroban_sdk::{contracttype, Address, Env};

/// Deployment parameters of a capacity sale. There is no time window; the
/// owner closes the sale explicitly.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct CapacitySaleConfig {
    pub rate: i128,
    pub min_contribution: i128,
    pub collection_wallet: Address,
    pub issuing_address: Address,
    pub token: Address,
    pub payment_token: Address,
}

impl CapacitySaleConfig {
    pub fn validate(&self) -> Result<(), SaleError> {
        if self.rate <= 0 || self.min_contribution < 0 {
            return Err(SaleError::InvalidConfig);
        }
        Ok(())
    }

    pub fn terms(&self) -> SaleTerms {
        SaleTerms {
            rate: self.rate,
            min_contribution: self.min_contribution,
            collection_wallet: self.collection_wallet.clone(),
            issuing_address: self.issuing_address.clone(),
            token: self.token.clone(),
            payment_token: self.payment_token.clone(),
        }
    }
}

impl From<SaleTerms> for CapacitySaleConfig {
    fn from(terms: SaleTerms) -> Self {
        CapacitySaleConfig {
            rate: terms.rate,
            min_contribution: terms.min_contribution,
            collection_wallet: terms.collection_wallet,
            issuing_address: terms.issuing_address,
            token: terms.token,
            payment_token: terms.payment_token,
        }
    }
}

/// Per-beneficiary allowances and a flat early bonus.
pub struct CapacityRules;

impl SaleRules for CapacityRules {
    fn ensure_open(env: &Env) -> Result<(), SaleError> {
        if vault::is_finalized(env) {
            return Err(SaleError::SaleClosed);
        }
        Ok(())
    }

    fn remaining_cap(env: &Env, beneficiary: &Address) -> Result<i128, SaleError> {
        Ok(storage::get_remaining_allowance(env, beneficiary))
    }

    fn consume_cap(env: &Env, beneficiary: &Address, value: i128) -> Result<(), SaleError> {
        let remaining = storage::get_remaining_allowance(env, beneficiary)
            .checked_sub(value)
            .ok_or(SaleError::Overflow)?;
        if remaining < 0 {
            return Err(SaleError::CapExceeded);
        }
        storage::set_remaining_allowance(env, beneficiary, remaining);
        Ok(())
    }

    fn bonus_rates(_env: &Env) -> Result<BonusRates, SaleError> {
        Ok(EARLY_RATES)
    }
}
