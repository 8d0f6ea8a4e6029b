use sale_core::bonus;
use sale_core::purchase::SaleRules;
use sale_core::{storage, vault, BonusRates, SaleError, SaleTerms};
use soroban_sdk::{contracttype, Address, Env};

/// Deployment parameters of a timed sale.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct TimedSaleConfig {
    pub opening_time: u64,
    pub closing_time: u64,
    pub phase_duration: u64, // width of each bonus phase window
    pub rate: i128,
    pub cap: i128, // ceiling on total accepted value
    pub min_contribution: i128,
    pub collection_wallet: Address,
    pub issuing_address: Address,
    pub token: Address,
    pub payment_token: Address,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleWindow {
    pub opening_time: u64,
    pub closing_time: u64,
    pub phase_duration: u64,
    pub cap: i128,
}

#[contracttype]
pub enum TimedKey {
    Window,
}

impl TimedSaleConfig {
    pub fn validate(&self) -> Result<(), SaleError> {
        if self.opening_time >= self.closing_time
            || self.phase_duration == 0
            || self.rate <= 0
            || self.cap <= 0
            || self.min_contribution < 0
        {
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

    pub fn window(&self) -> SaleWindow {
        SaleWindow {
            opening_time: self.opening_time,
            closing_time: self.closing_time,
            phase_duration: self.phase_duration,
            cap: self.cap,
        }
    }

    pub fn from_parts(terms: SaleTerms, window: SaleWindow) -> Self {
        TimedSaleConfig {
            opening_time: window.opening_time,
            closing_time: window.closing_time,
            phase_duration: window.phase_duration,
            rate: terms.rate,
            cap: window.cap,
            min_contribution: terms.min_contribution,
            collection_wallet: terms.collection_wallet,
            issuing_address: terms.issuing_address,
            token: terms.token,
            payment_token: terms.payment_token,
        }
    }
}

pub fn get_window(env: &Env) -> Result<SaleWindow, SaleError> {
    env.storage()
        .instance()
        .get(&TimedKey::Window)
        .ok_or(SaleError::NotInitialized)
}

pub fn set_window(env: &Env, window: &SaleWindow) {
    env.storage().instance().set(&TimedKey::Window, window);
}

pub fn is_open(env: &Env, window: &SaleWindow) -> bool {
    let now = env.ledger().timestamp();
    now >= window.opening_time && now < window.closing_time && !vault::is_finalized(env)
}

pub fn has_closed(env: &Env, window: &SaleWindow) -> bool {
    env.ledger().timestamp() >= window.closing_time
}

/// Time window, aggregate cap and calendar bonus phases.
pub struct TimedRules;

impl SaleRules for TimedRules {
    fn ensure_open(env: &Env) -> Result<(), SaleError> {
        let window = get_window(env)?;
        if env.ledger().timestamp() < window.opening_time {
            return Err(SaleError::SaleNotYetOpen);
        }
        if !is_open(env, &window) {
            return Err(SaleError::SaleClosed);
        }
        Ok(())
    }

    fn remaining_cap(env: &Env, _beneficiary: &Address) -> Result<i128, SaleError> {
        let window = get_window(env)?;
        Ok(window.cap - storage::get_wei_raised(env))
    }

    fn consume_cap(_env: &Env, _beneficiary: &Address, _value: i128) -> Result<(), SaleError> {
        // Aggregate cap is tracked through total raised.
        Ok(())
    }

    fn bonus_rates(env: &Env) -> Result<BonusRates, SaleError> {
        let window = get_window(env)?;
        Ok(bonus::timed_rates(
            window.opening_time,
            window.phase_duration,
            env.ledger().timestamp(),
        ))
    }
}
