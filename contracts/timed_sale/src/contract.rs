use crate::schedule::{self, TimedRules, TimedSaleConfig};
use sale_core::{admin, events, purchase, storage, vault, whitelist};
use sale_core::{BonusRates, BonusTier, Purchase, SaleError, VaultEntry, VaultStatus};
use soroban_sdk::{contract, contractimpl, contractmeta, Address, Env, Vec};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Timed whitelisted token sale with phased bonus vault"
);

#[contract]
pub struct TimedSaleContract;

#[contractimpl]
impl TimedSaleContract {
    /// Initialize the sale; the issuing address must separately approve this
    /// contract on the token ledger before contributions can succeed.
    pub fn initialize(env: Env, owner: Address, config: TimedSaleConfig) -> Result<(), SaleError> {
        if storage::is_initialized(&env) {
            return Err(SaleError::AlreadyInitialized);
        }
        owner.require_auth();
        config.validate()?;

        let terms = config.terms();
        storage::set_owner(&env, &owner);
        storage::set_terms(&env, &terms);
        storage::set_wei_raised(&env, 0);
        schedule::set_window(&env, &config.window());

        events::emit_initialized(&env, owner, terms);
        Ok(())
    }

    /// Contribute `value` with the payer as beneficiary.
    pub fn contribute(env: Env, payer: Address, value: i128) -> Result<Purchase, SaleError> {
        purchase::buy_tokens::<TimedRules>(&env, &payer, &payer, value)
    }

    /// Contribute `value` paid by `payer` for `beneficiary`.
    pub fn buy_tokens(
        env: Env,
        payer: Address,
        beneficiary: Address,
        value: i128,
    ) -> Result<Purchase, SaleError> {
        purchase::buy_tokens::<TimedRules>(&env, &payer, &beneficiary, value)
    }

    pub fn add_to_whitelist(env: Env, owner: Address, account: Address) -> Result<(), SaleError> {
        admin::require_owner(&env, &owner)?;
        whitelist::add(&env, &account);
        Ok(())
    }

    pub fn add_many_to_whitelist(
        env: Env,
        owner: Address,
        accounts: Vec<Address>,
    ) -> Result<(), SaleError> {
        admin::require_owner(&env, &owner)?;
        whitelist::add_many(&env, &accounts);
        Ok(())
    }

    pub fn remove_from_whitelist(
        env: Env,
        owner: Address,
        account: Address,
    ) -> Result<(), SaleError> {
        admin::require_owner(&env, &owner)?;
        whitelist::remove(&env, &account);
        Ok(())
    }

    /// Finalize after closing time, opening the immediate bonus tranche.
    /// Returns the bonus vault balance.
    pub fn finalize(env: Env, owner: Address) -> Result<i128, SaleError> {
        admin::require_owner(&env, &owner)?;
        if vault::is_finalized(&env) {
            return Err(SaleError::AlreadyFinalized);
        }
        let window = schedule::get_window(&env)?;
        if !schedule::has_closed(&env, &window) {
            return Err(SaleError::SaleStillOpen);
        }

        let vault_balance = vault::mark_finalized(&env)?;
        events::emit_finalized(&env, storage::get_wei_raised(&env), vault_balance);
        Ok(vault_balance)
    }

    pub fn unlock_secondary_tokens(env: Env, owner: Address) -> Result<(), SaleError> {
        admin::require_owner(&env, &owner)?;
        vault::unlock_secondary(&env)
    }

    pub fn claim_bonus_tokens(env: Env, beneficiary: Address) -> Result<i128, SaleError> {
        vault::release(&env, &beneficiary, BonusTier::Immediate)
    }

    pub fn claim_locked_bonus_tokens(env: Env, beneficiary: Address) -> Result<i128, SaleError> {
        vault::release(&env, &beneficiary, BonusTier::Locked)
    }

    pub fn transfer_ownership(env: Env, owner: Address, new_owner: Address) -> Result<(), SaleError> {
        admin::transfer_ownership(&env, &owner, &new_owner)
    }

    // View functions
    pub fn is_whitelisted(env: Env, account: Address) -> bool {
        storage::is_whitelisted(&env, &account)
    }

    pub fn get_bonus_vault_balance(env: Env) -> i128 {
        vault::balance(&env)
    }

    pub fn get_vault_entry(env: Env, beneficiary: Address) -> VaultEntry {
        vault::entry(&env, &beneficiary)
    }

    pub fn get_vault_status(env: Env) -> VaultStatus {
        vault::status(&env)
    }

    pub fn wei_raised(env: Env) -> i128 {
        storage::get_wei_raised(&env)
    }

    pub fn is_open(env: Env) -> bool {
        schedule::get_window(&env)
            .map(|window| schedule::is_open(&env, &window))
            .unwrap_or(false)
    }

    pub fn has_closed(env: Env) -> bool {
        schedule::get_window(&env)
            .map(|window| schedule::has_closed(&env, &window))
            .unwrap_or(false)
    }

    pub fn is_finalized(env: Env) -> bool {
        vault::is_finalized(&env)
    }

    pub fn current_bonus_rates(env: Env) -> Result<BonusRates, SaleError> {
        <TimedRules as purchase::SaleRules>::bonus_rates(&env)
    }

    pub fn get_config(env: Env) -> Result<TimedSaleConfig, SaleError> {
        let terms = storage::get_terms(&env)?;
        let window = schedule::get_window(&env)?;
        Ok(TimedSaleConfig::from_parts(terms, window))
    }

    pub fn owner(env: Env) -> Result<Address, SaleError> {
        storage::get_owner(&env)
    }
}
