use crate::rules::{CapacityRules, CapacitySaleConfig};
use sale_core::{admin, events, purchase, storage, vault, whitelist};
use sale_core::{BonusTier, Purchase, SaleError, VaultEntry, VaultStatus};
use soroban_sdk::{contract, contractimpl, contractmeta, Address, Env, Vec};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Allowance-capped private token sale with early bonus vault"
);

#[contract]
pub struct CapacitySaleContract;

#[contractimpl]
impl CapacitySaleContract {
    pub fn initialize(
        env: Env,
        owner: Address,
        config: CapacitySaleConfig,
    ) -> Result<(), SaleError> {
        if storage::is_initialized(&env) {
            return Err(SaleError::AlreadyInitialized);
        }
        owner.require_auth();
        config.validate()?;

        let terms = config.terms();
        storage::set_owner(&env, &owner);
        storage::set_terms(&env, &terms);
        storage::set_wei_raised(&env, 0);

        events::emit_initialized(&env, owner, terms);
        Ok(())
    }

    pub fn contribute(env: Env, payer: Address, value: i128) -> Result<Purchase, SaleError> {
        purchase::buy_tokens::<CapacityRules>(&env, &payer, &payer, value)
    }

    pub fn buy_tokens(
        env: Env,
        payer: Address,
        beneficiary: Address,
        value: i128,
    ) -> Result<Purchase, SaleError> {
        purchase::buy_tokens::<CapacityRules>(&env, &payer, &beneficiary, value)
    }

    /// Whitelist `account` with an individual contribution allowance.
    /// Re-adding an account replaces whatever allowance it had left.
    pub fn add_to_whitelist(
        env: Env,
        owner: Address,
        account: Address,
        allowance: i128,
    ) -> Result<(), SaleError> {
        admin::require_owner(&env, &owner)?;
        whitelist::add_with_allowance(&env, &account, allowance)
    }

    pub fn add_many_to_whitelist(
        env: Env,
        owner: Address,
        entries: Vec<(Address, i128)>,
    ) -> Result<(), SaleError> {
        admin::require_owner(&env, &owner)?;
        for (account, allowance) in entries.iter() {
            whitelist::add_with_allowance(&env, &account, allowance)?;
        }
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

    /// Stop accepting contributions and open the immediate bonus tranche.
    /// Returns the bonus vault balance.
    pub fn close_sale(env: Env, owner: Address) -> Result<i128, SaleError> {
        admin::require_owner(&env, &owner)?;
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

    pub fn remaining_allowance(env: Env, account: Address) -> i128 {
        storage::get_remaining_allowance(&env, &account)
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

    pub fn is_closed(env: Env) -> bool {
        vault::is_finalized(&env)
    }

    pub fn get_config(env: Env) -> Result<CapacitySaleConfig, SaleError> {
        Ok(storage::get_terms(&env)?.into())
    }

    pub fn owner(env: Env) -> Result<Address, SaleError> {
        storage::get_owner(&env)
    }
}
