use crate::errors::SaleError;
use crate::types::*;
use soroban_sdk::{Address, Env};

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Terms)
}

pub fn get_terms(env: &Env) -> Result<SaleTerms, SaleError> {
    env.storage()
        .instance()
        .get(&DataKey::Terms)
        .ok_or(SaleError::NotInitialized)
}

pub fn set_terms(env: &Env, terms: &SaleTerms) {
    env.storage().instance().set(&DataKey::Terms, terms);
}

pub fn get_owner(env: &Env) -> Result<Address, SaleError> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(SaleError::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_wei_raised(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::WeiRaised)
        .unwrap_or(0)
}

pub fn set_wei_raised(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::WeiRaised, &amount);
}

pub fn get_vault_status(env: &Env) -> VaultStatus {
    env.storage()
        .instance()
        .get(&DataKey::Vault)
        .unwrap_or_default()
}

pub fn set_vault_status(env: &Env, status: &VaultStatus) {
    env.storage().instance().set(&DataKey::Vault, status);
}

pub fn get_vault_entry(env: &Env, beneficiary: &Address) -> VaultEntry {
    env.storage()
        .persistent()
        .get(&DataKey::VaultEntry(beneficiary.clone()))
        .unwrap_or_default()
}

pub fn set_vault_entry(env: &Env, beneficiary: &Address, entry: &VaultEntry) {
    env.storage()
        .persistent()
        .set(&DataKey::VaultEntry(beneficiary.clone()), entry);
}

pub fn is_whitelisted(env: &Env, account: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Whitelisted(account.clone()))
        .unwrap_or(false)
}

pub fn set_whitelisted(env: &Env, account: &Address) {
    env.storage()
        .persistent()
        .set(&DataKey::Whitelisted(account.clone()), &true);
}

pub fn remove_whitelisted(env: &Env, account: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Whitelisted(account.clone()));
}

pub fn get_remaining_allowance(env: &Env, account: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::RemainingAllowance(account.clone()))
        .unwrap_or(0)
}

pub fn set_remaining_allowance(env: &Env, account: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::RemainingAllowance(account.clone()), &amount);
}

pub fn remove_remaining_allowance(env: &Env, account: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::RemainingAllowance(account.clone()));
}
