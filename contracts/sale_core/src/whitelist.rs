use crate::errors::SaleError;
use crate::{events, storage};
use soroban_sdk::{log, Address, Env, Vec};

pub fn add(env: &Env, account: &Address) {
    storage::set_whitelisted(env, account);
    events::emit_whitelisted(env, account.clone(), None);
}

pub fn add_many(env: &Env, accounts: &Vec<Address>) {
    for account in accounts.iter() {
        add(env, &account);
    }
}

/// Whitelists `account` with an individual contribution allowance, replacing
/// any allowance left from an earlier entry.
pub fn add_with_allowance(env: &Env, account: &Address, allowance: i128) -> Result<(), SaleError> {
    if allowance < 0 {
        return Err(SaleError::InvalidConfig);
    }
    storage::set_whitelisted(env, account);
    storage::set_remaining_allowance(env, account, allowance);
    events::emit_whitelisted(env, account.clone(), Some(allowance));
    Ok(())
}

pub fn remove(env: &Env, account: &Address) {
    storage::remove_whitelisted(env, account);
    storage::remove_remaining_allowance(env, account);
    events::emit_whitelist_removed(env, account.clone());
}

pub fn ensure_whitelisted(env: &Env, account: &Address) -> Result<(), SaleError> {
    if !storage::is_whitelisted(env, account) {
        log!(env, "beneficiary not whitelisted", account.clone());
        return Err(SaleError::NotWhitelisted);
    }
    Ok(())
}
