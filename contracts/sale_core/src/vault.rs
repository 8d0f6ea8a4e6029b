//! Bonus vault: per-beneficiary bonus balances accrued during the sale and
//! released in two tranches behind one-way gates.
//!
//! The immediate tranche opens when the sale is finalized. The locked tranche
//! opens once the owner has triggered the secondary unlock, and never before
//! the sale is finalized, so no balance can change after it has been claimed.

use crate::errors::SaleError;
use crate::ledger::IssuingLedger;
use crate::types::{BonusTier, VaultEntry, VaultStatus};
use crate::{events, storage};
use soroban_sdk::{log, Address, Env};

pub fn credit(
    env: &Env,
    beneficiary: &Address,
    immediate: i128,
    locked: i128,
) -> Result<(), SaleError> {
    let mut status = storage::get_vault_status(env);
    if status.sale_finalized {
        return Err(SaleError::AlreadyFinalized);
    }
    if immediate == 0 && locked == 0 {
        return Ok(());
    }

    let mut entry = storage::get_vault_entry(env, beneficiary);
    entry.immediate_balance = checked_add(entry.immediate_balance, immediate)?;
    entry.locked_balance = checked_add(entry.locked_balance, locked)?;
    status.outstanding_immediate = checked_add(status.outstanding_immediate, immediate)?;
    status.outstanding_locked = checked_add(status.outstanding_locked, locked)?;

    storage::set_vault_entry(env, beneficiary, &entry);
    storage::set_vault_status(env, &status);
    Ok(())
}

/// Opens the immediate tranche and returns the vault balance at that moment.
pub fn mark_finalized(env: &Env) -> Result<i128, SaleError> {
    let mut status = storage::get_vault_status(env);
    if status.sale_finalized {
        return Err(SaleError::AlreadyFinalized);
    }
    status.sale_finalized = true;
    storage::set_vault_status(env, &status);
    Ok(outstanding(&status))
}

pub fn unlock_secondary(env: &Env) -> Result<(), SaleError> {
    let mut status = storage::get_vault_status(env);
    if status.secondary_unlocked {
        return Err(SaleError::AlreadyUnlocked);
    }
    status.secondary_unlocked = true;
    storage::set_vault_status(env, &status);
    events::emit_secondary_unlocked(env);
    Ok(())
}

pub fn is_finalized(env: &Env) -> bool {
    storage::get_vault_status(env).sale_finalized
}

pub fn status(env: &Env) -> VaultStatus {
    storage::get_vault_status(env)
}

/// Bonus tokens accrued and not yet claimed, across both tranches.
pub fn balance(env: &Env) -> i128 {
    outstanding(&storage::get_vault_status(env))
}

pub fn entry(env: &Env, beneficiary: &Address) -> VaultEntry {
    storage::get_vault_entry(env, beneficiary)
}

/// Releases one tranche of `beneficiary`'s bonus from the issuing address.
///
/// Anyone may trigger a release; tokens always go to the beneficiary.
pub fn release(env: &Env, beneficiary: &Address, tier: BonusTier) -> Result<i128, SaleError> {
    let mut status = storage::get_vault_status(env);
    if tier == BonusTier::Locked && !status.secondary_unlocked {
        return Err(SaleError::GateNotOpen);
    }
    if !status.sale_finalized {
        return Err(SaleError::NotYetFinalized);
    }

    let mut entry = storage::get_vault_entry(env, beneficiary);
    let (amount, claimed) = match tier {
        BonusTier::Immediate => (entry.immediate_balance, entry.immediate_claimed),
        BonusTier::Locked => (entry.locked_balance, entry.locked_claimed),
    };
    if claimed {
        return Err(SaleError::AlreadyClaimed);
    }
    if amount <= 0 {
        log!(env, "no bonus accrued", beneficiary.clone());
        return Err(SaleError::NothingToClaim);
    }

    let terms = storage::get_terms(env)?;
    let ledger = IssuingLedger::new(env, &terms);
    ledger.ensure_allowance(amount)?;

    match tier {
        BonusTier::Immediate => {
            entry.immediate_claimed = true;
            status.outstanding_immediate -= amount;
        }
        BonusTier::Locked => {
            entry.locked_claimed = true;
            status.outstanding_locked -= amount;
        }
    }
    storage::set_vault_entry(env, beneficiary, &entry);
    storage::set_vault_status(env, &status);

    ledger.pull(beneficiary, amount)?;
    events::emit_claimed(env, beneficiary.clone(), tier, amount);
    Ok(amount)
}

fn outstanding(status: &VaultStatus) -> i128 {
    status.outstanding_immediate + status.outstanding_locked
}

fn checked_add(a: i128, b: i128) -> Result<i128, SaleError> {
    a.checked_add(b).ok_or(SaleError::Overflow)
}
