use crate::types::{BonusTier, SaleTerms};
use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

/// First topic of every event published by a sale controller.
pub const SALE_TOPIC: Symbol = symbol_short!("SALE");

pub const INIT: Symbol = symbol_short!("INIT");
pub const WL_ADD: Symbol = symbol_short!("WL_ADD");
pub const WL_REMOVE: Symbol = symbol_short!("WL_REMOVE");
pub const PURCHASE: Symbol = symbol_short!("PURCHASE");
pub const FINALIZE: Symbol = symbol_short!("FINALIZE");
pub const UNLOCK: Symbol = symbol_short!("UNLOCK");
pub const CLAIM: Symbol = symbol_short!("CLAIM");
pub const OWNER: Symbol = symbol_short!("OWNER");

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct WhitelistEvent {
    pub account: Address,
    pub allowance: Option<i128>,
    pub timestamp: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PurchaseEvent {
    pub payer: Address,
    pub beneficiary: Address,
    pub value: i128,
    pub tokens: i128,
    pub immediate_bonus: i128,
    pub locked_bonus: i128,
    pub timestamp: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct FinalizeEvent {
    pub total_raised: i128,
    pub vault_balance: i128,
    pub timestamp: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ClaimEvent {
    pub beneficiary: Address,
    pub tier: BonusTier,
    pub amount: i128,
    pub timestamp: u64,
}

pub fn emit_initialized(env: &Env, owner: Address, terms: SaleTerms) {
    env.events().publish((SALE_TOPIC, INIT), (owner, terms));
}

pub fn emit_whitelisted(env: &Env, account: Address, allowance: Option<i128>) {
    let event = WhitelistEvent {
        account,
        allowance,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish((SALE_TOPIC, WL_ADD), event);
}

pub fn emit_whitelist_removed(env: &Env, account: Address) {
    let event = WhitelistEvent {
        account,
        allowance: None,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish((SALE_TOPIC, WL_REMOVE), event);
}

pub fn emit_purchase(env: &Env, event: PurchaseEvent) {
    env.events()
        .publish((SALE_TOPIC, PURCHASE, event.beneficiary.clone()), event);
}

pub fn emit_finalized(env: &Env, total_raised: i128, vault_balance: i128) {
    let event = FinalizeEvent {
        total_raised,
        vault_balance,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish((SALE_TOPIC, FINALIZE), event);
}

pub fn emit_secondary_unlocked(env: &Env) {
    env.events()
        .publish((SALE_TOPIC, UNLOCK), env.ledger().timestamp());
}

pub fn emit_claimed(env: &Env, beneficiary: Address, tier: BonusTier, amount: i128) {
    let event = ClaimEvent {
        beneficiary: beneficiary.clone(),
        tier,
        amount,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish((SALE_TOPIC, CLAIM, beneficiary), event);
}

pub fn emit_owner_changed(env: &Env, previous: Address, new_owner: Address) {
    env.events().publish((SALE_TOPIC, OWNER), (previous, new_owner));
}
