use crate::errors::SaleError;
use crate::events::{self, PurchaseEvent};
use crate::ledger::{self, IssuingLedger};
use crate::types::{BonusRates, Purchase};
use crate::{bonus, storage, vault, whitelist};
use soroban_sdk::{log, Address, Env};

/// The checks and bookkeeping that differ between sale variants.
pub trait SaleRules {
    fn ensure_open(env: &Env) -> Result<(), SaleError>;

    /// Value `beneficiary` may still contribute before hitting a cap.
    fn remaining_cap(env: &Env, beneficiary: &Address) -> Result<i128, SaleError>;

    fn consume_cap(env: &Env, beneficiary: &Address, value: i128) -> Result<(), SaleError>;

    fn bonus_rates(env: &Env) -> Result<BonusRates, SaleError>;
}

/// A contribution below the minimum is still accepted when it exactly fills a
/// remaining cap that is itself below the minimum.
pub fn meets_minimum(value: i128, minimum: i128, remaining_cap: i128) -> bool {
    value >= minimum || (remaining_cap < minimum && value == remaining_cap)
}

/// Accepts `value` from `payer` on behalf of `beneficiary`.
///
/// Every eligibility check runs before the payment is forwarded or any token
/// moves; a failure leaves no trace.
pub fn buy_tokens<R: SaleRules>(
    env: &Env,
    payer: &Address,
    beneficiary: &Address,
    value: i128,
) -> Result<Purchase, SaleError> {
    payer.require_auth();
    let terms = storage::get_terms(env)?;

    if value <= 0 {
        return Err(SaleError::BelowMinimumContribution);
    }
    R::ensure_open(env)?;
    whitelist::ensure_whitelisted(env, beneficiary)?;

    let remaining = R::remaining_cap(env, beneficiary)?;
    if value > remaining {
        log!(env, "contribution exceeds cap", value, remaining);
        return Err(SaleError::CapExceeded);
    }
    if !meets_minimum(value, terms.min_contribution, remaining) {
        return Err(SaleError::BelowMinimumContribution);
    }

    let purchase = bonus::split(value, terms.rate, R::bonus_rates(env)?)?;
    let issuing = IssuingLedger::new(env, &terms);
    issuing.ensure_allowance(purchase.base_tokens)?;
    let raised = storage::get_wei_raised(env)
        .checked_add(value)
        .ok_or(SaleError::Overflow)?;

    ledger::forward_payment(env, &terms, payer, value);
    issuing.pull(beneficiary, purchase.base_tokens)?;

    R::consume_cap(env, beneficiary, value)?;
    storage::set_wei_raised(env, raised);
    vault::credit(
        env,
        beneficiary,
        purchase.immediate_bonus,
        purchase.locked_bonus,
    )?;

    events::emit_purchase(
        env,
        PurchaseEvent {
            payer: payer.clone(),
            beneficiary: beneficiary.clone(),
            value,
            tokens: purchase.base_tokens,
            immediate_bonus: purchase.immediate_bonus,
            locked_bonus: purchase.locked_bonus,
            timestamp: env.ledger().timestamp(),
        },
    );
    Ok(purchase)
}
