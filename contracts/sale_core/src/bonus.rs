//! Bonus schedule arithmetic.
//!
//! Bonus is always derived from the base token amount of a single
//! contribution and split into an immediate tranche and a locked tranche.

use crate::errors::SaleError;
use crate::types::{BonusRates, Purchase, BPS_DENOMINATOR};

pub const WEEK: u64 = 7 * 24 * 60 * 60;

/// Timed sale schedule, one entry per phase window. Contributions made after
/// the last window receive no bonus.
pub const TIMED_PHASES: [BonusRates; 4] = [
    BonusRates::new(1_000, 2_000),
    BonusRates::new(750, 1_500),
    BonusRates::new(500, 1_000),
    BonusRates::new(250, 500),
];

/// The capacity sale is an early sale in its entirety.
pub const EARLY_RATES: BonusRates = BonusRates::new(2_000, 4_000);

/// Zero-based phase window containing `now`, or `None` before opening.
pub fn phase_index(opening_time: u64, phase_duration: u64, now: u64) -> Option<u64> {
    if now < opening_time || phase_duration == 0 {
        return None;
    }
    Some((now - opening_time) / phase_duration)
}

pub fn timed_rates(opening_time: u64, phase_duration: u64, now: u64) -> BonusRates {
    match phase_index(opening_time, phase_duration, now) {
        Some(index) if (index as usize) < TIMED_PHASES.len() => TIMED_PHASES[index as usize],
        _ => BonusRates::NONE,
    }
}

pub fn base_tokens(value: i128, rate: i128) -> Result<i128, SaleError> {
    value.checked_mul(rate).ok_or(SaleError::Overflow)
}

fn apply_bps(amount: i128, bps: u32) -> Result<i128, SaleError> {
    amount
        .checked_mul(bps as i128)
        .map(|scaled| scaled / BPS_DENOMINATOR)
        .ok_or(SaleError::Overflow)
}

/// Computes the full token split for `value` contributed at `rate`.
pub fn split(value: i128, rate: i128, rates: BonusRates) -> Result<Purchase, SaleError> {
    let base = base_tokens(value, rate)?;
    Ok(Purchase {
        base_tokens: base,
        immediate_bonus: apply_bps(base, rates.immediate_bps)?,
        locked_bonus: apply_bps(base, rates.locked_bps())?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ETHER: i128 = 1_000_000_000_000_000_000;
    const RATE: i128 = 8_000;

    #[test]
    fn test_phase_one_split() {
        let purchase = split(10 * ETHER, RATE, TIMED_PHASES[0]).unwrap();
        assert_eq!(purchase.base_tokens, 80_000 * ETHER);
        assert_eq!(purchase.immediate_bonus, 8_000 * ETHER);
        assert_eq!(purchase.immediate_bonus + purchase.locked_bonus, 16_000 * ETHER);
    }

    #[test]
    fn test_phase_windows_are_inclusive_exclusive() {
        let opening = 1_000;
        assert_eq!(timed_rates(opening, WEEK, opening - 1), BonusRates::NONE);
        assert_eq!(timed_rates(opening, WEEK, opening), TIMED_PHASES[0]);
        assert_eq!(timed_rates(opening, WEEK, opening + WEEK - 1), TIMED_PHASES[0]);
        assert_eq!(timed_rates(opening, WEEK, opening + WEEK), TIMED_PHASES[1]);
        assert_eq!(timed_rates(opening, WEEK, opening + 3 * WEEK + 10), TIMED_PHASES[3]);
        assert_eq!(timed_rates(opening, WEEK, opening + 4 * WEEK), BonusRates::NONE);
    }

    #[test]
    fn test_rates_decrease_each_phase() {
        for pair in TIMED_PHASES.windows(2) {
            assert!(pair[1].immediate_bps < pair[0].immediate_bps);
            assert!(pair[1].total_bps < pair[0].total_bps);
        }
    }

    #[test]
    fn test_split_accumulates_exactly_within_a_phase() {
        let single = split(3 * ETHER, RATE, TIMED_PHASES[1]).unwrap();
        let a = split(ETHER, RATE, TIMED_PHASES[1]).unwrap();
        let b = split(2 * ETHER, RATE, TIMED_PHASES[1]).unwrap();
        assert_eq!(a.immediate_bonus + b.immediate_bonus, single.immediate_bonus);
        assert_eq!(a.locked_bonus + b.locked_bonus, single.locked_bonus);
    }

    #[test]
    fn test_no_bonus_after_schedule() {
        let purchase = split(10 * ETHER, RATE, BonusRates::NONE).unwrap();
        assert_eq!(purchase.base_tokens, 80_000 * ETHER);
        assert_eq!(purchase.immediate_bonus, 0);
        assert_eq!(purchase.locked_bonus, 0);
    }

    #[test]
    fn test_early_rates_double_locked_tranche() {
        let purchase = split(10 * ETHER, RATE, EARLY_RATES).unwrap();
        assert_eq!(purchase.immediate_bonus, 16_000 * ETHER);
        assert_eq!(purchase.locked_bonus, 16_000 * ETHER);
    }

    #[test]
    fn test_overflow_is_reported() {
        assert_eq!(split(i128::MAX, 2, EARLY_RATES), Err(SaleError::Overflow));
    }
}
