//! Parimutuel payout computation
//!
//! Pure integer arithmetic over the two pool accumulators. Intermediate
//! products are widened to `u128` so that `amount * losing_pool` cannot
//! overflow, and the division truncates down per bet: summed over all
//! winners the payouts never exceed `winning_pool + losing_pool`, so the
//! escrow can always cover every withdrawal.

use anchor_lang::prelude::*;

use crate::errors::MarketError;

/// Payout owed to a winning stake of `amount`
///
/// Returns `amount + amount * losing_pool / winning_pool`. With nobody on
/// the losing side there is nothing to redistribute and the principal
/// comes straight back.
pub fn winning_payout(amount: u64, winning_pool: u64, losing_pool: u64) -> Result<u64> {
    if losing_pool == 0 {
        return Ok(amount);
    }

    // A winning stake implies a non-empty winning pool; a zero pool here
    // means the accumulators are corrupt.
    require!(winning_pool > 0, MarketError::DivisionByZero);

    let share = (amount as u128)
        .checked_mul(losing_pool as u128)
        .ok_or(MarketError::Overflow)?
        .checked_div(winning_pool as u128)
        .ok_or(MarketError::DivisionByZero)?;

    let payout = (amount as u128)
        .checked_add(share)
        .ok_or(MarketError::Overflow)?;

    u64::try_from(payout).map_err(|_| error!(MarketError::Overflow))
}

/// Combined escrow pool of a market
pub fn pool_total(total_yes: u64, total_no: u64) -> Result<u64> {
    let total = total_yes
        .checked_add(total_no)
        .ok_or(MarketError::Overflow)?;
    Ok(total)
}
