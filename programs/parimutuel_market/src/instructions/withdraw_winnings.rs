//! Winnings Withdrawal
//!
//! Settles a bet against a resolved market. A winner receives their
//! principal plus a pro-rata share of the losing pool, paid out of the
//! market account's pooled lamports. A losing bet settles with nothing
//! owed; either way the bet is marked withdrawn and a repeated call
//! fails.

use anchor_lang::prelude::*;

use crate::errors::MarketError;
use crate::state::{Bet, Market};

/// Event emitted when a bet is settled
#[event]
pub struct WinningsWithdrawn {
    pub market: Pubkey,
    pub bettor: Pubkey,
    pub payout: u64,
}

#[derive(Accounts)]
pub struct WithdrawWinnings<'info> {
    #[account(mut)]
    pub market: Account<'info, Market>,

    #[account(
        mut,
        has_one = bettor @ MarketError::Unauthorized,
        has_one = market @ MarketError::Unauthorized,
        seeds = [Bet::SEED, market.key().as_ref(), bettor.key().as_ref()],
        bump = bet.bump,
    )]
    pub bet: Account<'info, Bet>,

    #[account(mut)]
    pub bettor: Signer<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> WithdrawWinnings<'info> {
    pub fn withdraw_winnings(&mut self) -> Result<()> {
        let payout = self.bet.settle(&self.market)?;

        if payout > 0 {
            // The market account is program-owned; release the payout by
            // moving lamports directly. Payouts are bounded by the
            // recorded pools, so the rent-exempt reserve stays intact.
            **self.market.to_account_info().try_borrow_mut_lamports()? -= payout;
            **self.bettor.to_account_info().try_borrow_mut_lamports()? += payout;
        }

        emit!(WinningsWithdrawn {
            market: self.market.key(),
            bettor: self.bettor.key(),
            payout,
        });

        Ok(())
    }
}
