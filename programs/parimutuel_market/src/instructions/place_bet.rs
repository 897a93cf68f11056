//! Bet Placement
//!
//! Stakes lamports on one side of an open market. The stake moves into
//! the market account, which doubles as the pooled escrow, and the
//! side's accumulator is bumped in the same atomic instruction. The bet
//! PDA is keyed by (market, bettor), so a wallet holds at most one open
//! position per market.

use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::state::{Bet, Market, Side};

/// Event emitted when a stake enters the pool
#[event]
pub struct BetPlaced {
    pub market: Pubkey,
    pub bettor: Pubkey,
    pub side: Side,
    pub amount: u64,
}

#[derive(Accounts)]
pub struct PlaceBet<'info> {
    /// Market being bet on; also the escrow holding the pooled stakes
    #[account(mut)]
    pub market: Account<'info, Market>,

    #[account(
        init,
        payer = bettor,
        space = 8 + Bet::INIT_SPACE,
        seeds = [Bet::SEED, market.key().as_ref(), bettor.key().as_ref()],
        bump,
    )]
    pub bet: Account<'info, Bet>,

    #[account(mut)]
    pub bettor: Signer<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> PlaceBet<'info> {
    pub fn place_bet(&mut self, side: u8, amount: u64, bumps: &PlaceBetBumps) -> Result<()> {
        let side = Side::from_arg(side)?;
        let now = Clock::get()?.unix_timestamp;

        self.market.record_stake(side, amount, now)?;

        // Move the stake into the pooled escrow. The market account is
        // program-owned, so it can receive lamports here and release them
        // again at withdrawal.
        system_program::transfer(
            CpiContext::new(
                self.system_program.to_account_info(),
                system_program::Transfer {
                    from: self.bettor.to_account_info(),
                    to: self.market.to_account_info(),
                },
            ),
            amount,
        )?;

        self.bet.set_inner(Bet {
            bettor: self.bettor.key(),
            market: self.market.key(),
            side,
            amount,
            withdrawn: false,
            bump: bumps.bet,
        });

        emit!(BetPlaced {
            market: self.market.key(),
            bettor: self.bettor.key(),
            side,
            amount,
        });

        Ok(())
    }
}
