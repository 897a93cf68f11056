//! Market Closing
//!
//! Moves a market from `Open` to `Resolving` once its deadline has
//! passed. Either the creator or the oracle may close; the transition
//! only stops new bets, the outcome still belongs to the oracle.

use anchor_lang::prelude::*;

use crate::state::Market;

/// Event emitted when betting closes
#[event]
pub struct MarketClosed {
    pub market: Pubkey,
    pub closed_by: Pubkey,
}

#[derive(Accounts)]
pub struct CloseMarket<'info> {
    #[account(mut)]
    pub market: Account<'info, Market>,

    /// Market authority or oracle
    pub signer: Signer<'info>,
}

impl<'info> CloseMarket<'info> {
    pub fn close_market(&mut self) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let signer = self.signer.key();
        Market::close(&mut self.market, &signer, now)?;

        emit!(MarketClosed {
            market: self.market.key(),
            closed_by: self.signer.key(),
        });

        Ok(())
    }
}
