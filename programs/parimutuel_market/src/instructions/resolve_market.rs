//! Market Resolution
//!
//! The oracle writes the final outcome of a market in the `Resolving`
//! state. From that point the pools are frozen and winners may withdraw.
//!
//! The oracle can be the creator themselves, a committee wallet or an
//! automated resolver; the program only checks the key recorded at
//! creation.

use anchor_lang::prelude::*;

use crate::escrow;
use crate::state::{Market, Outcome};

/// Event emitted when a market is resolved
#[event]
pub struct MarketResolved {
    pub market: Pubkey,
    pub outcome: Outcome,
    pub total_pool: u64,
    pub timestamp: i64,
}

#[derive(Accounts)]
pub struct ResolveMarket<'info> {
    #[account(mut)]
    pub market: Account<'info, Market>,

    /// Oracle recorded on the market at creation
    pub oracle: Signer<'info>,
}

impl<'info> ResolveMarket<'info> {
    pub fn resolve_market(&mut self, outcome: u8) -> Result<()> {
        let outcome = Outcome::from_arg(outcome)?;
        self.market.resolve(&self.oracle.key(), outcome)?;

        let total_pool = escrow::pool_total(self.market.total_yes, self.market.total_no)?;
        let clock = Clock::get()?;

        emit!(MarketResolved {
            market: self.market.key(),
            outcome,
            total_pool,
            timestamp: clock.unix_timestamp,
        });

        msg!("Market {} resolved: {:?}", self.market.key(), outcome);

        Ok(())
    }
}
