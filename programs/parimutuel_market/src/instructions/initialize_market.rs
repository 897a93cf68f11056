//! Market Creation
//!
//! Opens a new yes/no market. The market address is derived from the
//! creator, a digest of the question and the deadline, so creating the
//! same market twice lands on the same address and the second attempt is
//! rejected by the runtime.

use anchor_lang::prelude::*;

use crate::errors::MarketError;
use crate::state::{Market, MarketStatus, Outcome};

/// Event emitted when a market is created
#[event]
pub struct MarketInitialized {
    pub market: Pubkey,
    pub authority: Pubkey,
    pub oracle: Pubkey,
    pub end_time: i64,
    pub is_curated: bool,
}

#[derive(Accounts)]
#[instruction(question: String, end_time: i64)]
pub struct InitializeMarket<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + Market::INIT_SPACE,
        seeds = [
            Market::SEED,
            authority.key().as_ref(),
            &Market::question_digest(&question),
            &end_time.to_le_bytes(),
        ],
        bump,
    )]
    pub market: Account<'info, Market>,

    /// Market creator; pays for the account and its rent-exempt reserve
    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeMarket<'info> {
    pub fn initialize_market(
        &mut self,
        question: String,
        end_time: i64,
        oracle: Pubkey,
        is_curated: bool,
        bumps: &InitializeMarketBumps,
    ) -> Result<()> {
        Market::validate_question(&question)?;

        let now = Clock::get()?.unix_timestamp;
        require!(end_time > now, MarketError::EndTimeInPast);

        self.market.set_inner(Market {
            authority: self.authority.key(),
            oracle,
            question,
            end_time,
            total_yes: 0,
            total_no: 0,
            status: MarketStatus::Open,
            outcome: Outcome::Unset,
            is_curated,
            bump: bumps.market,
        });

        emit!(MarketInitialized {
            market: self.market.key(),
            authority: self.authority.key(),
            oracle,
            end_time,
            is_curated,
        });

        Ok(())
    }
}
