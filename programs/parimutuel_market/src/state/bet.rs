//! Bet State
//!
//! One account per (market, bettor) pair, enforced by the PDA derivation:
//! a second bet from the same wallet on the same market lands on an
//! already-initialized address and is rejected by the runtime.

use anchor_lang::prelude::*;

use crate::errors::MarketError;
use crate::escrow;
use crate::state::{Market, MarketStatus, Side};

/// A single participant's stake on one side of one market
///
/// Seeds: ["bet", market, bettor]
#[account]
#[derive(InitSpace)]
pub struct Bet {
    /// Wallet that placed the stake
    pub bettor: Pubkey,

    /// Market this bet belongs to
    pub market: Pubkey,

    /// Chosen side, immutable after creation
    pub side: Side,

    /// Staked lamports, immutable after creation
    pub amount: u64,

    /// Set exactly once by a successful withdrawal
    pub withdrawn: bool,

    /// PDA bump seed
    pub bump: u8,
}

impl Bet {
    pub const SEED: &'static [u8] = b"bet";

    /// Derive the bet address for `(market, bettor)`
    pub fn find_address(market: &Pubkey, bettor: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[Self::SEED, market.as_ref(), bettor.as_ref()],
            program_id,
        )
    }

    /// Settle this bet against a resolved market and return the payout
    ///
    /// A losing bet settles with a zero payout on its first call; only a
    /// repeated call fails with `AlreadyWithdrawn`. Winners receive their
    /// principal plus a pro-rata share of the losing pool.
    pub fn settle(&mut self, market: &Market) -> Result<u64> {
        require!(
            market.status == MarketStatus::Resolved,
            MarketError::InvalidStateTransition
        );
        require!(!self.withdrawn, MarketError::AlreadyWithdrawn);

        self.withdrawn = true;

        if self.side.outcome() != market.outcome {
            return Ok(0);
        }

        let (winning_pool, losing_pool) = market.pools()?;
        escrow::winning_payout(self.amount, winning_pool, losing_pool)
    }
}
