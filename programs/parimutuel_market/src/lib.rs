//! # Parimutuel Market
//!
//! Binary-outcome prediction markets on Solana with pooled payouts.
//!
//! ## Overview
//!
//! Anyone opens a market around a yes/no question with a deadline, other
//! wallets stake lamports on either side, and a designated oracle writes
//! the outcome once the deadline passes. Winners withdraw their stake
//! plus a pro-rata share of the losing pool.
//!
//! ## How it works
//! - Market and bet addresses are derived from content, so any client
//!   recomputes them offline and a wallet holds one position per market.
//! - Stakes sit as lamports in the market account itself until settled.
//! - The lifecycle is a linear machine: Open -> Resolving -> Resolved.

use anchor_lang::prelude::*;

pub mod errors;
pub mod escrow;
pub mod instructions;
pub mod state;

pub use escrow::*;
pub use instructions::*;

// Replace with your deployed program ID
declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

/// Main parimutuel market program
#[program]
pub mod parimutuel_market {
    use super::*;

    /// Open a new market around a yes/no question
    pub fn initialize_market(
        ctx: Context<InitializeMarket>,
        question: String,
        end_time: i64,
        oracle: Pubkey,
        is_curated: bool,
    ) -> Result<()> {
        ctx.accounts
            .initialize_market(question, end_time, oracle, is_curated, &ctx.bumps)
    }

    /// Stake lamports on one side (1 = Yes, 2 = No)
    pub fn place_bet(ctx: Context<PlaceBet>, side: u8, amount: u64) -> Result<()> {
        ctx.accounts.place_bet(side, amount, &ctx.bumps)
    }

    /// Stop betting once the deadline has passed
    pub fn close_market(ctx: Context<CloseMarket>) -> Result<()> {
        ctx.accounts.close_market()
    }

    /// Write the final outcome (1 = Yes, 2 = No; oracle only)
    pub fn resolve_market(ctx: Context<ResolveMarket>, outcome: u8) -> Result<()> {
        ctx.accounts.resolve_market(outcome)
    }

    /// Settle a bet against a resolved market
    pub fn withdraw_winnings(ctx: Context<WithdrawWinnings>) -> Result<()> {
        ctx.accounts.withdraw_winnings()
    }
}
