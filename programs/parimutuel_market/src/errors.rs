//! Error codes surfaced to callers
//!
//! Every rejection here is deterministic: the same arguments against the
//! same account state always produce the same code, and validation runs
//! before any account write.

use anchor_lang::prelude::*;

#[error_code]
pub enum MarketError {
    #[msg("Question exceeds the 100 byte limit")]
    QuestionTooLong,
    #[msg("End time must be in the future")]
    EndTimeInPast,
    #[msg("Side must be 1 (Yes) or 2 (No)")]
    InvalidSide,
    #[msg("Bet amount must be greater than zero")]
    InvalidAmount,
    #[msg("Signer is not allowed to perform this operation")]
    Unauthorized,
    #[msg("Market status does not permit this operation")]
    InvalidStateTransition,
    #[msg("Winnings were already withdrawn for this bet")]
    AlreadyWithdrawn,
    #[msg("Arithmetic overflow")]
    Overflow,
    #[msg("Division by zero")]
    DivisionByZero,
}
