//! Instruction handlers for the parimutuel market program
//!
//! Each instruction represents an action users can take:
//! - `initialize_market` - Open a new yes/no market (permissionless)
//! - `place_bet` - Stake lamports on one side before the deadline
//! - `close_market` - Stop betting once the deadline passes
//! - `resolve_market` - Write the final outcome (oracle only)
//! - `withdraw_winnings` - Settle a bet after resolution

pub mod close_market;
pub mod initialize_market;
pub mod place_bet;
pub mod resolve_market;
pub mod withdraw_winnings;

pub use close_market::*;
pub use initialize_market::*;
pub use place_bet::*;
pub use resolve_market::*;
pub use withdraw_winnings::*;
