//! # Escrow Module
//!
//! Payout arithmetic for the pooled (parimutuel) escrow.
//!
//! All stakes on a market sit in one pot. After resolution the losing
//! side's pool is distributed to winners in proportion to their share of
//! the winning pool:
//!
//! ```text
//!            losing pool
//!   ┌─────────────────────────┐
//!   │  split pro-rata between │      payout(w) = w + w * L / W
//!   │  the winning stakes     │
//!   └─────────────────────────┘      W = winning pool, L = losing pool
//!            winning pool
//!   ┌─────────────────────────┐
//!   │  returned 1:1           │
//!   └─────────────────────────┘
//! ```

pub mod parimutuel;

pub use parimutuel::*;
