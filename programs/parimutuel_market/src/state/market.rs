//! Market State
//!
//! Each market represents a single yes/no question with a settlement
//! deadline and one pooled stake per side. The account address is derived
//! from content (creator, question digest, deadline), so any party can
//! recompute it offline without an index.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hash;

use crate::errors::MarketError;

/// Individual prediction market account
///
/// Seeds: ["market", authority, sha256(question), end_time_le]
#[account]
#[derive(InitSpace)]
pub struct Market {
    /// Market creator; may close betting once the deadline passes
    pub authority: Pubkey,

    /// Address authorized to resolve the outcome (may equal authority)
    pub oracle: Pubkey,

    /// The prediction question
    /// Example: "Will ETH flip BTC by market cap in 2026?"
    #[max_len(100)]
    pub question: String,

    /// Unix timestamp after which betting is no longer accepted
    pub end_time: i64,

    /// Total lamports staked on Yes
    pub total_yes: u64,

    /// Total lamports staked on No
    pub total_no: u64,

    /// Market lifecycle status
    pub status: MarketStatus,

    /// Winning outcome (only valid after resolution)
    pub outcome: Outcome,

    /// Whether the market was vetted by the operator; informational only
    pub is_curated: bool,

    /// PDA bump seed
    pub bump: u8,
}

impl Market {
    pub const SEED: &'static [u8] = b"market";

    /// Hard limit on the question, in bytes
    pub const MAX_QUESTION_LEN: usize = 100;

    pub fn validate_question(question: &str) -> Result<()> {
        require!(
            question.len() <= Self::MAX_QUESTION_LEN,
            MarketError::QuestionTooLong
        );
        Ok(())
    }

    /// Fixed-length digest of the question used as a PDA seed
    ///
    /// Hashing keeps the seed independent of the question's length, which
    /// would otherwise overflow the 32 byte per-seed limit.
    pub fn question_digest(question: &str) -> [u8; 32] {
        hash(question.as_bytes()).to_bytes()
    }

    /// Derive the market address for `(authority, question, end_time)`
    ///
    /// Deterministic: identical inputs always yield the same address;
    /// changing any input changes it.
    pub fn find_address(
        authority: &Pubkey,
        question: &str,
        end_time: i64,
        program_id: &Pubkey,
    ) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[
                Self::SEED,
                authority.as_ref(),
                &Self::question_digest(question),
                &end_time.to_le_bytes(),
            ],
            program_id,
        )
    }

    /// Record a stake on one side of an open market
    ///
    /// Betting is permitted strictly before `end_time`. A rejected stake
    /// leaves the accumulators untouched.
    pub fn record_stake(&mut self, side: Side, amount: u64, now: i64) -> Result<()> {
        require!(
            self.status == MarketStatus::Open,
            MarketError::InvalidStateTransition
        );
        require!(now < self.end_time, MarketError::InvalidStateTransition);
        require!(amount > 0, MarketError::InvalidAmount);

        match side {
            Side::Yes => {
                self.total_yes = self
                    .total_yes
                    .checked_add(amount)
                    .ok_or(MarketError::Overflow)?;
            }
            Side::No => {
                self.total_no = self
                    .total_no
                    .checked_add(amount)
                    .ok_or(MarketError::Overflow)?;
            }
        }
        Ok(())
    }

    /// Close betting: `Open -> Resolving`
    ///
    /// Only the authority or the oracle may close, and only once the
    /// deadline has passed.
    pub fn close(&mut self, signer: &Pubkey, now: i64) -> Result<()> {
        require!(
            self.status == MarketStatus::Open,
            MarketError::InvalidStateTransition
        );
        require!(now >= self.end_time, MarketError::InvalidStateTransition);
        require!(
            *signer == self.authority || *signer == self.oracle,
            MarketError::Unauthorized
        );

        self.status = MarketStatus::Resolving;
        Ok(())
    }

    /// Settle the outcome: `Resolving -> Resolved`
    ///
    /// The outcome is written exactly once, by the oracle.
    pub fn resolve(&mut self, signer: &Pubkey, outcome: Outcome) -> Result<()> {
        require!(outcome != Outcome::Unset, MarketError::InvalidSide);
        require!(
            self.status == MarketStatus::Resolving,
            MarketError::InvalidStateTransition
        );
        require!(*signer == self.oracle, MarketError::Unauthorized);

        self.outcome = outcome;
        self.status = MarketStatus::Resolved;
        Ok(())
    }

    /// Pools of a resolved market as `(winning, losing)`
    pub fn pools(&self) -> Result<(u64, u64)> {
        match self.outcome {
            Outcome::Yes => Ok((self.total_yes, self.total_no)),
            Outcome::No => Ok((self.total_no, self.total_yes)),
            Outcome::Unset => err!(MarketError::InvalidStateTransition),
        }
    }
}

/// Market lifecycle status
///
/// Linear machine: `Open -> Resolving -> Resolved`, no reopening.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug, Default)]
pub enum MarketStatus {
    /// Accepting bets until the deadline
    #[default]
    Open,
    /// Betting closed, awaiting the oracle
    Resolving,
    /// Outcome written, winners may withdraw
    Resolved,
}

/// Prediction outcome
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug, Default)]
pub enum Outcome {
    /// Not yet determined
    #[default]
    Unset,
    /// YES outcome occurred
    Yes,
    /// NO outcome occurred
    No,
}

impl Outcome {
    /// Decode the wire encoding (1 = Yes, 2 = No)
    pub fn from_arg(raw: u8) -> Result<Outcome> {
        match raw {
            1 => Ok(Outcome::Yes),
            2 => Ok(Outcome::No),
            _ => err!(MarketError::InvalidSide),
        }
    }
}

/// Side of a bet
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug)]
pub enum Side {
    Yes,
    No,
}

impl Side {
    /// Decode the wire encoding (1 = Yes, 2 = No)
    pub fn from_arg(raw: u8) -> Result<Side> {
        match raw {
            1 => Ok(Side::Yes),
            2 => Ok(Side::No),
            _ => err!(MarketError::InvalidSide),
        }
    }

    /// The outcome under which this side wins
    pub fn outcome(self) -> Outcome {
        match self {
            Side::Yes => Outcome::Yes,
            Side::No => Outcome::No,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const END: i64 = 1_900_000_000;

    fn open_market(authority: Pubkey, oracle: Pubkey) -> Market {
        Market {
            authority,
            oracle,
            question: "Will it rain tomorrow?".to_string(),
            end_time: END,
            total_yes: 0,
            total_no: 0,
            status: MarketStatus::Open,
            outcome: Outcome::Unset,
            is_curated: false,
            bump: 255,
        }
    }

    #[test]
    fn address_derivation_is_deterministic() {
        let authority = Pubkey::new_unique();
        let a = Market::find_address(&authority, "Will it rain?", END, &crate::ID);
        let b = Market::find_address(&authority, "Will it rain?", END, &crate::ID);
        assert_eq!(a, b);
    }

    #[test]
    fn address_derivation_separates_inputs() {
        let authority = Pubkey::new_unique();
        let base = Market::find_address(&authority, "Will it rain?", END, &crate::ID).0;

        let other_question = Market::find_address(&authority, "Will it snow?", END, &crate::ID).0;
        let other_deadline = Market::find_address(&authority, "Will it rain?", END + 1, &crate::ID).0;
        let other_authority =
            Market::find_address(&Pubkey::new_unique(), "Will it rain?", END, &crate::ID).0;

        assert_ne!(base, other_question);
        assert_ne!(base, other_deadline);
        assert_ne!(base, other_authority);
    }

    #[test]
    fn long_question_digest_stays_fixed_length() {
        let digest = Market::question_digest(&"x".repeat(500));
        assert_eq!(digest.len(), 32);
    }

    #[test]
    fn question_over_limit_rejected() {
        assert_eq!(
            Market::validate_question(&"x".repeat(200)),
            Err(MarketError::QuestionTooLong.into())
        );
        assert!(Market::validate_question(&"x".repeat(100)).is_ok());
    }

    #[test]
    fn stakes_accumulate_per_side() {
        let mut market = open_market(Pubkey::new_unique(), Pubkey::new_unique());

        market.record_stake(Side::Yes, 1_000_000, END - 10).unwrap();
        market.record_stake(Side::No, 250_000, END - 10).unwrap();
        market.record_stake(Side::Yes, 500_000, END - 1).unwrap();

        assert_eq!(market.total_yes, 1_500_000);
        assert_eq!(market.total_no, 250_000);
        assert_eq!(market.total_yes + market.total_no, 1_750_000);
    }

    #[test]
    fn stake_rejected_at_or_after_deadline() {
        let mut market = open_market(Pubkey::new_unique(), Pubkey::new_unique());

        assert_eq!(
            market.record_stake(Side::Yes, 1, END),
            Err(MarketError::InvalidStateTransition.into())
        );
        assert_eq!(market.total_yes, 0);
    }

    #[test]
    fn stake_requires_open_status() {
        let mut market = open_market(Pubkey::new_unique(), Pubkey::new_unique());
        market.status = MarketStatus::Resolving;

        assert_eq!(
            market.record_stake(Side::No, 1, END - 10),
            Err(MarketError::InvalidStateTransition.into())
        );
    }

    #[test]
    fn stake_rejects_zero_amount() {
        let mut market = open_market(Pubkey::new_unique(), Pubkey::new_unique());

        assert_eq!(
            market.record_stake(Side::Yes, 0, END - 10),
            Err(MarketError::InvalidAmount.into())
        );
    }

    #[test]
    fn close_before_deadline_rejected() {
        let authority = Pubkey::new_unique();
        let mut market = open_market(authority, Pubkey::new_unique());

        assert_eq!(
            market.close(&authority, END - 1),
            Err(MarketError::InvalidStateTransition.into())
        );
        assert_eq!(market.status, MarketStatus::Open);
    }

    #[test]
    fn close_requires_authority_or_oracle() {
        let authority = Pubkey::new_unique();
        let oracle = Pubkey::new_unique();

        let mut market = open_market(authority, oracle);
        assert_eq!(
            market.close(&Pubkey::new_unique(), END),
            Err(MarketError::Unauthorized.into())
        );

        market.close(&oracle, END).unwrap();
        assert_eq!(market.status, MarketStatus::Resolving);
    }

    #[test]
    fn close_succeeds_exactly_once() {
        let authority = Pubkey::new_unique();
        let mut market = open_market(authority, Pubkey::new_unique());

        market.close(&authority, END).unwrap();
        assert_eq!(
            market.close(&authority, END + 1),
            Err(MarketError::InvalidStateTransition.into())
        );
    }

    #[test]
    fn resolve_requires_resolving_status() {
        let oracle = Pubkey::new_unique();
        let mut market = open_market(Pubkey::new_unique(), oracle);

        assert_eq!(
            market.resolve(&oracle, Outcome::Yes),
            Err(MarketError::InvalidStateTransition.into())
        );
    }

    #[test]
    fn resolve_requires_oracle() {
        let authority = Pubkey::new_unique();
        let mut market = open_market(authority, Pubkey::new_unique());
        market.status = MarketStatus::Resolving;

        // The authority may close but never resolve.
        assert_eq!(
            market.resolve(&authority, Outcome::Yes),
            Err(MarketError::Unauthorized.into())
        );
    }

    #[test]
    fn resolve_writes_outcome_exactly_once() {
        let oracle = Pubkey::new_unique();
        let mut market = open_market(Pubkey::new_unique(), oracle);
        market.status = MarketStatus::Resolving;

        market.resolve(&oracle, Outcome::No).unwrap();
        assert_eq!(market.status, MarketStatus::Resolved);
        assert_eq!(market.outcome, Outcome::No);

        assert_eq!(
            market.resolve(&oracle, Outcome::Yes),
            Err(MarketError::InvalidStateTransition.into())
        );
        assert_eq!(market.outcome, Outcome::No);
    }

    #[test]
    fn resolve_rejects_unset_outcome() {
        let oracle = Pubkey::new_unique();
        let mut market = open_market(Pubkey::new_unique(), oracle);
        market.status = MarketStatus::Resolving;

        assert_eq!(
            market.resolve(&oracle, Outcome::Unset),
            Err(MarketError::InvalidSide.into())
        );
    }

    #[test]
    fn outcome_arg_decoding() {
        assert_eq!(Outcome::from_arg(1).unwrap(), Outcome::Yes);
        assert_eq!(Outcome::from_arg(2).unwrap(), Outcome::No);
        assert_eq!(Outcome::from_arg(0), Err(MarketError::InvalidSide.into()));
        assert_eq!(Outcome::from_arg(3), Err(MarketError::InvalidSide.into()));
    }

    #[test]
    fn account_layout_round_trips() {
        let market = Market {
            total_yes: 1_000_000,
            total_no: 500_000,
            status: MarketStatus::Resolved,
            outcome: Outcome::Yes,
            is_curated: true,
            ..open_market(Pubkey::new_unique(), Pubkey::new_unique())
        };

        let mut data: Vec<u8> = Vec::new();
        market.try_serialize(&mut data).unwrap();

        let decoded = Market::try_deserialize(&mut data.as_slice()).unwrap();
        assert_eq!(decoded.authority, market.authority);
        assert_eq!(decoded.question, market.question);
        assert_eq!(decoded.end_time, market.end_time);
        assert_eq!(decoded.total_yes, 1_000_000);
        assert_eq!(decoded.total_no, 500_000);
        assert_eq!(decoded.status, MarketStatus::Resolved);
        assert_eq!(decoded.outcome, Outcome::Yes);
        assert!(decoded.is_curated);

        // A foreign account type must not decode as a Market.
        let mut corrupted = data.clone();
        corrupted[0] ^= 0xff;
        assert!(Market::try_deserialize(&mut corrupted.as_slice()).is_err());
    }
}
