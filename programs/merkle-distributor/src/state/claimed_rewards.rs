use anchor_lang::prelude::*;

use crate::{error::ErrorCode, state::distributor_config::DistributorConfig};

/// How much a claimant has been paid so far, across every root the distributor has had.
///
/// Created lazily on the first claim. A record that does not exist yet behaves exactly like
/// one with `claimed == 0`.
#[account]
#[derive(Default, Debug)]
pub struct ClaimedRewards {
    /// Bump seed.
    pub bump: u8,
    /// Authority that claimed the tokens.
    pub claimant: Pubkey,
    /// Cumulative amount paid out. Never decreases.
    pub claimed: u64,
}

impl ClaimedRewards {
    pub const SEED: &'static [u8] = b"ClaimedRewards";
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimedRewards>();

    /// Returns the amount owed for a claim of `total_amount`, without mutating anything.
    /// CHECK:
    ///     1. The distributor is not shut down
    ///     2. The proof places (claimant, total_amount) under the current root
    ///     3. total_amount is more than what was already claimed
    pub fn amount_owed(
        &self,
        config: &DistributorConfig,
        claimant: &Pubkey,
        total_amount: u64,
        proof: &[[u8; 32]],
    ) -> std::result::Result<u64, ErrorCode> {
        if config.shutdown {
            return Err(ErrorCode::Shutdown);
        }
        if !config.verify_claim(claimant, total_amount, proof) {
            return Err(ErrorCode::InvalidProof);
        }
        if total_amount <= self.claimed {
            return Err(ErrorCode::AlreadyClaimed);
        }

        total_amount
            .checked_sub(self.claimed)
            .ok_or(ErrorCode::ArithmeticError)
    }

    /// Records a claim that passed [ClaimedRewards::amount_owed].
    pub fn record_claim(&mut self, bump: u8, claimant: Pubkey, total_amount: u64) {
        self.bump = bump;
        self.claimant = claimant;
        self.claimed = total_amount;
    }
}
