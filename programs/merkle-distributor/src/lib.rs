//! A program for distributing tokens against a
//! [Merkle root](https://en.wikipedia.org/wiki/Merkle_tree) of cumulative entitlements.
//!
//! # Rationale
//!
//! Only a single 32-byte root is kept on-chain. Each leaf commits to a claimant and the
//! *total* amount they are entitled to so far, so the admin can publish a new root with
//! larger amounts at any time. A claimant proves their leaf under the current root and
//! receives the difference between that total and what they have already been paid.
//!
//! Claim progress lives in a per-claimant [state::claimed_rewards::ClaimedRewards] account
//! which is never reset by a root rotation, so tokens cannot be claimed twice and earlier
//! claims are never lost.

#![allow(clippy::result_large_err)]
use anchor_lang::prelude::*;

pub use instructions::*;

pub mod error;
pub mod instructions;
pub mod state;


declare_id!("8LxW6m2hQymvR5hxvDC68P6Qfk5muvFv7ttnDgYSQGzb");

#[program]
pub mod merkle_distributor {
    use super::*;

    /// Creates the distributor config and its token vault. The root starts as all zeroes.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        handle_initialize(ctx)
    }

    pub fn claim(ctx: Context<Claim>, total_amount: u64, proof: Vec<[u8; 32]>) -> Result<()> {
        handle_claim(ctx, total_amount, proof)
    }

    pub fn update_root(ctx: Context<UpdateRoot>, new_root: [u8; 32]) -> Result<()> {
        handle_update_root(ctx, new_root)
    }

    pub fn set_admin(ctx: Context<SetAdmin>, new_admin: Pubkey) -> Result<()> {
        handle_set_admin(ctx, new_admin)
    }

    /// Irreversible. Sweeps the remaining vault balance to the admin.
    pub fn shutdown(ctx: Context<Shutdown>) -> Result<()> {
        handle_shutdown(ctx)
    }
}
