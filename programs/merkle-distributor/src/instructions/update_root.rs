use anchor_lang::{
    accounts::{account::Account, signer::Signer},
    context::Context,
    prelude::*,
    Accounts, Result,
};

use crate::{
    error::ErrorCode,
    state::{distributor_config::DistributorConfig, events::RootUpdatedEvent},
};

/// [merkle_distributor::update_root] accounts.
#[derive(Accounts)]
pub struct UpdateRoot<'info> {
    /// The [DistributorConfig].
    #[account(
        mut,
        seeds = [DistributorConfig::SEED.as_ref()],
        bump = config.bump,
    )]
    pub config: Account<'info, DistributorConfig>,

    /// Admin signer
    #[account(address = config.admin @ ErrorCode::Unauthorized)]
    pub admin: Signer<'info>,
}

/// Publishes a new root. Claim records are left alone, so claimants keep their
/// progress and only collect the difference under the new root.
/// CHECK:
///     1. The new root is not the same as the old one
#[allow(clippy::result_large_err)]
pub fn handle_update_root(ctx: Context<UpdateRoot>, new_root: [u8; 32]) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let old_root = config.root;

    config.update_root(ctx.accounts.admin.key, new_root)?;

    // Note: might get truncated, do not rely on
    msg!("updated root from {:?} to {:?}", old_root, new_root);

    emit!(RootUpdatedEvent { old_root, new_root });

    Ok(())
}
