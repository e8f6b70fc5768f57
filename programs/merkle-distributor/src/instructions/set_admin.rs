use anchor_lang::{
    accounts::{account::Account, signer::Signer},
    context::Context,
    prelude::*,
    Accounts, Result,
};

use crate::{
    error::ErrorCode,
    state::{distributor_config::DistributorConfig, events::AdminUpdatedEvent},
};

/// [merkle_distributor::set_admin] accounts.
#[derive(Accounts)]
pub struct SetAdmin<'info> {
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

/// Sets new admin account
/// CHECK:
///     1. The new admin is not the same as the old one
#[allow(clippy::result_large_err)]
pub fn handle_set_admin(ctx: Context<SetAdmin>, new_admin: Pubkey) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let old_admin = config.admin;

    config.set_admin(ctx.accounts.admin.key, new_admin)?;

    // Note: might get truncated, do not rely on
    msg!("set new admin to {}", new_admin);
    emit!(AdminUpdatedEvent {
        old_admin,
        new_admin
    });

    Ok(())
}
