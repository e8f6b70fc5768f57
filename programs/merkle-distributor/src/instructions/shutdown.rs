use anchor_lang::{context::Context, prelude::*, system_program::System, Accounts, Key, Result};
use anchor_spl::{
    associated_token::AssociatedToken,
    token,
    token::{Mint, Token, TokenAccount},
};

use crate::{
    error::ErrorCode,
    state::{distributor_config::DistributorConfig, events::ShutdownEvent},
};

/// [merkle_distributor::shutdown] accounts.
#[derive(Accounts)]
pub struct Shutdown<'info> {
    /// The [DistributorConfig].
    #[account(
        mut,
        seeds = [DistributorConfig::SEED.as_ref()],
        bump = config.bump,
    )]
    pub config: Account<'info, DistributorConfig>,

    #[account(address = config.mint)]
    pub mint: Account<'info, Mint>,

    /// Distributor ATA containing the undistributed tokens.
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = config.key(),
        address = config.token_vault,
    )]
    pub from: Account<'info, TokenAccount>,

    /// Admin token account receiving the remaining vault balance.
    #[account(
        init_if_needed,
        payer = admin,
        associated_token::mint = mint,
        associated_token::authority = admin,
    )]
    pub to: Account<'info, TokenAccount>,

    /// Admin signer
    #[account(mut, address = config.admin @ ErrorCode::Unauthorized)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

/// Shuts the distributor down for good:
/// 1. Marks the config as shut down, so every later claim fails
/// 2. Transfers the remaining vault balance to the admin
/// CHECK:
///     1. The distributor is not already shut down
#[allow(clippy::result_large_err)]
pub fn handle_shutdown(ctx: Context<Shutdown>) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let config = &mut ctx.accounts.config;
    config.shutdown(&admin)?;

    let swept_amount = ctx.accounts.from.amount;
    if swept_amount > 0 {
        let seeds = [
            DistributorConfig::SEED.as_ref(),
            &[ctx.accounts.config.bump],
        ];

        token::transfer(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                token::Transfer {
                    from: ctx.accounts.from.to_account_info(),
                    to: ctx.accounts.to.to_account_info(),
                    authority: ctx.accounts.config.to_account_info(),
                },
            )
            .with_signer(&[&seeds[..]]),
            swept_amount,
        )?;
    }

    // Note: might get truncated, do not rely on
    msg!("distributor shut down, swept {} to {}", swept_amount, admin);
    emit!(ShutdownEvent {
        admin,
        swept_amount
    });

    Ok(())
}
