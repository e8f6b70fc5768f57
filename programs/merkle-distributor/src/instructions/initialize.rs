use anchor_lang::{
    context::Context, prelude::*, solana_program::bpf_loader_upgradeable, Accounts, Key,
};
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::state::distributor_config::DistributorConfig;

/// Accounts for [merkle_distributor::initialize].
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// [DistributorConfig].
    #[account(
        init_if_needed,
        seeds = [DistributorConfig::SEED.as_ref()],
        bump,
        space = DistributorConfig::LEN,
        payer = admin
    )]
    pub config: Account<'info, DistributorConfig>,

    /// The mint to distribute.
    pub mint: Account<'info, Mint>,

    /// Token vault, owned by the config PDA.
    #[account(
        init_if_needed,
        payer = admin,
        associated_token::mint = mint,
        associated_token::authority = config,
    )]
    pub token_vault: Account<'info, TokenAccount>,

    /// Admin wallet, responsible for creating the distributor and paying for the transaction.
    #[account(mut)]
    pub admin: Signer<'info>,

    /// This program's data account. When supplied, the admin must be the upgrade authority.
    #[account(
        seeds = [crate::ID.as_ref()],
        bump,
        seeds::program = bpf_loader_upgradeable::ID,
    )]
    pub program_data: Option<Account<'info, ProgramData>>,

    /// The [System] program.
    pub system_program: Program<'info, System>,

    /// The [Associated Token] program.
    pub associated_token_program: Program<'info, AssociatedToken>,

    /// The [Token] program.
    pub token_program: Program<'info, Token>,
}

/// Creates the [DistributorConfig] with an all-zero root.
/// The admin publishes the first real root with `update_root`,
/// and the token_vault should be funded before claims begin.
/// Without `program_data` the first signer becomes admin, so deployments should pass it.
/// CHECK:
///     1. The admin is the program's upgrade authority, if `program_data` is given
///     2. The config has not been initialized before
#[allow(clippy::result_large_err)]
pub fn handle_initialize(ctx: Context<Initialize>) -> Result<()> {
    let token_vault = ctx.accounts.token_vault.key();
    let mint = ctx.accounts.mint.key();
    let admin = ctx.accounts.admin.key();

    if let Some(program_data) = &ctx.accounts.program_data {
        DistributorConfig::check_upgrade_authority(program_data.upgrade_authority_address, &admin)?;
    }

    ctx.accounts
        .config
        .initialize(ctx.bumps.config, mint, token_vault, admin)?;

    // Note: might get truncated, do not rely on
    msg!(
        "Distributor initialized with mint={}, vault={}, admin={}",
        mint,
        token_vault,
        admin
    );

    Ok(())
}
