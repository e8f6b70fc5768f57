use anchor_lang::{context::Context, prelude::*, system_program::System, Accounts, Key, Result};
use anchor_spl::{
    associated_token::AssociatedToken,
    token,
    token::{Mint, Token, TokenAccount},
};

use crate::{
    error::ErrorCode,
    state::{
        claimed_rewards::ClaimedRewards, distributor_config::DistributorConfig,
        events::ClaimedEvent,
    },
};

/// [merkle_distributor::claim] accounts.
#[derive(Accounts)]
pub struct Claim<'info> {
    /// The [DistributorConfig].
    #[account(
        seeds = [DistributorConfig::SEED.as_ref()],
        bump = config.bump,
    )]
    pub config: Account<'info, DistributorConfig>,

    /// The mint being distributed.
    #[account(address = config.mint)]
    pub mint: Account<'info, Mint>,

    /// Claimant's record, created on the first claim.
    #[account(
        init_if_needed,
        seeds = [
            ClaimedRewards::SEED.as_ref(),
            claimant.key().to_bytes().as_ref()
        ],
        bump,
        space = ClaimedRewards::LEN,
        payer = claimant
    )]
    pub claimed_rewards: Account<'info, ClaimedRewards>,

    /// Distributor ATA containing the tokens to distribute.
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = config.key(),
        address = config.token_vault
    )]
    pub from: Account<'info, TokenAccount>,

    /// Account to send the claimed tokens to.
    #[account(
        init_if_needed,
        payer = claimant,
        associated_token::mint = mint,
        associated_token::authority = claimant,
    )]
    pub to: Account<'info, TokenAccount>,

    /// Who is claiming the tokens.
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// SPL [Token] program.
    pub token_program: Program<'info, Token>,

    /// The [Associated Token] program.
    pub associated_token_program: Program<'info, AssociatedToken>,

    /// The [System] program.
    pub system_program: Program<'info, System>,
}

/// Claims whatever the claimant is owed under the current root.
/// 1. Computes the delta between total_amount and the amount already claimed
/// 2. Records total_amount as claimed
/// 3. Transfers the delta to the claimant
/// CHECK:
///     1. The distributor has not been shut down
///     2. The merkle proof is valid for (claimant, total_amount)
///     3. total_amount is larger than what was already claimed
///     4. The vault can cover the delta
#[allow(clippy::result_large_err)]
pub fn handle_claim(ctx: Context<Claim>, total_amount: u64, proof: Vec<[u8; 32]>) -> Result<()> {
    let claimant = ctx.accounts.claimant.key();
    let config = &ctx.accounts.config;
    let claimed_rewards = &mut ctx.accounts.claimed_rewards;

    let amount = claimed_rewards.amount_owed(config, &claimant, total_amount, &proof)?;

    require_gte!(
        ctx.accounts.from.amount,
        amount,
        ErrorCode::InsufficientBalance
    );

    claimed_rewards.record_claim(ctx.bumps.claimed_rewards, claimant, total_amount);

    let seeds = [DistributorConfig::SEED.as_ref(), &[config.bump]];

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
        amount,
    )?;

    // Note: might get truncated, do not rely on
    msg!(
        "Claimed {} for {}, total claimed {}",
        amount,
        claimant,
        total_amount
    );
    emit!(ClaimedEvent {
        claimant,
        amount,
        total_claimed: total_amount,
    });

    Ok(())
}
