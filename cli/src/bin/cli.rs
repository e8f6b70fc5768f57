extern crate merkle_distributor;
extern crate merkle_tree;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};
use clap::{Parser, Subcommand};
use merkle_tree::{
    airdrop_merkle_tree::AirdropMerkleTree,
    csv_entry::CsvEntry,
    utils::{get_claimed_rewards_pda, get_distributor_config_pda},
};
use merkle_verify::{hash_leaf, verify, HASH_BYTES};
use serde::{Deserialize, Serialize};
use solana_program::pubkey::Pubkey;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod instructions;
use instructions::*;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    #[clap(subcommand)]
    pub command: Commands,

    /// Program id
    #[clap(long, env, default_value_t = merkle_distributor::id())]
    pub program_id: Pubkey,
}

// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a Merkle tree, given a CSV of recipients
    CreateMerkleTree(CreateMerkleTreeArgs),
    /// Print a claimant's cumulative amount and proof
    GetProof(GetProofArgs),
    /// Check a claim against a tree's root, or an explicitly given root, before submitting it
    VerifyClaim(VerifyClaimArgs),
    /// Check that a new tree only grows entitlements compared to the previous one
    CheckRotation(CheckRotationArgs),
    /// Print the config and claim record addresses
    GetPdas(GetPdasArgs),
    CreateDummyCsv(CreateDummyCsv),
}

#[derive(Parser, Debug)]
pub struct CreateMerkleTreeArgs {
    /// CSV path
    #[clap(long, env)]
    pub csv_path: PathBuf,

    /// Merkle tree out path
    #[clap(long, env)]
    pub merkle_tree_path: PathBuf,
}

#[derive(Parser, Debug)]
pub struct GetProofArgs {
    /// Merkle tree path
    #[clap(long, env)]
    pub merkle_tree_path: PathBuf,

    #[clap(long, env)]
    pub claimant: Pubkey,
}

#[derive(Parser, Debug)]
pub struct VerifyClaimArgs {
    /// Merkle tree path
    #[clap(long, env)]
    pub merkle_tree_path: PathBuf,

    #[clap(long, env)]
    pub claimant: Pubkey,

    /// Cumulative amount to check, defaults to the amount in the tree
    #[clap(long, env)]
    pub amount: Option<u64>,

    /// Hex encoded root to check against, defaults to the root in the tree
    #[clap(long, env)]
    pub root: Option<String>,
}

#[derive(Parser, Debug)]
pub struct CheckRotationArgs {
    /// Tree whose root is currently on-chain
    #[clap(long, env)]
    pub previous_tree_path: PathBuf,

    /// Tree about to be published
    #[clap(long, env)]
    pub merkle_tree_path: PathBuf,
}

#[derive(Parser, Debug)]
pub struct GetPdasArgs {
    #[clap(long, env)]
    pub claimant: Option<Pubkey>,
}

#[derive(Parser, Debug)]
pub struct CreateDummyCsv {
    /// CSV path
    #[clap(long, env)]
    pub csv_path: PathBuf,
    #[clap(long, env)]
    pub num_records: u64,
    #[clap(long, env)]
    pub amount: u64,
}

/// What a claimant needs to submit a claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProof {
    pub claimant: String,
    pub amount: u64,
    pub merkle_root: String,
    pub proof: Vec<[u8; HASH_BYTES]>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    match &args.command {
        Commands::CreateMerkleTree(merkle_tree_args) => {
            process_create_merkle_tree(merkle_tree_args)?;
        }
        Commands::GetProof(get_proof_args) => {
            let user_proof = process_get_proof(get_proof_args)?;
            println!("{}", serde_json::to_string_pretty(&user_proof)?);
        }
        Commands::VerifyClaim(verify_claim_args) => {
            process_verify_claim(verify_claim_args)?;
        }
        Commands::CheckRotation(check_rotation_args) => {
            process_check_rotation(check_rotation_args)?;
        }
        Commands::GetPdas(get_pdas_args) => {
            process_get_pdas(&args, get_pdas_args);
        }
        Commands::CreateDummyCsv(dummy_args) => {
            process_create_dummy_csv(dummy_args)?;
        }
    }

    Ok(())
}

/// Parses a 32 byte hex root, with or without a `0x` prefix.
pub fn parse_root(root: &str) -> Result<[u8; HASH_BYTES]> {
    let cleaned = root.trim();
    let cleaned = cleaned.strip_prefix("0x").unwrap_or(cleaned);
    let mut out = [0u8; HASH_BYTES];
    hex::decode_to_slice(cleaned, &mut out).map_err(|e| anyhow!("invalid root {root}: {e}"))?;
    Ok(out)
}
