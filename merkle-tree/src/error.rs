use solana_program::pubkey::{ParsePubkeyError, Pubkey};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MerkleTreeError {
    #[error("Merkle Tree Validation Error: {0}")]
    MerkleValidationError(String),
    #[error("Cannot build a merkle tree without leaves")]
    EmptyTree,
    #[error("Leaf index {index} out of bounds for tree with {leaf_count} leaves")]
    LeafIndexOutOfBounds { index: usize, leaf_count: usize },
    #[error("Amount overflow while summing entitlements for {0}")]
    AmountOverflow(Pubkey),
    #[error("Claimant {0} is missing from the new tree")]
    ClaimantDropped(Pubkey),
    #[error("Entitlement for {claimant} decreased from {previous} to {next}")]
    EntitlementDecreased {
        claimant: Pubkey,
        previous: u64,
        next: u64,
    },
    #[error("Invalid pubkey {pubkey}: {source}")]
    InvalidPubkey {
        pubkey: String,
        source: ParsePubkeyError,
    },
    #[error("io Error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Serde Error: {0}")]
    SerdeError(#[from] serde_json::Error),
    #[error("Csv Error: {0}")]
    CsvError(#[from] csv::Error),
}
