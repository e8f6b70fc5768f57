use std::str::FromStr;

use merkle_verify::{hash_leaf, HASH_BYTES};
use serde::{Deserialize, Serialize};
use solana_program::pubkey::Pubkey;

use crate::{csv_entry::CsvEntry, error::MerkleTreeError};

/// Represents the claim information for an account.
#[derive(Debug, Clone, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Pubkey of the claimant; will be responsible for signing the claim
    pub claimant: Pubkey,
    /// Cumulative amount the claimant is entitled to under this tree
    pub amount: u64,
    /// Claimant's proof of inclusion in the Merkle Tree
    pub proof: Option<Vec<[u8; HASH_BYTES]>>,
}

impl TreeNode {
    pub fn new(claimant: Pubkey, amount: u64) -> Self {
        Self {
            claimant,
            amount,
            proof: None,
        }
    }

    /// Leaf commitment for this node
    pub fn hash(&self) -> [u8; HASH_BYTES] {
        hash_leaf(&self.claimant, self.amount)
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }
}

impl TryFrom<CsvEntry> for TreeNode {
    type Error = MerkleTreeError;

    fn try_from(entry: CsvEntry) -> Result<Self, Self::Error> {
        let claimant = Pubkey::from_str(entry.pubkey.trim()).map_err(|source| {
            MerkleTreeError::InvalidPubkey {
                pubkey: entry.pubkey.clone(),
                source,
            }
        })?;
        Ok(Self::new(claimant, entry.amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_tree_node() {
        let tree_node = TreeNode {
            claimant: Pubkey::default(),
            amount: 0,
            proof: Some(vec![[3u8; 32]]),
        };
        let serialized = serde_json::to_string(&tree_node).unwrap();
        let deserialized: TreeNode = serde_json::from_str(&serialized).unwrap();
        assert_eq!(tree_node, deserialized);
    }

    #[test]
    fn test_hash_uses_leaf_encoding() {
        let node = TreeNode::new(Pubkey::new_from_array([1u8; 32]), 1000);
        assert_eq!(
            node.hash(),
            hash_leaf(&Pubkey::new_from_array([1u8; 32]), 1000)
        );
    }

    #[test]
    fn test_from_csv_entry() {
        let entry = CsvEntry {
            pubkey: "FLYqJsmJ5AGMxMxK3Qy1rSen4ES2dqqo6h51W3C1tYS".to_string(),
            amount: 77,
        };
        let node = TreeNode::try_from(entry).unwrap();
        assert_eq!(
            node.claimant.to_string(),
            "FLYqJsmJ5AGMxMxK3Qy1rSen4ES2dqqo6h51W3C1tYS"
        );
        assert_eq!(node.amount(), 77);
        assert!(node.proof.is_none());
    }

    #[test]
    fn test_from_csv_entry_bad_pubkey() {
        let entry = CsvEntry {
            pubkey: "not-a-pubkey".to_string(),
            amount: 1,
        };
        assert!(matches!(
            TreeNode::try_from(entry),
            Err(MerkleTreeError::InvalidPubkey { .. })
        ));
    }
}
