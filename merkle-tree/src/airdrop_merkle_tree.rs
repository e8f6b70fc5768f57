use std::{
    collections::{HashMap, HashSet},
    fs::File,
    io::{BufReader, Write},
    path::Path,
    result,
};

use indexmap::{map::Entry, IndexMap};
use merkle_verify::{verify, HASH_BYTES};
use serde::{Deserialize, Serialize};
use solana_program::pubkey::Pubkey;
use tracing::{info, warn};

use crate::{
    csv_entry::CsvEntry,
    error::{MerkleTreeError, MerkleTreeError::MerkleValidationError},
    merkle_tree::MerkleTree,
    tree_node::TreeNode,
    utils::get_max_total_claim,
};

/// Merkle Tree which will be used to distribute tokens to claimants.
/// Contains all the information necessary to verify claims against the Merkle Tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirdropMerkleTree {
    /// The merkle root, which is uploaded on-chain
    pub merkle_root: [u8; HASH_BYTES],
    pub max_num_nodes: u64,
    pub max_total_claim: u64,
    pub tree_nodes: Vec<TreeNode>,
}

pub type Result<T> = result::Result<T, MerkleTreeError>;

impl AirdropMerkleTree {
    pub fn new(tree_nodes: Vec<TreeNode>) -> Result<Self> {
        // Combine tree nodes with the same claimant, while retaining original order
        let mut tree_nodes_map: IndexMap<Pubkey, TreeNode> = IndexMap::new();
        for tree_node in tree_nodes {
            match tree_nodes_map.entry(tree_node.claimant) {
                Entry::Occupied(mut entry) => {
                    warn!("duplicate claimant {} found, combining", tree_node.claimant);
                    let existing = entry.get_mut();
                    existing.amount = existing
                        .amount
                        .checked_add(tree_node.amount)
                        .ok_or(MerkleTreeError::AmountOverflow(tree_node.claimant))?;
                }
                Entry::Vacant(entry) => {
                    entry.insert(tree_node);
                }
            }
        }

        let mut tree_nodes: Vec<TreeNode> = tree_nodes_map.into_values().collect();

        let hashed_nodes = tree_nodes.iter().map(TreeNode::hash).collect::<Vec<_>>();
        let tree = MerkleTree::new(&hashed_nodes)?;

        for (i, tree_node) in tree_nodes.iter_mut().enumerate() {
            tree_node.proof = Some(tree.proof(i)?);
        }

        let max_total_claim = get_max_total_claim(&tree_nodes)?;
        let tree = AirdropMerkleTree {
            merkle_root: tree.root(),
            max_num_nodes: tree_nodes.len() as u64,
            max_total_claim,
            tree_nodes,
        };

        info!(
            "created merkle tree with {} nodes and max total claim of {}",
            tree.max_num_nodes, tree.max_total_claim
        );
        tree.validate()?;
        Ok(tree)
    }

    pub fn new_from_entries(entries: Vec<CsvEntry>) -> Result<Self> {
        let tree_nodes = entries
            .into_iter()
            .map(TreeNode::try_from)
            .collect::<Result<Vec<_>>>()?;
        Self::new(tree_nodes)
    }

    /// Load a merkle tree from a csv path
    pub fn new_from_csv(path: &Path) -> Result<Self> {
        Self::new_from_entries(CsvEntry::new_from_file(path)?)
    }

    /// Load a serialized merkle tree from file path. The nodes must hash to the stored root.
    pub fn new_from_file(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let tree: AirdropMerkleTree = serde_json::from_reader(reader)?;

        tree.validate()?;
        Ok(tree)
    }

    /// Write a merkle tree to a filepath
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let serialized = serde_json::to_string_pretty(&self)?;
        let mut file = File::create(path)?;
        file.write_all(serialized.as_bytes())?;
        Ok(())
    }

    pub fn get_node(&self, claimant: &Pubkey) -> Option<&TreeNode> {
        self.tree_nodes.iter().find(|n| n.claimant == *claimant)
    }

    fn validate(&self) -> Result<()> {
        // The Merkle tree can be at most height 32, implying a max node count of 2^32 - 1
        if self.max_num_nodes > 2u64.pow(32) - 1 {
            return Err(MerkleValidationError(format!(
                "Max num nodes {} is greater than 2^32 - 1",
                self.max_num_nodes
            )));
        }

        if self.tree_nodes.len() != self.max_num_nodes as usize {
            return Err(MerkleValidationError(format!(
                "Tree nodes length {} does not match max_num_nodes {}",
                self.tree_nodes.len(),
                self.max_num_nodes
            )));
        }

        let unique_nodes: HashSet<_> = self.tree_nodes.iter().map(|n| n.claimant).collect();
        if unique_nodes.len() != self.tree_nodes.len() {
            return Err(MerkleValidationError(
                "Duplicate claimants found".to_string(),
            ));
        }

        let sum = get_max_total_claim(&self.tree_nodes)?;
        if sum != self.max_total_claim {
            return Err(MerkleValidationError(format!(
                "Tree nodes sum {} does not match max_total_claim {}",
                sum, self.max_total_claim
            )));
        }

        self.verify_proof()
    }

    /// verify that the leaves of the merkle tree match the nodes
    pub fn verify_proof(&self) -> Result<()> {
        let root = self.merkle_root;

        // Recreate root given nodes
        let hashed_nodes: Vec<[u8; HASH_BYTES]> =
            self.tree_nodes.iter().map(TreeNode::hash).collect();
        let mk = MerkleTree::new(&hashed_nodes)?;

        if mk.root() != root {
            return Err(MerkleValidationError(
                "Merkle root is invalid given nodes".to_string(),
            ));
        }

        // Verify each node against the root, using the proof stored on the node
        for (node, leaf) in self.tree_nodes.iter().zip(hashed_nodes) {
            let proof = node.proof.as_ref().ok_or_else(|| {
                MerkleValidationError(format!("missing proof for {}", node.claimant))
            })?;

            if !verify(proof, root, leaf) {
                return Err(MerkleValidationError(format!(
                    "invalid merkle proof for {}",
                    node.claimant
                )));
            }
        }

        Ok(())
    }

    /// Check that this tree can replace `previous` on-chain without taking anything away:
    /// every earlier claimant must still be present with at least the same cumulative amount.
    pub fn check_rotation(&self, previous: &AirdropMerkleTree) -> Result<()> {
        let next = self.convert_to_hashmap();
        for prev in &previous.tree_nodes {
            let node = next
                .get(&prev.claimant)
                .ok_or(MerkleTreeError::ClaimantDropped(prev.claimant))?;
            if node.amount < prev.amount {
                return Err(MerkleTreeError::EntitlementDecreased {
                    claimant: prev.claimant,
                    previous: prev.amount,
                    next: node.amount,
                });
            }
        }
        Ok(())
    }

    // Converts Merkle Tree to a map for faster key access
    pub fn convert_to_hashmap(&self) -> HashMap<Pubkey, TreeNode> {
        self.tree_nodes
            .iter()
            .map(|n| (n.claimant, n.clone()))
            .collect()
    }
}
