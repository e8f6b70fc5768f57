use std::result;

use merkle_verify::{combine, HASH_BYTES};

use crate::error::MerkleTreeError;

pub type Result<T> = result::Result<T, MerkleTreeError>;

/// Binary hash tree over an ordered list of leaf commitments.
///
/// `levels[0]` holds the leaves in the order they were supplied and the last level holds
/// only the root. Adjacent nodes `(2i, 2i + 1)` are combined with the sorted-pair hash; on a
/// level of odd length the final node is promoted to the next level unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleTree {
    levels: Vec<Vec<[u8; HASH_BYTES]>>,
}

impl MerkleTree {
    pub fn new(leaves: &[[u8; HASH_BYTES]]) -> Result<Self> {
        if leaves.is_empty() {
            return Err(MerkleTreeError::EmptyTree);
        }

        let mut levels = Vec::new();
        let mut current = leaves.to_vec();
        while current.len() > 1 {
            let next = current
                .chunks(2)
                .map(|pair| match pair.get(1) {
                    Some(right) => combine(&pair[0], right),
                    None => pair[0],
                })
                .collect();
            levels.push(std::mem::replace(&mut current, next));
        }
        levels.push(current);

        Ok(Self { levels })
    }

    pub fn root(&self) -> [u8; HASH_BYTES] {
        // the last level always holds exactly one node
        self.levels[self.levels.len() - 1][0]
    }

    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    pub fn levels(&self) -> &[Vec<[u8; HASH_BYTES]>] {
        &self.levels
    }

    /// Sibling hashes from the leaf at `index` up to, but excluding, the root.
    ///
    /// Levels where the node was promoted without a partner contribute nothing, so proofs
    /// in an unbalanced tree may be shorter than the tree height.
    pub fn proof(&self, index: usize) -> Result<Vec<[u8; HASH_BYTES]>> {
        if index >= self.leaf_count() {
            return Err(MerkleTreeError::LeafIndexOutOfBounds {
                index,
                leaf_count: self.leaf_count(),
            });
        }

        let mut proof = Vec::with_capacity(self.levels.len() - 1);
        let mut index = index;
        for level in &self.levels[..self.levels.len() - 1] {
            let sibling = if index % 2 == 0 { index + 1 } else { index - 1 };
            if let Some(node) = level.get(sibling) {
                proof.push(*node);
            }
            index /= 2;
        }

        Ok(proof)
    }
}
