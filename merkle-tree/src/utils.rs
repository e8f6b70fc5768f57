use solana_program::pubkey::Pubkey;

use crate::{error::MerkleTreeError, tree_node::TreeNode};

pub const DISTRIBUTOR_CONFIG_SEED: &[u8] = b"DistributorConfig";
pub const CLAIMED_REWARDS_SEED: &[u8] = b"ClaimedRewards";

/// Given a set of tree nodes, get the max total claim amount.
pub fn get_max_total_claim(nodes: &[TreeNode]) -> Result<u64, MerkleTreeError> {
    nodes.iter().try_fold(0u64, |acc, n| {
        acc.checked_add(n.amount())
            .ok_or(MerkleTreeError::AmountOverflow(n.claimant))
    })
}

pub fn get_distributor_config_pda(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[DISTRIBUTOR_CONFIG_SEED], program_id)
}

pub fn get_claimed_rewards_pda(program_id: &Pubkey, claimant: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[CLAIMED_REWARDS_SEED, claimant.to_bytes().as_ref()],
        program_id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_max_total_claim_no_overflow() {
        let nodes = vec![
            TreeNode::new(Pubkey::new_unique(), 100),
            TreeNode::new(Pubkey::new_unique(), 300),
        ];

        assert_eq!(get_max_total_claim(&nodes).unwrap(), 400);
    }

    #[test]
    fn test_get_max_total_claim_overflow() {
        let overflowing = Pubkey::new_unique();
        let nodes = vec![
            TreeNode::new(Pubkey::new_unique(), u64::MAX),
            TreeNode::new(overflowing, 1),
        ];

        assert!(matches!(
            get_max_total_claim(&nodes),
            Err(MerkleTreeError::AmountOverflow(k)) if k == overflowing
        ));
    }

    #[test]
    fn test_claimed_rewards_pda_is_per_claimant() {
        let program_id = Pubkey::new_unique();
        let (a, _) = get_claimed_rewards_pda(&program_id, &Pubkey::new_unique());
        let (b, _) = get_claimed_rewards_pda(&program_id, &Pubkey::new_unique());
        assert_ne!(a, b);

        let claimant = Pubkey::new_unique();
        assert_eq!(
            get_claimed_rewards_pda(&program_id, &claimant),
            get_claimed_rewards_pda(&program_id, &claimant)
        );
    }
}
