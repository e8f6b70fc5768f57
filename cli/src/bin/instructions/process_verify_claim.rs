use crate::*;

/// Runs the same check the program runs for a claim, without submitting anything.
pub fn process_verify_claim(verify_claim_args: &VerifyClaimArgs) -> Result<()> {
    let merkle_tree = AirdropMerkleTree::new_from_file(&verify_claim_args.merkle_tree_path)?;
    let claimant = verify_claim_args.claimant;
    let node = merkle_tree
        .get_node(&claimant)
        .ok_or_else(|| anyhow!("claimant {claimant} not found in tree"))?;

    let amount = verify_claim_args.amount.unwrap_or(node.amount);
    let root = match &verify_claim_args.root {
        Some(root) => parse_root(root)?,
        None => merkle_tree.merkle_root,
    };
    let proof = node
        .proof
        .as_ref()
        .ok_or_else(|| anyhow!("proof not found for {claimant}"))?;

    if !verify(proof, root, hash_leaf(&claimant, amount)) {
        bail!(
            "claim of {amount} for {claimant} does not verify against root {}",
            hex::encode(root)
        );
    }

    info!(
        "claim of {amount} for {claimant} verifies against root {}",
        hex::encode(root)
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use merkle_tree::tree_node::TreeNode;

    use super::*;

    fn write_tree(dir: &std::path::Path, claimant: Pubkey) -> (PathBuf, AirdropMerkleTree) {
        let tree = AirdropMerkleTree::new(vec![
            TreeNode::new(claimant, 2000),
            TreeNode::new(Pubkey::new_unique(), 10),
            TreeNode::new(Pubkey::new_unique(), 20),
        ])
        .unwrap();
        let path = dir.join("tree.json");
        tree.write_to_file(&path).unwrap();
        (path, tree)
    }

    #[test]
    fn test_verify_claim() {
        let dir = tempfile::tempdir().unwrap();
        let claimant = Pubkey::new_unique();
        let (merkle_tree_path, tree) = write_tree(dir.path(), claimant);

        let args = |amount, root| VerifyClaimArgs {
            merkle_tree_path: merkle_tree_path.clone(),
            claimant,
            amount,
            root,
        };

        assert!(process_verify_claim(&args(None, None)).is_ok());
        let root = Some(hex::encode(tree.merkle_root));
        assert!(process_verify_claim(&args(Some(2000), root)).is_ok());
        assert!(process_verify_claim(&args(Some(2001), None)).is_err());
        assert!(process_verify_claim(&args(None, Some(hex::encode([0u8; 32])))).is_err());
    }

    #[test]
    fn test_get_proof_matches_tree() {
        let dir = tempfile::tempdir().unwrap();
        let claimant = Pubkey::new_unique();
        let (merkle_tree_path, tree) = write_tree(dir.path(), claimant);

        let user_proof = process_get_proof(&GetProofArgs {
            merkle_tree_path: merkle_tree_path.clone(),
            claimant,
        })
        .unwrap();
        assert_eq!(user_proof.amount, 2000);
        assert_eq!(user_proof.merkle_root, hex::encode(tree.merkle_root));
        assert!(verify(
            &user_proof.proof,
            tree.merkle_root,
            hash_leaf(&claimant, 2000)
        ));

        assert!(process_get_proof(&GetProofArgs {
            merkle_tree_path,
            claimant: Pubkey::new_unique(),
        })
        .is_err());
    }
}
